//! Unit tests for gb-core primitives.

#[cfg(test)]
mod ids {
    use crate::BotId;

    #[test]
    fn ordering() {
        assert!(BotId(0) < BotId(1));
    }

    #[test]
    fn display() {
        assert_eq!(BotId(7).to_string(), "BotId(7)");
    }
}

#[cfg(test)]
mod grid {
    use crate::{Direction, Position, step_away, step_toward};

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    /// A spread of positions including negatives and coincident points.
    fn sample_positions() -> Vec<Position> {
        let mut out = Vec::new();
        for x in -3..=3 {
            for y in -3..=3 {
                out.push(p(x, y));
            }
        }
        out
    }

    #[test]
    fn manhattan_basic() {
        assert_eq!(p(0, 0).manhattan(p(3, 4)), 7);
        assert_eq!(p(-2, 5).manhattan(p(1, 1)), 7);
        assert_eq!(p(4, 4).manhattan(p(4, 4)), 0);
    }

    #[test]
    fn manhattan_symmetric_and_triangle() {
        let pts = sample_positions();
        for &a in pts.iter().step_by(5) {
            for &b in pts.iter().step_by(3) {
                assert_eq!(a.manhattan(b), b.manhattan(a));
                for &c in pts.iter().step_by(7) {
                    assert!(a.manhattan(c) <= a.manhattan(b) + b.manhattan(c));
                }
            }
        }
    }

    #[test]
    fn step_toward_stays_only_on_target() {
        for &a in &sample_positions() {
            for &b in &sample_positions() {
                let d = step_toward(a, b);
                if a == b {
                    assert_eq!(d, Direction::STAY);
                    continue;
                }
                // Exactly one component set, signed toward the target.
                assert!((d.dx == 0) ^ (d.dy == 0), "{a} -> {b} gave {d}");
                if d.dx != 0 {
                    assert_eq!(d.dx, (b.x - a.x).signum());
                } else {
                    assert_eq!(d.dy, (b.y - a.y).signum());
                }
                assert_eq!(a.offset(d).manhattan(b) + 1, a.manhattan(b));
            }
        }
    }

    #[test]
    fn step_toward_prefers_vertical_on_ties() {
        assert_eq!(step_toward(p(0, 0), p(2, 2)), Direction::SOUTH);
        assert_eq!(step_toward(p(0, 0), p(-1, -1)), Direction::NORTH);
        assert_eq!(step_toward(p(0, 0), p(3, 2)), Direction::EAST);
        assert_eq!(step_toward(p(5, 3), p(5, 5)), Direction::SOUTH);
    }

    #[test]
    fn step_away_increases_distance() {
        let me = p(0, 0);
        for &threat in &sample_positions() {
            if threat == me {
                continue;
            }
            let d = step_away(me, threat);
            assert_eq!(me.offset(d).manhattan(threat), me.manhattan(threat) + 1);
        }
    }

    #[test]
    fn step_away_coincident_goes_north() {
        assert_eq!(step_away(p(2, 2), p(2, 2)), Direction::NORTH);
    }

    #[test]
    fn offset_and_reverse() {
        for d in Direction::CARDINALS {
            assert_eq!(p(1, 1).offset(d).offset(d.reversed()), p(1, 1));
        }
    }

    #[test]
    fn direction_display() {
        assert_eq!(Direction::EAST.to_string(), "east");
        assert_eq!(Direction::STAY.to_string(), "stay");
        assert_eq!(Direction::NORTH.as_tuple(), (0, -1));
    }
}

#[cfg(test)]
mod time {
    use crate::TimeLeft;

    #[test]
    fn secs_conversion() {
        assert_eq!(TimeLeft(8_000).secs(), 8.0);
        assert_eq!(TimeLeft(1_500).secs(), 1.5);
        assert_eq!(TimeLeft::from_secs(20), TimeLeft(20_000));
    }

    #[test]
    fn saturating_sub() {
        assert_eq!(TimeLeft(500).saturating_sub_ms(1_000), TimeLeft::ZERO);
        assert!(TimeLeft(500).saturating_sub_ms(500).is_expired());
    }

    #[test]
    fn display() {
        assert_eq!(TimeLeft(12_340).to_string(), "12.3s");
    }
}

#[cfg(test)]
mod rng {
    use crate::{BotId, BotRng};

    fn draws(rng: &mut BotRng, n: usize) -> Vec<u32> {
        let pool: Vec<u32> = (0..1_000).collect();
        (0..n).map(|_| *rng.choose(&pool).unwrap()).collect()
    }

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = BotRng::new(12345, BotId(0));
        let mut r2 = BotRng::new(12345, BotId(0));
        assert_eq!(draws(&mut r1, 100), draws(&mut r2, 100));
    }

    #[test]
    fn different_bots_differ() {
        let mut r0 = BotRng::new(1, BotId(0));
        let mut r1 = BotRng::new(1, BotId(1));
        assert_ne!(draws(&mut r0, 8), draws(&mut r1, 8), "seeds for adjacent bots should diverge");
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = BotRng::new(0, BotId(0));
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[9]), Some(&9));
    }
}
