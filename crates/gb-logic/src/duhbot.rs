//! `DuhBot`: a reactive diamond collector driven by a fixed priority cascade.
//!
//! # Cascade
//!
//! Rules are tried in order; the first one that applies decides the tick.
//!
//! | # | Rule               | Applies when                                            | Status written        |
//! |---|--------------------|---------------------------------------------------------|-----------------------|
//! | 1 | rush home          | carrying, < 10 s left, and time barely covers the trip  | `RushingHome`         |
//! | 2 | attack             | empty-handed and a loaded opponent is within 2          | `Attacking`           |
//! | 3 | mandatory return   | full, or 4 + a 2-pointer exists, or ≥ 3 with < 20 s     | `ReturningMandatory`  |
//! | 4 | evade              | carrying and any opponent is within 2                   | `Evading`             |
//! | 5 | teleport           | last status was not `Evading` and a teleporter is < 4   | —                     |
//! | 6 | collect            | some diamond fits in the pockets                        | `Collecting`          |
//! | 7 | seek button        | the board has buttons and one is < 3 away, not in danger| —                     |
//! | 8 | fallback return    | still carrying                                          | `ReturningFallback`   |
//! | 9 | wander             | always; uniform over in-bounds cardinal moves           | —                     |
//!
//! Numbers above are the [`LogicConfig`] defaults.
//!
//! A goal rule whose target is the bot's own cell does not apply, so the
//! cascade only returns `STAY` when wander finds no in-bounds move.
//!
//! Rules 2 and 4 act on the *first* qualifying opponent in board order, not the
//! nearest.  The danger zone is filled only by rule 4, which returns
//! immediately, so within a single tick the later rules that consult it
//! (5, 6, 7) always see it empty.  Rule 9 never consults it.

use tracing::{debug, trace};

use gb_board::{BfsRouter, Board, BotState, Button, DangerZone, Diamond, Router};
use gb_core::{BotRng, Direction, Position, step_away, step_toward};

use crate::{BotLogic, Decision, LogicConfig, LogicResult, Rule, Status};

/// The priority-cascade bot.  Generic over the teleporter search so tests and
/// hosts can substitute their own [`Router`].
pub struct DuhBot<R: Router = BfsRouter> {
    config: LogicConfig,
    router: R,
    status: Status,
    danger_zone: DangerZone,
    last_decision: Option<Decision>,
}

impl DuhBot<BfsRouter> {
    /// A bot with default thresholds and breadth-first teleporter search.
    pub fn new() -> Self {
        Self::build(LogicConfig::default(), BfsRouter)
    }

    /// A bot with custom thresholds.
    pub fn with_config(config: LogicConfig) -> LogicResult<Self> {
        Self::with_router(config, BfsRouter)
    }
}

impl Default for DuhBot<BfsRouter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Router> DuhBot<R> {
    pub fn with_router(config: LogicConfig, router: R) -> LogicResult<Self> {
        config.validate()?;
        Ok(Self::build(config, router))
    }

    fn build(config: LogicConfig, router: R) -> Self {
        Self {
            config,
            router,
            status: Status::default(),
            danger_zone: DangerZone::new(),
            last_decision: None,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Cells judged unsafe during the most recent tick.
    #[inline]
    pub fn danger_zone(&self) -> &DangerZone {
        &self.danger_zone
    }

    #[inline]
    pub fn config(&self) -> &LogicConfig {
        &self.config
    }

    #[inline]
    pub fn last_decision(&self) -> Option<Decision> {
        self.last_decision
    }

    // ── Decision ──────────────────────────────────────────────────────────

    /// Decide this tick's move and record which rule made it.
    pub fn decide(&mut self, me: &BotState, board: &Board, rng: &mut BotRng) -> Decision {
        self.danger_zone.clear();

        let decision = self.cascade(me, board, rng);
        if let Some(status) = decision.rule.status() {
            self.status = status;
        }
        self.last_decision = Some(decision);

        debug!(
            bot       = %me.id,
            position  = %me.position,
            carried   = me.diamonds,
            time_left = %me.milliseconds_left,
            rule      = %decision.rule,
            status    = %self.status,
            direction = %decision.direction,
            "decided"
        );
        decision
    }

    fn cascade(&mut self, me: &BotState, board: &Board, rng: &mut BotRng) -> Decision {
        let here = me.position;

        if let Some(step) = self.should_rush_home(me).then(|| toward(here, me.base)).flatten() {
            return Decision::new(Rule::RushHome, step);
        }

        if let Some(step) = self.attack_target(me, board).and_then(|t| toward(here, t.position)) {
            return Decision::new(Rule::Attack, step);
        }

        if let Some(step) = self.must_return(me, board).then(|| toward(here, me.base)).flatten() {
            return Decision::new(Rule::MandatoryReturn, step);
        }

        if let Some(threat) = self.first_threat(me, board) {
            self.danger_zone.insert(threat.position);
            return Decision::new(Rule::Evade, step_away(here, threat.position));
        }

        if let Some(step) = self.teleport_step(me, board) {
            return Decision::new(Rule::Teleport, step);
        }

        let danger = &self.danger_zone;

        if let Some(step) = self.best_diamond(me, board, danger).and_then(|d| toward(here, d.position)) {
            return Decision::new(Rule::Collect, step);
        }

        if let Some(step) = self.nearby_button(me, board, danger).and_then(|b| toward(here, b.position)) {
            return Decision::new(Rule::SeekButton, step);
        }

        if let Some(step) = me.is_carrying().then(|| toward(here, me.base)).flatten() {
            return Decision::new(Rule::FallbackReturn, step);
        }

        Decision::new(Rule::Wander, wander(board, here, rng))
    }

    // ── Rules ─────────────────────────────────────────────────────────────

    /// Rule 1: the clock is about to run out on cargo that is not banked yet.
    fn should_rush_home(&self, me: &BotState) -> bool {
        let secs_left = me.milliseconds_left.secs();
        if !me.is_carrying() || secs_left >= self.config.rush_home_window_secs {
            return false;
        }
        let travel_secs = me.position.manhattan(me.base) as f64 * self.config.secs_per_cell;
        secs_left < travel_secs + self.config.rush_home_margin_secs
    }

    /// Rule 2: an empty-handed bot has nothing to lose by bumping a loaded one.
    fn attack_target<'b>(&self, me: &BotState, board: &'b Board) -> Option<&'b BotState> {
        if me.is_carrying() {
            return None;
        }
        board.opponents(me.id).find(|enemy| {
            enemy.is_carrying()
                && me.position.manhattan(enemy.position) <= self.config.attack_radius
        })
    }

    /// Rule 3.
    fn must_return(&self, me: &BotState, board: &Board) -> bool {
        let carried = me.diamonds;
        let cfg = &self.config;

        carried >= cfg.inventory_size
            || (carried == cfg.top_up_cargo && board.diamonds.iter().any(|d| d.points == 2))
            || (carried >= cfg.late_game_min_cargo
                && me.milliseconds_left.secs() < cfg.late_game_secs)
    }

    /// Rule 4: first opponent in board order close enough to bump a loaded bot.
    fn first_threat<'b>(&self, me: &BotState, board: &'b Board) -> Option<&'b BotState> {
        if !me.is_carrying() {
            return None;
        }
        board
            .opponents(me.id)
            .find(|enemy| me.position.manhattan(enemy.position) <= self.config.evade_radius)
    }

    /// Rule 5: step toward a teleporter that is only a few cells away.
    fn teleport_step(&self, me: &BotState, board: &Board) -> Option<Direction> {
        if self.status == Status::Evading {
            return None;
        }
        let route = self.router.nearest_teleporter(board, me.position, &self.danger_zone)?;
        let step = route.first_step()?;
        (me.position.manhattan(route.teleporter) < self.config.teleport_reach).then_some(step)
    }

    /// Rule 6: highest `points / (distance + 1)` among diamonds that fit.
    ///
    /// Ties keep the earliest diamond in board order.
    pub(crate) fn best_diamond<'b>(
        &self,
        me:     &BotState,
        board:  &'b Board,
        danger: &DangerZone,
    ) -> Option<&'b Diamond> {
        let mut best: Option<(&Diamond, f64)> = None;

        for diamond in &board.diamonds {
            let Some(score) = self.diamond_score(me, diamond, danger) else {
                continue;
            };
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((diamond, score));
            }
        }

        best.map(|(diamond, _)| diamond)
    }

    /// Desirability of one diamond, or `None` if it would overflow the pockets.
    pub(crate) fn diamond_score(
        &self,
        me:      &BotState,
        diamond: &Diamond,
        danger:  &DangerZone,
    ) -> Option<f64> {
        let cfg = &self.config;
        if me.diamonds.saturating_add(diamond.points) > cfg.inventory_size {
            return None;
        }

        let distance = me.position.manhattan(diamond.position);
        let mut score = diamond.points as f64 / (distance as f64 + 1.0);
        if diamond.points == 2 {
            score *= cfg.two_point_bonus;
        }
        if danger.contains(diamond.position) {
            score *= cfg.danger_penalty;
        }
        trace!(diamond = %diamond.position, points = diamond.points, distance, score, "scored");
        Some(score)
    }

    /// Rule 7: first button within reach that is not marked dangerous.
    pub(crate) fn nearby_button<'b>(
        &self,
        me:     &BotState,
        board:  &'b Board,
        danger: &DangerZone,
    ) -> Option<&'b Button> {
        board.buttons.as_deref()?.iter().find(|button| {
            me.position.manhattan(button.position) < self.config.button_reach
                && !danger.contains(button.position)
        })
    }
}

/// A step toward `target`, or `None` when already standing on it so the
/// cascade moves on instead of idling.
fn toward(here: Position, target: Position) -> Option<Direction> {
    let step = step_toward(here, target);
    (!step.is_stay()).then_some(step)
}

/// Rule 9: a uniformly random in-bounds cardinal move, or `STAY` on a board
/// with nowhere to go.
fn wander(board: &Board, here: Position, rng: &mut BotRng) -> Direction {
    let options: Vec<Direction> = Direction::CARDINALS
        .into_iter()
        .filter(|&d| board.contains(here.offset(d)))
        .collect();
    rng.choose(&options).copied().unwrap_or(Direction::STAY)
}

impl<R: Router> BotLogic for DuhBot<R> {
    fn next_move(&mut self, me: &BotState, board: &Board, rng: &mut BotRng) -> Direction {
        self.decide(me, board, rng).direction
    }

    fn name(&self) -> &str {
        "duhbot"
    }
}
