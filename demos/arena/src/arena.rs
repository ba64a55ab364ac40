//! A deliberately small host: one controlled bot, stationary opponents.
//!
//! Per tick the arena asks the bot for a direction and then resolves it the
//! way the game server does, minus tackles and button effects:
//!
//! 1. Move one cell if the target is on the board and not occupied.
//! 2. A bot that moved onto a teleporter is sent to its partner.
//! 3. A diamond on the landing cell is picked up if it fits.
//! 4. Cargo is banked when standing on the base.
//! 5. The match clock advances by `tick_ms`.

use tracing::{debug, info};

use gb_board::Board;
use gb_core::{BotId, BotRng, GbResult};
use gb_logic::BotLogic;

/// What happened during one tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub moved:      bool,
    pub teleported: bool,
    pub picked_up:  Option<u32>,
    pub banked:     u32,
}

/// Totals reported after [`Arena::run`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub ticks:         u64,
    pub score:         u32,
    pub carried:       u32,
    pub teleports:     u32,
    pub diamonds_left: usize,
}

pub struct Arena {
    pub board:   Board,
    pub me:      BotId,
    pub tick_ms: u64,
}

impl Arena {
    pub fn new(board: Board, me: BotId, tick_ms: u64) -> Self {
        Self { board, me, tick_ms }
    }

    /// Play one tick for the controlled bot.
    pub fn step<L: BotLogic>(&mut self, logic: &mut L, rng: &mut BotRng) -> GbResult<TickOutcome> {
        let me = self.board.require_bot(self.me)?.clone();
        let dir = logic.next_move(&me, &self.board, rng);

        let mut outcome = TickOutcome::default();
        let mut pos = me.position;
        let target = pos.offset(dir);
        let occupied = self.board.opponents(self.me).any(|b| b.position == target);

        if !dir.is_stay() && self.board.contains(target) && !occupied {
            pos = target;
            outcome.moved = true;
            if let Some(partner) = self.board.teleport_partner(pos) {
                debug!(from = %pos, to = %partner, "teleported");
                pos = partner;
                outcome.teleported = true;
            }
        }

        let mut carried = me.diamonds;
        if let Some(i) = self.board.diamonds.iter().position(|d| d.position == pos) {
            let points = self.board.diamonds[i].points;
            if carried.saturating_add(points) <= me.inventory_size {
                self.board.diamonds.remove(i);
                carried += points;
                outcome.picked_up = Some(points);
            }
        }

        if pos == me.base && carried > 0 {
            outcome.banked = carried;
            carried = 0;
        }

        if let Some(bot) = self.board.bot_mut(self.me) {
            bot.position = pos;
            bot.diamonds = carried;
            bot.score = bot.score.saturating_add(outcome.banked);
            bot.milliseconds_left = bot.milliseconds_left.saturating_sub_ms(self.tick_ms);
        }

        Ok(outcome)
    }

    /// Play until the clock runs out or `max_ticks` ticks have passed.
    pub fn run<L: BotLogic>(
        &mut self,
        logic:     &mut L,
        rng:       &mut BotRng,
        max_ticks: u64,
    ) -> GbResult<Summary> {
        let mut summary = Summary::default();

        while summary.ticks < max_ticks {
            if self.board.require_bot(self.me)?.milliseconds_left.is_expired() {
                break;
            }
            let outcome = self.step(logic, rng)?;
            summary.ticks += 1;
            if outcome.teleported {
                summary.teleports += 1;
            }
            if let Some(points) = outcome.picked_up {
                debug!(tick = summary.ticks, points, "picked up diamond");
            }
            if outcome.banked > 0 {
                info!(tick = summary.ticks, banked = outcome.banked, "banked cargo");
            }
        }

        let me = self.board.require_bot(self.me)?;
        summary.score = me.score;
        summary.carried = me.diamonds;
        summary.diamonds_left = self.board.diamonds.len();
        Ok(summary)
    }
}
