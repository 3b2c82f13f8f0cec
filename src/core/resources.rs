//! Core domain: match rules, score keeping, and round timing resources.

use bevy::prelude::*;

use crate::core::state::MatchPhase;

/// Fixed player count for a local versus match.
pub const PLAYERS_COUNT: usize = 2;

/// Match rules and timing constants.
#[derive(Resource, Debug, Clone)]
pub struct MatchTuning {
    pub max_health: i32,
    pub damage_per_hit: i32,
    /// Seconds a fighter is immune after taking a hit.
    pub damage_cooldown: f64,
    /// Round length in seconds; the clock starts at `round_time - 1`.
    pub round_time: i32,
    pub wins_to_take_match: u32,
    /// Pre-round countdown seconds (the 3-2-1).
    pub prepare_countdown: i32,
    /// How long "GO!" stays on screen before the round clock starts.
    pub go_preview: f32,
    /// How long the round result banner is shown before moving on.
    pub conclude_banner: f32,
}

impl Default for MatchTuning {
    fn default() -> Self {
        Self {
            max_health: 100,
            damage_per_hit: 5,
            damage_cooldown: 0.4,
            round_time: 99,
            wins_to_take_match: 2,
            prepare_countdown: 3,
            go_preview: 1.0,
            conclude_banner: 2.0,
        }
    }
}

/// Per-player match record.
#[derive(Debug, Clone, Copy)]
pub struct PlayerSlot {
    pub player_index: usize,
    pub is_ready: bool,
    pub wins: u32,
}

/// Score keeping for the whole match.
#[derive(Resource, Debug)]
pub struct MatchScore {
    pub players: [PlayerSlot; PLAYERS_COUNT],
    pub current_round: u32,
}

impl Default for MatchScore {
    fn default() -> Self {
        let mut players = [PlayerSlot {
            player_index: 0,
            is_ready: false,
            wins: 0,
        }; PLAYERS_COUNT];
        for (index, slot) in players.iter_mut().enumerate() {
            slot.player_index = index;
        }
        Self {
            players,
            current_round: 0,
        }
    }
}

impl MatchScore {
    /// Mark a player ready. Returns true if the flag was newly set;
    /// unknown indices and repeat confirms are no-ops.
    pub fn confirm_ready(&mut self, player: usize) -> bool {
        match self.players.get_mut(player) {
            Some(slot) if !slot.is_ready => {
                slot.is_ready = true;
                true
            }
            _ => false,
        }
    }

    pub fn all_ready(&self) -> bool {
        self.players.iter().all(|slot| slot.is_ready)
    }

    pub fn is_ready(&self, player: usize) -> bool {
        self.players.get(player).is_some_and(|slot| slot.is_ready)
    }

    /// Credit a round win. Returns the new win count, or None for an
    /// unknown player index.
    pub fn record_win(&mut self, player: usize) -> Option<u32> {
        let slot = self.players.get_mut(player)?;
        slot.wins += 1;
        Some(slot.wins)
    }

    pub fn wins(&self, player: usize) -> u32 {
        self.players.get(player).map_or(0, |slot| slot.wins)
    }

    /// The player who has taken the match, if any.
    pub fn match_winner(&self, wins_to_take: u32) -> Option<usize> {
        self.players
            .iter()
            .find(|slot| slot.wins >= wins_to_take)
            .map(|slot| slot.player_index)
    }

    /// Advance to the next round and return its number.
    pub fn begin_round(&mut self) -> u32 {
        self.current_round += 1;
        self.current_round
    }

    /// Back to a fresh match: wins, ready flags, and round counter.
    pub fn reset(&mut self) {
        for slot in self.players.iter_mut() {
            slot.is_ready = false;
            slot.wins = 0;
        }
        self.current_round = 0;
    }
}

/// Counts whole seconds down from a starting value. Fractional frame time
/// accumulates until a full second has elapsed, so countdowns tick once
/// per elapsed wall-clock second regardless of frame rate.
#[derive(Debug, Clone)]
pub struct SecondTicker {
    seconds_left: i32,
    fraction: f32,
}

impl SecondTicker {
    pub fn new(seconds: i32) -> Self {
        Self {
            seconds_left: seconds.max(0),
            fraction: 0.0,
        }
    }

    pub fn seconds_left(&self) -> i32 {
        self.seconds_left
    }

    pub fn finished(&self) -> bool {
        self.seconds_left <= 0
    }

    /// Advance by a frame's delta. Returns the new value when a whole
    /// second boundary was crossed, at most one decrement per call.
    pub fn advance(&mut self, dt: f32) -> Option<i32> {
        if self.seconds_left <= 0 {
            return None;
        }
        self.fraction += dt;
        if self.fraction < 1.0 {
            return None;
        }
        self.fraction -= 1.0;
        self.seconds_left -= 1;
        Some(self.seconds_left)
    }
}

/// The in-round countdown clock.
#[derive(Resource, Debug)]
pub struct RoundClock {
    pub ticker: SecondTicker,
}

impl Default for RoundClock {
    fn default() -> Self {
        Self {
            ticker: SecondTicker::new(0),
        }
    }
}

/// One step of the pre-round sequence, in emission order:
/// `Tick(2)`, `Tick(1)`, `Go`, then `Begin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrepareStep {
    /// The 3-2-1 countdown crossed a second boundary.
    Tick(i32),
    /// Countdown finished; fighters unlock and "GO!" is shown.
    Go,
    /// The GO preview is over; gameplay starts.
    Begin,
}

/// Pre-round 3-2-1 plus GO-preview sequence, advanced once per tick.
#[derive(Debug, Clone)]
pub struct PrepareSequence {
    countdown: SecondTicker,
    go_timer: f32,
    finished: bool,
}

impl PrepareSequence {
    pub fn new(countdown_seconds: i32, go_preview: f32) -> Self {
        Self {
            countdown: SecondTicker::new(countdown_seconds),
            go_timer: go_preview,
            finished: false,
        }
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn advance(&mut self, dt: f32) -> Option<PrepareStep> {
        if self.finished {
            return None;
        }
        if !self.countdown.finished() {
            return match self.countdown.advance(dt) {
                Some(0) => Some(PrepareStep::Go),
                Some(seconds) => Some(PrepareStep::Tick(seconds)),
                None => None,
            };
        }
        self.go_timer -= dt;
        if self.go_timer <= 0.0 {
            self.finished = true;
            return Some(PrepareStep::Begin);
        }
        None
    }
}

/// Holds the running pre-round sequence while in `PreparingRound`.
#[derive(Resource, Debug, Default)]
pub struct PrepareState {
    pub sequence: Option<PrepareSequence>,
}

/// Result banner delay and the phase to enter once it elapses.
#[derive(Resource, Debug)]
pub struct ConcludeState {
    pub timer: f32,
    pub next_phase: MatchPhase,
}

impl Default for ConcludeState {
    fn default() -> Self {
        Self {
            timer: 0.0,
            next_phase: MatchPhase::PreparingRound,
        }
    }
}
