//! Core domain: orchestrator events consumed by the presentation layer.

use bevy::ecs::message::Message;

/// Fired when gameplay for a round actually begins (after "GO!").
#[derive(Debug)]
pub struct RoundStarted {
    pub round: u32,
}

impl Message for RoundStarted {}

/// A countdown crossed a second boundary: pre-round 3-2-1 or round clock.
#[derive(Debug)]
pub struct CountdownTick {
    pub seconds_left: i32,
}

impl Message for CountdownTick {}

/// A textual countdown display, currently just "GO!".
#[derive(Debug)]
pub struct CountdownMessage {
    pub text: &'static str,
}

impl Message for CountdownMessage {}

/// How a round ended. Equal health at conclusion is a draw; nobody is
/// credited and the match continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Winner(usize),
    Draw,
}

impl RoundOutcome {
    /// Strictly greater remaining health takes the round.
    pub fn from_healths(health_0: i32, health_1: i32) -> Self {
        if health_0 > health_1 {
            RoundOutcome::Winner(0)
        } else if health_1 > health_0 {
            RoundOutcome::Winner(1)
        } else {
            RoundOutcome::Draw
        }
    }

    pub fn winner(&self) -> Option<usize> {
        match self {
            RoundOutcome::Winner(index) => Some(*index),
            RoundOutcome::Draw => None,
        }
    }
}

/// Fired once when a round concludes.
#[derive(Debug)]
pub struct RoundConcluded {
    pub outcome: RoundOutcome,
}

impl Message for RoundConcluded {}

/// Fired exactly once when a player takes the match.
#[derive(Debug)]
pub struct MatchConcluded {
    pub winner: usize,
}

impl Message for MatchConcluded {}
