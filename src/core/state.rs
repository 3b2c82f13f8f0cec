//! Core domain: match phase definitions.

use bevy::prelude::*;

/// Match-level state machine. Strictly forward-progressing except for the
/// `ConcludingRound` -> `PreparingRound` loop between rounds.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum MatchPhase {
    #[default]
    SplashScreen,
    CharacterSelect,
    PreparingRound,
    PlayingRound,
    ConcludingRound,
    GameOver,
}
