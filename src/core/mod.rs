//! Core domain: match orchestration plugin wiring and public exports.

mod events;
mod resources;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use events::{
    CountdownMessage, CountdownTick, MatchConcluded, RoundConcluded, RoundOutcome, RoundStarted,
};
pub use resources::{
    ConcludeState, MatchScore, MatchTuning, PLAYERS_COUNT, PlayerSlot, PrepareSequence,
    PrepareState, PrepareStep, RoundClock, SecondTicker,
};
pub use state::MatchPhase;

use bevy::prelude::*;

use crate::core::systems::{
    advance_from_splash, conclude_on_defeat, enter_concluding, enter_game_over, enter_preparing,
    handle_ready_confirms, handle_restart, tick_conclude, tick_prepare, tick_round_clock,
};
use crate::input::SampleInputs;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<MatchPhase>()
            .init_resource::<MatchTuning>()
            .init_resource::<MatchScore>()
            .init_resource::<RoundClock>()
            .init_resource::<PrepareState>()
            .init_resource::<ConcludeState>()
            .add_message::<RoundStarted>()
            .add_message::<CountdownTick>()
            .add_message::<CountdownMessage>()
            .add_message::<RoundConcluded>()
            .add_message::<MatchConcluded>()
            .add_systems(
                Update,
                advance_from_splash
                    .after(SampleInputs)
                    .run_if(in_state(MatchPhase::SplashScreen)),
            )
            .add_systems(
                Update,
                handle_ready_confirms
                    .after(SampleInputs)
                    .run_if(in_state(MatchPhase::CharacterSelect)),
            )
            .add_systems(OnEnter(MatchPhase::PreparingRound), enter_preparing)
            .add_systems(
                Update,
                tick_prepare.run_if(in_state(MatchPhase::PreparingRound)),
            )
            .add_systems(
                Update,
                (tick_round_clock, conclude_on_defeat)
                    .run_if(in_state(MatchPhase::PlayingRound)),
            )
            .add_systems(OnEnter(MatchPhase::ConcludingRound), enter_concluding)
            .add_systems(
                Update,
                tick_conclude.run_if(in_state(MatchPhase::ConcludingRound)),
            )
            .add_systems(OnEnter(MatchPhase::GameOver), enter_game_over)
            .add_systems(
                Update,
                handle_restart
                    .after(SampleInputs)
                    .run_if(in_state(MatchPhase::GameOver)),
            );
    }
}
