//! Combat domain: plugin wiring and public exports.

mod components;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{AttackState, CombatState, DamageOutcome, Fighter, Fireball};
pub use events::{CharacterDefeated, HealthChanged, HitLanded};
pub use resources::StrikeTuning;

use bevy::prelude::*;

use crate::combat::systems::{
    apply_damage, despawn_fireballs, move_fireballs, process_attacks, reset_combat_states,
    tick_attack_timers,
};
use crate::core::MatchPhase;
use crate::input::SampleInputs;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StrikeTuning>()
            .add_message::<HitLanded>()
            .add_message::<HealthChanged>()
            .add_message::<CharacterDefeated>()
            .add_systems(OnEnter(MatchPhase::PreparingRound), reset_combat_states)
            .add_systems(
                Update,
                (tick_attack_timers, process_attacks, move_fireballs, apply_damage)
                    .chain()
                    .after(SampleInputs)
                    .run_if(in_state(MatchPhase::PlayingRound)),
            )
            .add_systems(OnExit(MatchPhase::PlayingRound), despawn_fireballs);
    }
}
