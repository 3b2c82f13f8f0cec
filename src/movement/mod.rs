//! Movement domain: axis-driven stage movement and opponent facing.

use bevy::prelude::*;

use crate::combat::{CombatState, Fighter};
use crate::core::{MatchPhase, PLAYERS_COUNT};
use crate::input::FighterInputs;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub speed: f32,
    /// Axis magnitude below this is ignored (stick drift guard).
    pub deadzone: f32,
    pub stage_half_width: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            speed: 220.0,
            deadzone: 0.5,
            stage_half_width: 520.0,
        }
    }
}

/// Move fighters along the stage axis. Locked fighters ignore input
/// entirely, so nothing leaks through the round-transition windows.
pub(crate) fn apply_movement(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    inputs: Res<FighterInputs>,
    mut fighters: Query<(&CombatState, &mut Transform), With<Fighter>>,
) {
    let dt = time.delta_secs();
    for (state, mut transform) in &mut fighters {
        if state.is_locked() {
            continue;
        }
        let axis = inputs.player(state.player_index()).move_axis;
        if axis.abs() <= tuning.deadzone {
            continue;
        }
        let x = transform.translation.x + axis.signum() * tuning.speed * dt;
        transform.translation.x = x.clamp(-tuning.stage_half_width, tuning.stage_half_width);
    }
}

/// Keep each fighter's sprite facing its opponent.
pub(crate) fn face_opponent(
    mut fighters: Query<(&CombatState, &Transform, &mut Sprite), With<Fighter>>,
) {
    let mut positions = [None::<f32>; PLAYERS_COUNT];
    for (state, transform, _) in fighters.iter() {
        if let Some(slot) = positions.get_mut(state.player_index()) {
            *slot = Some(transform.translation.x);
        }
    }

    for (state, transform, mut sprite) in &mut fighters {
        let opponent = match state.player_index() {
            0 => 1,
            1 => 0,
            _ => continue,
        };
        let Some(opponent_x) = positions.get(opponent).copied().flatten() else {
            continue;
        };
        sprite.flip_x = opponent_x < transform.translation.x;
    }
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .add_systems(
                Update,
                apply_movement.run_if(in_state(MatchPhase::PlayingRound)),
            )
            .add_systems(Update, face_opponent);
    }
}
