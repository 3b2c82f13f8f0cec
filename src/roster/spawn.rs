//! Roster domain: fighter spawning and reselect respawns.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::{AttackState, CombatState, Fighter, Fireball};
use crate::core::{MatchScore, MatchTuning, PLAYERS_COUNT};
use crate::input::FighterInputs;
use crate::roster::registry::RosterRegistry;
use crate::roster::selection::{SelectionChanged, SelectionState};

const FIGHTER_SIZE: Vec2 = Vec2::new(64.0, 128.0);
const FIGHTER_Y: f32 = 0.0;

/// Fixed spawn transforms per player slot.
#[derive(Resource, Debug, Clone)]
pub struct SpawnPoints {
    pub x: [f32; PLAYERS_COUNT],
}

impl Default for SpawnPoints {
    fn default() -> Self {
        Self { x: [-240.0, 240.0] }
    }
}

impl SpawnPoints {
    pub fn for_player(&self, player: usize) -> f32 {
        self.x.get(player).copied().unwrap_or(0.0)
    }
}

fn spawn_fighter(
    commands: &mut Commands,
    registry: &RosterRegistry,
    tuning: &MatchTuning,
    spawn_points: &SpawnPoints,
    player: usize,
    roster_index: usize,
) {
    let Some(def) = registry.get(roster_index) else {
        warn!("Roster slot {} does not exist, keeping previous fighter", roster_index);
        return;
    };
    commands.spawn((
        Fighter,
        CombatState::new(player, tuning.max_health),
        AttackState::default(),
        Sprite {
            color: def.color(),
            custom_size: Some(FIGHTER_SIZE),
            ..default()
        },
        Transform::from_xyz(spawn_points.for_player(player), FIGHTER_Y, 1.0),
    ));
    info!("Player {} picked {}", player + 1, def.name);
}

/// First entry into character select: put both default picks on stage.
/// A rematch re-enters with fighters already present and skips this.
pub(crate) fn spawn_initial_fighters(
    mut commands: Commands,
    registry: Res<RosterRegistry>,
    tuning: Res<MatchTuning>,
    spawn_points: Res<SpawnPoints>,
    selection: Res<SelectionState>,
    existing: Query<(), With<Fighter>>,
) {
    if !existing.is_empty() {
        return;
    }
    for player in 0..PLAYERS_COUNT {
        let Some(roster_index) = selection.pick(player) else {
            continue;
        };
        spawn_fighter(
            &mut commands,
            &registry,
            &tuning,
            &spawn_points,
            player,
            roster_index,
        );
    }
}

/// Shoulder presses toggle a not-yet-ready player's pick.
pub(crate) fn handle_selection_input(
    inputs: Res<FighterInputs>,
    score: Res<MatchScore>,
    mut selection: ResMut<SelectionState>,
    mut changed: MessageWriter<SelectionChanged>,
) {
    for player in 0..PLAYERS_COUNT {
        if score.is_ready(player) {
            continue;
        }
        let input = inputs.player(player);
        if input.shoulder_left_pressed || input.shoulder_right_pressed {
            if let Some(roster_index) = selection.toggle(player) {
                changed.write(SelectionChanged {
                    player_index: player,
                    roster_index,
                });
            }
        }
    }
}

/// Replace the fighter instance for a changed pick. The old entity and
/// any projectiles it still owns go away synchronously.
pub(crate) fn respawn_on_selection(
    mut commands: Commands,
    mut changed: MessageReader<SelectionChanged>,
    registry: Res<RosterRegistry>,
    tuning: Res<MatchTuning>,
    spawn_points: Res<SpawnPoints>,
    fighters: Query<(Entity, &CombatState), With<Fighter>>,
    fireballs: Query<(Entity, &Fireball)>,
) {
    for message in changed.read() {
        for (entity, state) in &fighters {
            if state.player_index() == message.player_index {
                commands.entity(entity).despawn();
            }
        }
        for (entity, fireball) in &fireballs {
            if fireball.owner == message.player_index {
                commands.entity(entity).despawn();
            }
        }
        spawn_fighter(
            &mut commands,
            &registry,
            &tuning,
            &spawn_points,
            message.player_index,
            message.roster_index,
        );
    }
}
