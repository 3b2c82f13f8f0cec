//! Debug tools for fast iteration (dev-tools feature).
//!
//! Features:
//! - F1 / backtick info overlay (phase, round, clock, healths, picks)
//! - Ctrl+K / Ctrl+J land a free hit on player 2 / player 1
//! - Ctrl+1..4 warp between match phases

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::{CombatState, HitLanded};
use crate::core::{MatchPhase, MatchScore, PLAYERS_COUNT, RoundClock};
use crate::roster::SelectionState;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether to show the debug info overlay
    pub show_info: bool,
}

/// Marker for the debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (toggle_info_overlay, handle_debug_hotkeys))
            .add_systems(
                Update,
                update_info_overlay.run_if(|state: Res<DebugState>| state.show_info),
            );
    }
}

/// Toggle the info overlay with F1 or backtick
fn toggle_info_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing: Query<Entity, With<DebugInfoOverlay>>,
) {
    let toggle = keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote);
    if !toggle {
        return;
    }

    debug_state.show_info = !debug_state.show_info;
    info!(
        "[DEBUG] info overlay {}",
        if debug_state.show_info { "ON" } else { "OFF" }
    );

    if debug_state.show_info {
        spawn_info_overlay(&mut commands);
    } else {
        for entity in &existing {
            commands.entity(entity).despawn();
        }
    }
}

/// Ctrl hotkeys: free hits and phase warps
fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut hits: MessageWriter<HitLanded>,
    mut next_phase: ResMut<NextState<MatchPhase>>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    // Free hits; the combat systems still apply lock and cooldown rules.
    if keyboard.just_pressed(KeyCode::KeyK) {
        hits.write(HitLanded {
            attacker: 0,
            target: 1,
        });
        info!("[DEBUG] free hit on player 2");
    }
    if keyboard.just_pressed(KeyCode::KeyJ) {
        hits.write(HitLanded {
            attacker: 1,
            target: 0,
        });
        info!("[DEBUG] free hit on player 1");
    }

    if keyboard.just_pressed(KeyCode::Digit1) {
        next_phase.set(MatchPhase::CharacterSelect);
        info!("[DEBUG] warping to CharacterSelect");
    }
    if keyboard.just_pressed(KeyCode::Digit2) {
        next_phase.set(MatchPhase::PreparingRound);
        info!("[DEBUG] warping to PreparingRound");
    }
    if keyboard.just_pressed(KeyCode::Digit3) {
        next_phase.set(MatchPhase::ConcludingRound);
        info!("[DEBUG] warping to ConcludingRound");
    }
    if keyboard.just_pressed(KeyCode::Digit4) {
        next_phase.set(MatchPhase::GameOver);
        info!("[DEBUG] warping to GameOver");
    }
}

fn update_info_overlay(
    phase: Res<State<MatchPhase>>,
    score: Res<MatchScore>,
    clock: Res<RoundClock>,
    selection: Res<SelectionState>,
    fighters: Query<&CombatState>,
    mut overlay: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    let Ok(mut text) = overlay.single_mut() else {
        return;
    };

    let mut healths = [0_i32; PLAYERS_COUNT];
    for state in fighters.iter() {
        if let Some(slot) = healths.get_mut(state.player_index()) {
            *slot = state.health();
        }
    }

    **text = format!(
        "Phase: {:?}\nRound: {}  Wins: {} - {}\nClock: {}\nHP: {} / {}\nPicks: {:?} / {:?}",
        phase.get(),
        score.current_round,
        score.wins(0),
        score.wins(1),
        clock.ticker.seconds_left(),
        healths[0],
        healths[1],
        selection.pick(0),
        selection.pick(1),
    );
}

fn spawn_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
