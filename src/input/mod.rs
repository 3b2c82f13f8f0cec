//! Input domain: per-tick sampled two-player input snapshot.
//!
//! Both players share one keyboard with a fixed mapping. The snapshot is
//! refreshed once per tick; every other domain reads from it so no system
//! touches raw device state directly.

use bevy::prelude::*;

use crate::core::PLAYERS_COUNT;

/// Label for the sampling system so edge consumers can order after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SampleInputs;

/// One player's input for the current tick. Button fields are
/// just-pressed edges; the axis is a continuous value in [-1, 1].
#[derive(Debug, Default, Clone, Copy)]
pub struct PlayerInput {
    pub move_axis: f32,
    pub confirm_pressed: bool,
    pub shoulder_left_pressed: bool,
    pub shoulder_right_pressed: bool,
    pub punch_pressed: bool,
    pub kick_pressed: bool,
    pub fireball_pressed: bool,
}

/// The per-tick snapshot for both players.
#[derive(Resource, Debug, Default)]
pub struct FighterInputs {
    players: [PlayerInput; PLAYERS_COUNT],
}

impl FighterInputs {
    /// Unknown indices read as neutral input.
    pub fn player(&self, index: usize) -> PlayerInput {
        self.players.get(index).copied().unwrap_or_default()
    }

    pub fn set(&mut self, index: usize, input: PlayerInput) {
        if let Some(slot) = self.players.get_mut(index) {
            *slot = input;
        }
    }
}

struct KeyMap {
    left: KeyCode,
    right: KeyCode,
    confirm: KeyCode,
    shoulder_left: KeyCode,
    shoulder_right: KeyCode,
    punch: KeyCode,
    kick: KeyCode,
    fireball: KeyCode,
}

const KEYMAPS: [KeyMap; PLAYERS_COUNT] = [
    // Player 1: WASD side.
    KeyMap {
        left: KeyCode::KeyA,
        right: KeyCode::KeyD,
        confirm: KeyCode::KeyW,
        shoulder_left: KeyCode::KeyQ,
        shoulder_right: KeyCode::KeyE,
        punch: KeyCode::KeyF,
        kick: KeyCode::KeyG,
        fireball: KeyCode::KeyH,
    },
    // Player 2: arrows side.
    KeyMap {
        left: KeyCode::ArrowLeft,
        right: KeyCode::ArrowRight,
        confirm: KeyCode::ArrowUp,
        shoulder_left: KeyCode::KeyO,
        shoulder_right: KeyCode::KeyP,
        punch: KeyCode::KeyK,
        kick: KeyCode::KeyL,
        fireball: KeyCode::Semicolon,
    },
];

pub(crate) fn read_player_inputs(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut inputs: ResMut<FighterInputs>,
) {
    for (index, map) in KEYMAPS.iter().enumerate() {
        let mut axis = 0.0;
        if keyboard.pressed(map.left) {
            axis -= 1.0;
        }
        if keyboard.pressed(map.right) {
            axis += 1.0;
        }
        inputs.set(
            index,
            PlayerInput {
                move_axis: axis,
                confirm_pressed: keyboard.just_pressed(map.confirm),
                shoulder_left_pressed: keyboard.just_pressed(map.shoulder_left),
                shoulder_right_pressed: keyboard.just_pressed(map.shoulder_right),
                punch_pressed: keyboard.just_pressed(map.punch),
                kick_pressed: keyboard.just_pressed(map.kick),
                fireball_pressed: keyboard.just_pressed(map.fireball),
            },
        );
    }
}

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FighterInputs>()
            .add_systems(Update, read_player_inputs.in_set(SampleInputs));
    }
}
