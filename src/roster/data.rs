//! Roster domain: fighter definition data types (RON-backed).

use bevy::prelude::*;
use serde::Deserialize;

/// One roster entry. Slots 0-1 are player 1's column, 2-3 player 2's.
#[derive(Debug, Clone, Deserialize)]
pub struct FighterDef {
    pub id: String,
    pub name: String,
    pub color: [f32; 3],
    pub tagline: String,
}

impl FighterDef {
    pub fn color(&self) -> Color {
        Color::srgb(self.color[0], self.color[1], self.color[2])
    }
}

/// Top-level wrapper for `assets/fighters.ron`.
#[derive(Debug, Deserialize)]
pub struct RosterFile {
    pub fighters: Vec<FighterDef>,
}
