//! Combat domain: combat-related events.

use bevy::ecs::message::Message;

/// An attack connected; damage is applied by the combat systems, which
/// may still reject it (cooldown, lock, already defeated).
#[derive(Debug)]
pub struct HitLanded {
    pub attacker: usize,
    pub target: usize,
}

impl Message for HitLanded {}

/// A fighter's health changed, either from damage or a round reset.
#[derive(Debug)]
pub struct HealthChanged {
    pub player_index: usize,
    pub health: i32,
    /// Health as a 0..=1 fill ratio for presentation.
    pub ratio: f32,
}

impl Message for HealthChanged {}

/// A fighter's health reached zero.
#[derive(Debug)]
pub struct CharacterDefeated {
    pub player_index: usize,
}

impl Message for CharacterDefeated {}
