//! Combat domain: strike and projectile tuning.

use bevy::prelude::*;

/// Reach, cooldown, and projectile constants. Distances are in world
/// pixels along the stage axis.
#[derive(Resource, Debug, Clone)]
pub struct StrikeTuning {
    pub punch_reach: f32,
    pub punch_cooldown: f32,
    pub kick_reach: f32,
    pub kick_cooldown: f32,
    pub fireball_speed: f32,
    pub fireball_cooldown: f32,
    pub fireball_lifetime: f32,
    pub fireball_hit_radius: f32,
    pub fireball_spawn_offset: f32,
}

impl Default for StrikeTuning {
    fn default() -> Self {
        Self {
            punch_reach: 90.0,
            punch_cooldown: 0.35,
            kick_reach: 110.0,
            kick_cooldown: 0.55,
            fireball_speed: 420.0,
            fireball_cooldown: 0.9,
            fireball_lifetime: 10.0,
            fireball_hit_radius: 50.0,
            fireball_spawn_offset: 48.0,
        }
    }
}
