//! Combat domain: per-fighter combat state and attack components.

use bevy::prelude::*;

/// Marks a fighter entity owned by a player slot.
#[derive(Component, Debug)]
pub struct Fighter;

/// What a damage attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Locked, on cooldown, or already at zero health.
    Rejected,
    Damaged { health: i32 },
    /// This hit brought health to zero.
    Defeated,
}

/// Per-fighter health, hit cooldown, and lock record. The player index is
/// fixed at spawn; the record is reset at each round start and replaced
/// entirely when the fighter is respawned on reselect.
#[derive(Component, Debug, Clone)]
pub struct CombatState {
    player_index: usize,
    health: i32,
    max_health: i32,
    last_hit_at: f64,
    defeated: bool,
    locked: bool,
}

impl CombatState {
    /// Fresh state at full health. Fighters spawn locked; the orchestrator
    /// unlocks them when the round goes live.
    pub fn new(player_index: usize, max_health: i32) -> Self {
        Self {
            player_index,
            health: max_health,
            max_health,
            last_hit_at: f64::NEG_INFINITY,
            defeated: false,
            locked: true,
        }
    }

    pub fn player_index(&self) -> usize {
        self.player_index
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn ratio(&self) -> f32 {
        if self.max_health <= 0 {
            return 0.0;
        }
        self.health as f32 / self.max_health as f32
    }

    pub fn is_defeated(&self) -> bool {
        self.defeated
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// While locked, damage and player-driven inputs must not mutate the
    /// fighter; this closes the input-leak window around round transitions.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Attempt a hit at wall-clock time `now`. Rejected silently while
    /// locked, within `cooldown` of the previous hit, or once defeated.
    pub fn apply_damage(&mut self, now: f64, damage: i32, cooldown: f64) -> DamageOutcome {
        if self.locked || self.defeated || self.health == 0 {
            return DamageOutcome::Rejected;
        }
        if now - self.last_hit_at < cooldown {
            return DamageOutcome::Rejected;
        }

        self.last_hit_at = now;
        self.health = (self.health - damage).clamp(0, self.max_health);
        if self.health == 0 {
            self.defeated = true;
            DamageOutcome::Defeated
        } else {
            DamageOutcome::Damaged {
                health: self.health,
            }
        }
    }

    /// Full health for a new round; the hit cooldown does not carry over.
    pub fn reset(&mut self) {
        self.health = self.max_health;
        self.defeated = false;
        self.last_hit_at = f64::NEG_INFINITY;
    }
}

/// Per-fighter attack cooldown timers.
#[derive(Component, Debug, Default)]
pub struct AttackState {
    pub punch_timer: f32,
    pub kick_timer: f32,
    pub fireball_timer: f32,
}

/// A travelling fireball. Despawned on hit, on lifetime expiry, when the
/// round concludes, or when its owner is respawned.
#[derive(Component, Debug)]
pub struct Fireball {
    pub owner: usize,
    /// +1 travels right, -1 travels left.
    pub direction: f32,
    pub lifetime: f32,
}
