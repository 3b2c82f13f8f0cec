//! Combat domain: unit tests for the combat state contract.

use super::{CombatState, DamageOutcome};

const MAX_HEALTH: i32 = 100;
const DAMAGE: i32 = 5;
const COOLDOWN: f64 = 0.4;

fn live_state(player: usize) -> CombatState {
    let mut state = CombatState::new(player, MAX_HEALTH);
    state.set_locked(false);
    state
}

// -----------------------------------------------------------------------------
// Damage cooldown
// -----------------------------------------------------------------------------

#[test]
fn test_first_hit_applies_damage() {
    let mut state = live_state(1);
    let outcome = state.apply_damage(10.0, DAMAGE, COOLDOWN);
    assert_eq!(outcome, DamageOutcome::Damaged { health: 95 });
    assert_eq!(state.health(), 95);
}

#[test]
fn test_hits_within_cooldown_are_rejected() {
    let mut state = live_state(1);
    assert_eq!(
        state.apply_damage(10.0, DAMAGE, COOLDOWN),
        DamageOutcome::Damaged { health: 95 }
    );
    // Inside the 0.4s window: no effect.
    assert_eq!(
        state.apply_damage(10.2, DAMAGE, COOLDOWN),
        DamageOutcome::Rejected
    );
    assert_eq!(
        state.apply_damage(10.39, DAMAGE, COOLDOWN),
        DamageOutcome::Rejected
    );
    assert_eq!(state.health(), 95);

    // Past the window the next hit lands.
    assert_eq!(
        state.apply_damage(10.4, DAMAGE, COOLDOWN),
        DamageOutcome::Damaged { health: 90 }
    );
}

#[test]
fn test_rejected_hit_does_not_restart_cooldown() {
    let mut state = live_state(0);
    state.apply_damage(10.0, DAMAGE, COOLDOWN);
    state.apply_damage(10.3, DAMAGE, COOLDOWN);
    // 10.3 was rejected, so 10.45 is measured against 10.0 and lands.
    assert_eq!(
        state.apply_damage(10.45, DAMAGE, COOLDOWN),
        DamageOutcome::Damaged { health: 90 }
    );
}

// -----------------------------------------------------------------------------
// Health clamp and defeat
// -----------------------------------------------------------------------------

#[test]
fn test_health_never_leaves_range() {
    let mut state = live_state(1);
    let mut now = 0.0;
    for _ in 0..40 {
        state.apply_damage(now, DAMAGE, COOLDOWN);
        assert!((0..=MAX_HEALTH).contains(&state.health()));
        now += 0.5;
    }
    assert_eq!(state.health(), 0);
}

#[test]
fn test_defeat_on_reaching_zero() {
    let mut state = live_state(1);
    let mut now = 0.0;
    // 100 / 5 = 20 hits to zero.
    for hit in 1..=19 {
        let outcome = state.apply_damage(now, DAMAGE, COOLDOWN);
        assert_eq!(
            outcome,
            DamageOutcome::Damaged {
                health: MAX_HEALTH - hit * DAMAGE
            }
        );
        now += 0.5;
    }
    assert_eq!(state.apply_damage(now, DAMAGE, COOLDOWN), DamageOutcome::Defeated);
    assert!(state.is_defeated());

    // Further damage on a defeated fighter is a no-op, not an error.
    now += 0.5;
    assert_eq!(
        state.apply_damage(now, DAMAGE, COOLDOWN),
        DamageOutcome::Rejected
    );
    assert_eq!(state.health(), 0);
}

#[test]
fn test_overkill_damage_clamps_to_zero() {
    let mut state = live_state(0);
    assert_eq!(state.apply_damage(0.0, 250, COOLDOWN), DamageOutcome::Defeated);
    assert_eq!(state.health(), 0);
}

// -----------------------------------------------------------------------------
// Lock suppression
// -----------------------------------------------------------------------------

#[test]
fn test_locked_fighter_takes_no_damage() {
    let mut state = CombatState::new(1, MAX_HEALTH);
    assert!(state.is_locked());
    let mut now = 0.0;
    for _ in 0..5 {
        assert_eq!(
            state.apply_damage(now, DAMAGE, COOLDOWN),
            DamageOutcome::Rejected
        );
        now += 1.0;
    }
    assert_eq!(state.health(), MAX_HEALTH);

    state.set_locked(false);
    assert_eq!(
        state.apply_damage(now, DAMAGE, COOLDOWN),
        DamageOutcome::Damaged { health: 95 }
    );
}

// -----------------------------------------------------------------------------
// Reset
// -----------------------------------------------------------------------------

#[test]
fn test_reset_restores_full_health_and_clears_defeat() {
    let mut state = live_state(0);
    state.apply_damage(0.0, MAX_HEALTH, COOLDOWN);
    assert!(state.is_defeated());

    state.reset();
    assert_eq!(state.health(), MAX_HEALTH);
    assert!(!state.is_defeated());

    // The previous round's hit stamp does not block the new round.
    assert_eq!(
        state.apply_damage(0.1, DAMAGE, COOLDOWN),
        DamageOutcome::Damaged { health: 95 }
    );
}

#[test]
fn test_ratio_tracks_health() {
    let mut state = live_state(0);
    assert_eq!(state.ratio(), 1.0);
    state.apply_damage(0.0, 50, COOLDOWN);
    assert_eq!(state.ratio(), 0.5);
    state.apply_damage(1.0, 50, COOLDOWN);
    assert_eq!(state.ratio(), 0.0);
}

#[test]
fn test_player_index_is_fixed() {
    let state = CombatState::new(1, MAX_HEALTH);
    assert_eq!(state.player_index(), 1);
    assert_eq!(state.max_health(), MAX_HEALTH);
}
