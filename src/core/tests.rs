//! Core domain: tests for round timing, scoring, and the match loop.

use super::events::RoundOutcome;
use super::resources::{MatchScore, MatchTuning, PrepareSequence, PrepareStep, SecondTicker};
use crate::combat::{CombatState, DamageOutcome};

// -----------------------------------------------------------------------------
// SecondTicker
// -----------------------------------------------------------------------------

#[test]
fn test_ticker_holds_until_a_whole_second_elapsed() {
    let mut ticker = SecondTicker::new(3);
    assert_eq!(ticker.advance(0.4), None);
    assert_eq!(ticker.advance(0.4), None);
    assert_eq!(ticker.advance(0.4), Some(2));
    assert_eq!(ticker.seconds_left(), 2);
}

#[test]
fn test_ticker_carries_leftover_fraction() {
    // 0.8 + 0.8 = 1.6: one tick, 0.6 carried into the next second.
    let mut ticker = SecondTicker::new(5);
    assert_eq!(ticker.advance(0.8), None);
    assert_eq!(ticker.advance(0.8), Some(4));
    assert_eq!(ticker.advance(0.5), Some(3));
}

#[test]
fn test_ticker_decrements_at_most_once_per_call() {
    // A giant frame spike still only costs one second.
    let mut ticker = SecondTicker::new(10);
    assert_eq!(ticker.advance(4.0), Some(9));
    assert_eq!(ticker.seconds_left(), 9);
}

#[test]
fn test_ticker_stops_at_zero() {
    let mut ticker = SecondTicker::new(1);
    assert_eq!(ticker.advance(1.0), Some(0));
    assert!(ticker.finished());
    assert_eq!(ticker.advance(1.0), None);
    assert_eq!(ticker.seconds_left(), 0);
}

#[test]
fn test_ticker_with_zero_seconds_is_already_finished() {
    let mut ticker = SecondTicker::new(0);
    assert!(ticker.finished());
    assert_eq!(ticker.advance(1.0), None);
}

// -----------------------------------------------------------------------------
// PrepareSequence
// -----------------------------------------------------------------------------

#[test]
fn test_prepare_sequence_emits_ticks_then_go_then_begin() {
    let mut sequence = PrepareSequence::new(3, 1.0);
    assert_eq!(sequence.advance(1.0), Some(PrepareStep::Tick(2)));
    assert_eq!(sequence.advance(1.0), Some(PrepareStep::Tick(1)));
    assert_eq!(sequence.advance(1.0), Some(PrepareStep::Go));
    // "GO!" stays up for the preview window before gameplay starts.
    assert_eq!(sequence.advance(0.5), None);
    assert_eq!(sequence.advance(0.6), Some(PrepareStep::Begin));
    assert!(sequence.finished());
}

#[test]
fn test_prepare_sequence_is_silent_between_second_boundaries() {
    let mut sequence = PrepareSequence::new(3, 1.0);
    assert_eq!(sequence.advance(0.3), None);
    assert_eq!(sequence.advance(0.3), None);
    assert_eq!(sequence.advance(0.5), Some(PrepareStep::Tick(2)));
}

#[test]
fn test_prepare_sequence_emits_nothing_after_begin() {
    let mut sequence = PrepareSequence::new(1, 0.5);
    assert_eq!(sequence.advance(1.0), Some(PrepareStep::Go));
    assert_eq!(sequence.advance(0.5), Some(PrepareStep::Begin));
    assert_eq!(sequence.advance(10.0), None);
    assert_eq!(sequence.advance(10.0), None);
}

// -----------------------------------------------------------------------------
// RoundOutcome
// -----------------------------------------------------------------------------

#[test]
fn test_strictly_greater_health_takes_the_round() {
    assert_eq!(RoundOutcome::from_healths(50, 49), RoundOutcome::Winner(0));
    assert_eq!(RoundOutcome::from_healths(1, 100), RoundOutcome::Winner(1));
    assert_eq!(RoundOutcome::from_healths(0, 5), RoundOutcome::Winner(1));
}

#[test]
fn test_equal_health_is_a_draw() {
    assert_eq!(RoundOutcome::from_healths(50, 50), RoundOutcome::Draw);
    assert_eq!(RoundOutcome::from_healths(0, 0), RoundOutcome::Draw);
    assert_eq!(RoundOutcome::from_healths(100, 100).winner(), None);
}

// -----------------------------------------------------------------------------
// MatchScore
// -----------------------------------------------------------------------------

#[test]
fn test_ready_flags_gate_the_match_start() {
    let mut score = MatchScore::default();
    assert!(!score.all_ready());

    assert!(score.confirm_ready(0));
    assert!(!score.all_ready());

    // Repeat confirms are no-ops.
    assert!(!score.confirm_ready(0));
    assert!(!score.confirm_ready(99));

    assert!(score.confirm_ready(1));
    assert!(score.all_ready());
}

#[test]
fn test_round_counter_advances_per_round() {
    let mut score = MatchScore::default();
    assert_eq!(score.begin_round(), 1);
    assert_eq!(score.begin_round(), 2);
    assert_eq!(score.current_round, 2);
}

#[test]
fn test_wins_accumulate_and_decide_the_match() {
    let tuning = MatchTuning::default();
    let mut score = MatchScore::default();

    assert_eq!(score.record_win(1), Some(1));
    assert_eq!(score.match_winner(tuning.wins_to_take_match), None);

    assert_eq!(score.record_win(0), Some(1));
    assert_eq!(score.match_winner(tuning.wins_to_take_match), None);

    assert_eq!(score.record_win(1), Some(2));
    assert_eq!(score.match_winner(tuning.wins_to_take_match), Some(1));
}

#[test]
fn test_record_win_unknown_player_is_noop() {
    let mut score = MatchScore::default();
    assert_eq!(score.record_win(7), None);
    assert_eq!(score.wins(0), 0);
    assert_eq!(score.wins(1), 0);
}

#[test]
fn test_reset_clears_wins_ready_and_round() {
    let mut score = MatchScore::default();
    score.confirm_ready(0);
    score.confirm_ready(1);
    score.record_win(0);
    score.begin_round();

    score.reset();
    assert!(!score.all_ready());
    assert_eq!(score.wins(0), 0);
    assert_eq!(score.current_round, 0);
}

// -----------------------------------------------------------------------------
// Match loop scenarios
// -----------------------------------------------------------------------------

/// Land `count` hits on `state`, spaced past the cooldown, starting at `start`.
fn land_hits(state: &mut CombatState, tuning: &MatchTuning, start: f64, count: usize) {
    for hit in 0..count {
        let now = start + hit as f64 * (tuning.damage_cooldown + 0.1);
        state.apply_damage(now, tuning.damage_per_hit, tuning.damage_cooldown);
    }
}

#[test]
fn test_four_hits_leave_eighty_health() {
    let tuning = MatchTuning::default();
    let mut state = CombatState::new(1, tuning.max_health);
    state.set_locked(false);

    land_hits(&mut state, &tuning, 10.0, 4);
    assert_eq!(state.health(), 80);
    assert!(!state.is_defeated());
}

#[test]
fn test_twenty_hits_end_the_round_with_a_winner() {
    let tuning = MatchTuning::default();
    let mut score = MatchScore::default();
    score.begin_round();

    let mut loser = CombatState::new(1, tuning.max_health);
    loser.set_locked(false);
    land_hits(&mut loser, &tuning, 0.0, 20);
    assert!(loser.is_defeated());

    let outcome = RoundOutcome::from_healths(tuning.max_health, loser.health());
    assert_eq!(outcome, RoundOutcome::Winner(0));

    let winner = outcome.winner().and_then(|w| score.record_win(w));
    assert_eq!(winner, Some(1));
    assert_eq!(score.match_winner(tuning.wins_to_take_match), None);
}

#[test]
fn test_timeout_at_equal_health_credits_nobody() {
    let tuning = MatchTuning::default();
    let mut score = MatchScore::default();
    score.begin_round();

    let mut a = CombatState::new(0, tuning.max_health);
    let mut b = CombatState::new(1, tuning.max_health);
    a.set_locked(false);
    b.set_locked(false);
    land_hits(&mut a, &tuning, 0.0, 10);
    land_hits(&mut b, &tuning, 0.0, 10);

    let outcome = RoundOutcome::from_healths(a.health(), b.health());
    assert_eq!(outcome, RoundOutcome::Draw);
    assert_eq!(score.wins(0), 0);
    assert_eq!(score.wins(1), 0);
}

#[test]
fn test_two_round_wins_take_the_match() {
    let tuning = MatchTuning::default();
    let mut score = MatchScore::default();

    for round in 1..=2 {
        assert_eq!(score.begin_round(), round);

        let mut loser = CombatState::new(1, tuning.max_health);
        loser.reset();
        loser.set_locked(false);
        land_hits(&mut loser, &tuning, round as f64 * 1000.0, 20);

        let outcome = RoundOutcome::from_healths(tuning.max_health, loser.health());
        if let Some(winner) = outcome.winner() {
            score.record_win(winner);
        }
    }

    assert_eq!(score.match_winner(tuning.wins_to_take_match), Some(0));
}
