//! Core domain: match orchestration systems.
//!
//! All countdowns are frame-time accumulators evaluated once per tick;
//! nothing here blocks, and every invalid operation degrades to a no-op
//! so the tick loop never aborts mid-match.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::{CharacterDefeated, CombatState};
use crate::core::events::{
    CountdownMessage, CountdownTick, MatchConcluded, RoundConcluded, RoundOutcome, RoundStarted,
};
use crate::core::resources::{
    ConcludeState, MatchScore, MatchTuning, PLAYERS_COUNT, PrepareSequence, PrepareState,
    PrepareStep, RoundClock, SecondTicker,
};
use crate::core::state::MatchPhase;
use crate::input::FighterInputs;

/// Player 1's confirm press leaves the splash screen.
pub(crate) fn advance_from_splash(
    inputs: Res<FighterInputs>,
    mut next_phase: ResMut<NextState<MatchPhase>>,
) {
    if inputs.player(0).confirm_pressed {
        info!("Splash dismissed, entering character select");
        next_phase.set(MatchPhase::CharacterSelect);
    }
}

/// Confirm presses mark players ready; the all-ready condition is
/// re-checked on every confirm and starts the match when it holds.
pub(crate) fn handle_ready_confirms(
    inputs: Res<FighterInputs>,
    mut score: ResMut<MatchScore>,
    mut next_phase: ResMut<NextState<MatchPhase>>,
) {
    for player in 0..PLAYERS_COUNT {
        if inputs.player(player).confirm_pressed && score.confirm_ready(player) {
            info!("Player {} is ready", player + 1);
        }
    }

    if score.all_ready() {
        info!("All players ready, preparing round");
        next_phase.set(MatchPhase::PreparingRound);
    }
}

/// Start the pre-round sequence and bump the round counter.
pub(crate) fn enter_preparing(
    tuning: Res<MatchTuning>,
    mut score: ResMut<MatchScore>,
    mut prepare: ResMut<PrepareState>,
    mut ticks: MessageWriter<CountdownTick>,
) {
    let round = score.begin_round();
    prepare.sequence = Some(PrepareSequence::new(tuning.prepare_countdown, tuning.go_preview));
    // Show the starting value immediately; the sequence emits the rest.
    ticks.write(CountdownTick {
        seconds_left: tuning.prepare_countdown,
    });
    info!("Preparing round {}", round);
}

/// Drive the 3-2-1 countdown, the "GO!" preview, the unlock, and the
/// timed hand-off into `PlayingRound`.
pub(crate) fn tick_prepare(
    time: Res<Time>,
    tuning: Res<MatchTuning>,
    score: Res<MatchScore>,
    mut prepare: ResMut<PrepareState>,
    mut clock: ResMut<RoundClock>,
    mut fighters: Query<&mut CombatState>,
    mut ticks: MessageWriter<CountdownTick>,
    mut messages: MessageWriter<CountdownMessage>,
    mut started: MessageWriter<RoundStarted>,
    mut next_phase: ResMut<NextState<MatchPhase>>,
) {
    let Some(sequence) = prepare.sequence.as_mut() else {
        return;
    };

    match sequence.advance(time.delta_secs()) {
        Some(PrepareStep::Tick(seconds)) => {
            ticks.write(CountdownTick {
                seconds_left: seconds,
            });
        }
        Some(PrepareStep::Go) => {
            messages.write(CountdownMessage { text: "GO!" });
            for mut state in &mut fighters {
                state.set_locked(false);
            }
        }
        Some(PrepareStep::Begin) => {
            let seconds_left = tuning.round_time - 1;
            clock.ticker = SecondTicker::new(seconds_left);
            ticks.write(CountdownTick { seconds_left });
            started.write(RoundStarted {
                round: score.current_round,
            });
            prepare.sequence = None;
            next_phase.set(MatchPhase::PlayingRound);
        }
        None => {}
    }
}

/// Decrement the round clock once per elapsed whole second; at zero the
/// round concludes by timeout.
pub(crate) fn tick_round_clock(
    time: Res<Time>,
    mut clock: ResMut<RoundClock>,
    mut ticks: MessageWriter<CountdownTick>,
    mut next_phase: ResMut<NextState<MatchPhase>>,
) {
    if let Some(seconds_left) = clock.ticker.advance(time.delta_secs()) {
        ticks.write(CountdownTick { seconds_left });
        if seconds_left <= 0 {
            info!("Round clock expired");
            next_phase.set(MatchPhase::ConcludingRound);
        }
    }
}

/// A defeat pre-empts the round clock. Only consumed while playing, so a
/// defeat can never conclude the same round twice.
pub(crate) fn conclude_on_defeat(
    mut defeats: MessageReader<CharacterDefeated>,
    mut next_phase: ResMut<NextState<MatchPhase>>,
) {
    for defeat in defeats.read() {
        info!("Player {} defeated, concluding round", defeat.player_index + 1);
        next_phase.set(MatchPhase::ConcludingRound);
    }
}

/// Lock the fighters, decide the round, credit the win, and queue the
/// next phase behind the result banner. Runs exactly once per round.
pub(crate) fn enter_concluding(
    tuning: Res<MatchTuning>,
    mut score: ResMut<MatchScore>,
    mut conclude: ResMut<ConcludeState>,
    mut fighters: Query<&mut CombatState>,
    mut concluded: MessageWriter<RoundConcluded>,
) {
    let mut healths = [0i32; PLAYERS_COUNT];
    for mut state in &mut fighters {
        state.set_locked(true);
        if let Some(slot) = healths.get_mut(state.player_index()) {
            *slot = state.health();
        }
    }

    let outcome = RoundOutcome::from_healths(healths[0], healths[1]);
    match outcome {
        RoundOutcome::Winner(winner) => {
            let wins = score.record_win(winner).unwrap_or(0);
            info!("Player {} takes round {} ({} wins)", winner + 1, score.current_round, wins);
        }
        RoundOutcome::Draw => {
            info!("Round {} is a draw, nobody is credited", score.current_round);
        }
    }
    concluded.write(RoundConcluded { outcome });

    conclude.timer = tuning.conclude_banner;
    conclude.next_phase = if score.match_winner(tuning.wins_to_take_match).is_some() {
        MatchPhase::GameOver
    } else {
        MatchPhase::PreparingRound
    };
}

/// Hold the result banner, then move to the queued phase.
pub(crate) fn tick_conclude(
    time: Res<Time>,
    mut conclude: ResMut<ConcludeState>,
    mut next_phase: ResMut<NextState<MatchPhase>>,
) {
    conclude.timer -= time.delta_secs();
    if conclude.timer <= 0.0 {
        next_phase.set(conclude.next_phase.clone());
    }
}

/// Announce the match winner. `GameOver` is entered once per match, so
/// `MatchConcluded` fires exactly once.
pub(crate) fn enter_game_over(
    tuning: Res<MatchTuning>,
    score: Res<MatchScore>,
    mut concluded: MessageWriter<MatchConcluded>,
) {
    let Some(winner) = score.match_winner(tuning.wins_to_take_match) else {
        warn!("Entered game over without a match winner");
        return;
    };
    info!("Player {} wins the match", winner + 1);
    concluded.write(MatchConcluded { winner });
}

/// Any player's confirm press restarts from character select.
pub(crate) fn handle_restart(
    inputs: Res<FighterInputs>,
    mut score: ResMut<MatchScore>,
    mut next_phase: ResMut<NextState<MatchPhase>>,
) {
    let requested = (0..PLAYERS_COUNT).any(|player| inputs.player(player).confirm_pressed);
    if requested {
        score.reset();
        info!("Rematch requested, returning to character select");
        next_phase.set(MatchPhase::CharacterSelect);
    }
}
