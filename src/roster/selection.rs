//! Roster domain: per-player selection state and the two-choice toggle.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::core::PLAYERS_COUNT;

/// Which roster slot each player currently has picked.
#[derive(Resource, Debug)]
pub struct SelectionState {
    picks: [usize; PLAYERS_COUNT],
}

impl Default for SelectionState {
    fn default() -> Self {
        // Player 1 opens on slot 0, player 2 on slot 3.
        Self { picks: [0, 3] }
    }
}

impl SelectionState {
    pub fn pick(&self, player: usize) -> Option<usize> {
        self.picks.get(player).copied()
    }

    /// Cycle a player between the two slots of their column: from the
    /// column base (`player * 2`) advance by one, from anywhere else
    /// return to the base. Unknown players are a no-op.
    pub fn toggle(&mut self, player: usize) -> Option<usize> {
        let pick = self.picks.get_mut(player)?;
        if *pick == player * 2 {
            *pick += 1;
        } else {
            *pick = player * 2;
        }
        Some(*pick)
    }
}

/// A player changed their pick; the fighter instance gets respawned.
#[derive(Debug)]
pub struct SelectionChanged {
    pub player_index: usize,
    pub roster_index: usize,
}

impl Message for SelectionChanged {}
