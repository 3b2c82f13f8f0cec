//! Roster domain: fighter definitions, selection, and spawning.

mod data;
mod registry;
mod selection;
mod spawn;

#[cfg(test)]
mod tests;

pub use data::{FighterDef, RosterFile};
pub use registry::RosterRegistry;
pub use selection::{SelectionChanged, SelectionState};
pub use spawn::SpawnPoints;

use bevy::prelude::*;

use crate::core::MatchPhase;
use crate::input::SampleInputs;
use crate::roster::registry::setup_roster;
use crate::roster::spawn::{handle_selection_input, respawn_on_selection, spawn_initial_fighters};

pub struct RosterPlugin;

impl Plugin for RosterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectionState>()
            .init_resource::<SpawnPoints>()
            .add_message::<SelectionChanged>()
            .add_systems(Startup, setup_roster)
            .add_systems(OnEnter(MatchPhase::CharacterSelect), spawn_initial_fighters)
            .add_systems(
                Update,
                (handle_selection_input, respawn_on_selection)
                    .chain()
                    .after(SampleInputs)
                    .run_if(in_state(MatchPhase::CharacterSelect)),
            );
    }
}
