//! Roster domain: roster registry and RON loading with fallback.

use bevy::prelude::*;

use crate::roster::data::{FighterDef, RosterFile};

const ROSTER_RON: &str = include_str!("../../assets/fighters.ron");

/// The loaded fighter roster, indexed by roster slot.
#[derive(Resource, Debug, Default)]
pub struct RosterRegistry {
    pub fighters: Vec<FighterDef>,
}

impl RosterRegistry {
    pub fn get(&self, index: usize) -> Option<&FighterDef> {
        self.fighters.get(index)
    }

    pub fn len(&self) -> usize {
        self.fighters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fighters.is_empty()
    }
}

/// Error type for roster parse failures.
#[derive(Debug)]
pub struct RosterLoadError {
    pub message: String,
}

impl std::fmt::Display for RosterLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load fighter roster: {}", self.message)
    }
}

pub(crate) fn parse_roster(contents: &str) -> Result<Vec<FighterDef>, RosterLoadError> {
    let file: RosterFile = ron::from_str(contents).map_err(|e| RosterLoadError {
        message: format!("Parse error: {}", e),
    })?;
    if file.fighters.is_empty() {
        return Err(RosterLoadError {
            message: "roster is empty".to_string(),
        });
    }
    Ok(file.fighters)
}

/// A bad data file must not take the game down; fall back to built-ins.
pub(crate) fn builtin_roster() -> Vec<FighterDef> {
    let defaults = [
        ("fighter_brick", "Brick", [0.85, 0.25, 0.25], "Brawler"),
        ("fighter_gale", "Gale", [0.25, 0.55, 0.85], "Striker"),
        ("fighter_saffron", "Saffron", [0.9, 0.75, 0.25], "Duelist"),
        ("fighter_moss", "Moss", [0.3, 0.7, 0.35], "Grappler"),
    ];
    defaults
        .into_iter()
        .map(|(id, name, color, tagline)| FighterDef {
            id: id.to_string(),
            name: name.to_string(),
            color,
            tagline: tagline.to_string(),
        })
        .collect()
}

pub(crate) fn setup_roster(mut commands: Commands) {
    let fighters = match parse_roster(ROSTER_RON) {
        Ok(fighters) => fighters,
        Err(error) => {
            warn!("{}; using built-in roster", error);
            builtin_roster()
        }
    };
    info!("Loaded {} fighters", fighters.len());
    commands.insert_resource(RosterRegistry { fighters });
}
