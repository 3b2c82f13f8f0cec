//! UI domain: screens and HUD, all driven by orchestrator state and events.

mod game_over;
mod hud;
mod select;
mod splash;

pub use game_over::GameOverUI;
pub use hud::{BannerText, ClockText, HealthBarFill, HudRoot, RoundText, WinsText};
pub use select::{PickNameText, PickTaglineText, ReadyLabel, SelectUI};
pub use splash::SplashUI;

use bevy::prelude::*;

use crate::core::MatchPhase;
use crate::ui::game_over::{cleanup_game_over_screen, spawn_game_over_screen};
use crate::ui::hud::{
    clear_round_banner, cleanup_match_hud, show_round_banner, spawn_match_hud, update_clock_text,
    update_health_bars, update_round_text, update_wins_text,
};
use crate::ui::select::{cleanup_select_screen, spawn_select_screen, update_pick_labels,
    update_ready_labels};
use crate::ui::splash::{cleanup_splash_screen, spawn_splash_screen};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(MatchPhase::SplashScreen), spawn_splash_screen)
            .add_systems(OnExit(MatchPhase::SplashScreen), cleanup_splash_screen)
            .add_systems(OnEnter(MatchPhase::CharacterSelect), spawn_select_screen)
            .add_systems(
                Update,
                (update_pick_labels, update_ready_labels)
                    .run_if(in_state(MatchPhase::CharacterSelect)),
            )
            .add_systems(OnExit(MatchPhase::CharacterSelect), cleanup_select_screen)
            .add_systems(
                OnEnter(MatchPhase::PreparingRound),
                (spawn_match_hud, clear_round_banner).chain(),
            )
            .add_systems(
                Update,
                (
                    update_health_bars,
                    update_clock_text,
                    update_round_text,
                    update_wins_text,
                    show_round_banner,
                ),
            )
            .add_systems(OnEnter(MatchPhase::GameOver), spawn_game_over_screen)
            .add_systems(OnExit(MatchPhase::GameOver), cleanup_game_over_screen)
            .add_systems(OnExit(MatchPhase::GameOver), cleanup_match_hud);
    }
}
