mod camera;
mod combat;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod input;
mod movement;
mod roster;
mod ui;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Ring Rivals".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        input::InputPlugin,
        core::CorePlugin,
        roster::RosterPlugin,
        movement::MovementPlugin,
        combat::CombatPlugin,
        camera::CameraPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
