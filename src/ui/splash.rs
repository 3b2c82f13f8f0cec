//! UI domain: splash screen.

use bevy::prelude::*;

/// Marker for the splash screen root.
#[derive(Component, Debug)]
pub struct SplashUI;

pub(crate) fn spawn_splash_screen(mut commands: Commands) {
    let bg_color = Color::srgba(0.04, 0.04, 0.08, 1.0);
    let title_color = Color::srgb(0.9, 0.75, 0.3);
    let muted_text = Color::srgb(0.6, 0.6, 0.7);

    commands
        .spawn((
            SplashUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(bg_color),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("RING RIVALS"),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(30.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Player 1: press confirm to start"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(muted_text),
            ));
        });
}

pub(crate) fn cleanup_splash_screen(mut commands: Commands, query: Query<Entity, With<SplashUI>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
