//! UI domain: game over screen.

use bevy::prelude::*;

use crate::core::{MatchScore, MatchTuning};

/// Marker for the game over screen root.
#[derive(Component, Debug)]
pub struct GameOverUI;

pub(crate) fn spawn_game_over_screen(
    mut commands: Commands,
    score: Res<MatchScore>,
    tuning: Res<MatchTuning>,
) {
    let bg_color = Color::srgba(0.04, 0.04, 0.08, 0.96);
    let title_color = Color::srgb(0.9, 0.75, 0.3);
    let muted_text = Color::srgb(0.6, 0.6, 0.7);

    let headline = match score.match_winner(tuning.wins_to_take_match) {
        Some(winner) => format!("PLAYER {} WINS THE MATCH", winner + 1),
        None => "MATCH OVER".to_string(),
    };

    commands
        .spawn((
            GameOverUI,
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
                Text::new(headline),
                TextFont {
                    font_size: 52.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(format!(
                    "Rounds  P1 {} - {} P2",
                    score.wins(0),
                    score.wins(1)
                )),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(muted_text),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Press confirm for a rematch"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(muted_text),
            ));
        });
}

pub(crate) fn cleanup_game_over_screen(
    mut commands: Commands,
    query: Query<Entity, With<GameOverUI>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
