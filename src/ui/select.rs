//! UI domain: character select screen.

use bevy::prelude::*;

use crate::core::{MatchScore, PLAYERS_COUNT};
use crate::roster::{RosterRegistry, SelectionState};

/// Marker for the select screen root.
#[derive(Component, Debug)]
pub struct SelectUI;

/// Shows a player's current pick.
#[derive(Component, Debug)]
pub struct PickNameText(pub usize);

/// Shows a player's pick tagline.
#[derive(Component, Debug)]
pub struct PickTaglineText(pub usize);

/// Lit once the player has confirmed.
#[derive(Component, Debug)]
pub struct ReadyLabel(pub usize);

pub(crate) fn spawn_select_screen(mut commands: Commands) {
    let bg_color = Color::srgba(0.05, 0.05, 0.1, 0.98);
    let panel_color = Color::srgb(0.12, 0.12, 0.18);
    let text_color = Color::srgb(0.9, 0.9, 0.9);
    let muted_text = Color::srgb(0.6, 0.6, 0.7);
    let title_color = Color::srgb(0.9, 0.75, 0.3);
    let ready_color = Color::srgb(0.4, 0.9, 0.4);

    commands
        .spawn((
            SelectUI,
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
                Text::new("Choose Your Fighter"),
                TextFont {
                    font_size: 40.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    justify_content: JustifyContent::Center,
                    column_gap: Val::Px(60.0),
                    ..default()
                })
                .with_children(|row| {
                    for player in 0..PLAYERS_COUNT {
                        row.spawn((
                            Node {
                                width: Val::Px(260.0),
                                min_height: Val::Px(160.0),
                                flex_direction: FlexDirection::Column,
                                align_items: AlignItems::Center,
                                padding: UiRect::all(Val::Px(16.0)),
                                border: UiRect::all(Val::Px(2.0)),
                                ..default()
                            },
                            BorderColor::all(muted_text),
                            BackgroundColor(panel_color),
                        ))
                        .with_children(|panel| {
                            panel.spawn((
                                Text::new(format!("Player {}", player + 1)),
                                TextFont {
                                    font_size: 18.0,
                                    ..default()
                                },
                                TextColor(muted_text),
                                Node {
                                    margin: UiRect::bottom(Val::Px(12.0)),
                                    ..default()
                                },
                            ));

                            panel.spawn((
                                PickNameText(player),
                                Text::new(""),
                                TextFont {
                                    font_size: 26.0,
                                    ..default()
                                },
                                TextColor(text_color),
                                Node {
                                    margin: UiRect::bottom(Val::Px(6.0)),
                                    ..default()
                                },
                            ));

                            panel.spawn((
                                PickTaglineText(player),
                                Text::new(""),
                                TextFont {
                                    font_size: 15.0,
                                    ..default()
                                },
                                TextColor(muted_text),
                                Node {
                                    margin: UiRect::bottom(Val::Px(12.0)),
                                    ..default()
                                },
                            ));

                            panel.spawn((
                                ReadyLabel(player),
                                Text::new(""),
                                TextFont {
                                    font_size: 20.0,
                                    ..default()
                                },
                                TextColor(ready_color),
                            ));
                        });
                    }
                });

            parent.spawn((
                Text::new("Shoulder buttons switch fighter, confirm to lock in"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(muted_text),
                Node {
                    margin: UiRect::top(Val::Px(40.0)),
                    ..default()
                },
            ));
        });
}

pub(crate) fn update_pick_labels(
    registry: Res<RosterRegistry>,
    selection: Res<SelectionState>,
    mut names: Query<(&PickNameText, &mut Text), Without<PickTaglineText>>,
    mut taglines: Query<(&PickTaglineText, &mut Text), Without<PickNameText>>,
) {
    for (label, mut text) in &mut names {
        let def = selection.pick(label.0).and_then(|index| registry.get(index));
        if let Some(def) = def {
            **text = def.name.clone();
        }
    }
    for (label, mut text) in &mut taglines {
        let def = selection.pick(label.0).and_then(|index| registry.get(index));
        if let Some(def) = def {
            **text = def.tagline.clone();
        }
    }
}

pub(crate) fn update_ready_labels(
    score: Res<MatchScore>,
    mut labels: Query<(&ReadyLabel, &mut Text)>,
) {
    if !score.is_changed() {
        return;
    }
    for (label, mut text) in &mut labels {
        **text = if score.is_ready(label.0) {
            "READY!".to_string()
        } else {
            String::new()
        };
    }
}

pub(crate) fn cleanup_select_screen(mut commands: Commands, query: Query<Entity, With<SelectUI>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
