//! UI domain: in-match HUD driven entirely by orchestrator events.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::HealthChanged;
use crate::core::{CountdownMessage, CountdownTick, MatchScore, RoundConcluded, RoundOutcome,
    RoundStarted};

const HEALTHBAR_WIDTH: f32 = 340.0;
const HEALTHBAR_HEIGHT: f32 = 24.0;

/// Marker for the HUD root container.
#[derive(Component, Debug)]
pub struct HudRoot;

/// Health bar fill for one player.
#[derive(Component, Debug)]
pub struct HealthBarFill(pub usize);

/// Round wins counter for one player.
#[derive(Component, Debug)]
pub struct WinsText(pub usize);

/// "Round N" header.
#[derive(Component, Debug)]
pub struct RoundText;

/// Countdown / round clock / "GO!" display.
#[derive(Component, Debug)]
pub struct ClockText;

/// Mid-screen round result banner.
#[derive(Component, Debug)]
pub struct BannerText;

/// Spawn the match HUD on the first round; later rounds reuse it.
pub(crate) fn spawn_match_hud(mut commands: Commands, existing: Query<(), With<HudRoot>>) {
    if !existing.is_empty() {
        return;
    }

    let text_color = Color::srgb(0.9, 0.9, 0.9);
    let title_color = Color::srgb(0.9, 0.75, 0.3);
    let bar_back = Color::srgba(0.1, 0.1, 0.1, 0.8);
    let bar_border = Color::srgb(0.3, 0.3, 0.3);

    commands
        .spawn((
            HudRoot,
            Node {
                width: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                top: Val::Px(16.0),
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::FlexStart,
                padding: UiRect::horizontal(Val::Px(24.0)),
                ..default()
            },
            ZIndex(50),
        ))
        .with_children(|parent| {
            spawn_player_panel(parent, 0, bar_back, bar_border, text_color);

            // Center column: round header and clock.
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(4.0),
                    ..default()
                })
                .with_children(|center| {
                    center.spawn((
                        RoundText,
                        Text::new("Round 1"),
                        TextFont {
                            font_size: 22.0,
                            ..default()
                        },
                        TextColor(title_color),
                    ));
                    center.spawn((
                        ClockText,
                        Text::new(""),
                        TextFont {
                            font_size: 42.0,
                            ..default()
                        },
                        TextColor(text_color),
                    ));
                });

            spawn_player_panel(parent, 1, bar_back, bar_border, text_color);
        });

    // Round result banner, mid-screen.
    commands.spawn((
        HudRoot,
        BannerText,
        Text::new(""),
        TextFont {
            font_size: 48.0,
            ..default()
        },
        TextColor(title_color),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(38.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        },
        TextLayout::new_with_justify(Justify::Center),
        ZIndex(60),
    ));
}

fn spawn_player_panel(
    parent: &mut ChildSpawnerCommands,
    player: usize,
    bar_back: Color,
    bar_border: Color,
    text_color: Color,
) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Column,
            align_items: if player == 0 {
                AlignItems::FlexStart
            } else {
                AlignItems::FlexEnd
            },
            row_gap: Val::Px(6.0),
            ..default()
        })
        .with_children(|panel| {
            panel
                .spawn((
                    Node {
                        width: Val::Px(HEALTHBAR_WIDTH),
                        height: Val::Px(HEALTHBAR_HEIGHT),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(bar_back),
                    BorderColor::all(bar_border),
                ))
                .with_children(|bar| {
                    bar.spawn((
                        HealthBarFill(player),
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.2, 0.8, 0.3)),
                    ));
                });

            panel.spawn((
                WinsText(player),
                Text::new(format!("P{}  wins: 0", player + 1)),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(text_color),
            ));
        });
}

/// Color gradient: green through yellow to red as health drops.
fn health_color(ratio: f32) -> Color {
    if ratio > 0.5 {
        let t = (ratio - 0.5) * 2.0;
        Color::srgb(1.0 - t * 0.8, 0.8, 0.3 * (1.0 - t))
    } else {
        let t = ratio * 2.0;
        Color::srgb(0.9, 0.2 + t * 0.6, 0.2)
    }
}

pub(crate) fn update_health_bars(
    mut health_events: MessageReader<HealthChanged>,
    mut fills: Query<(&HealthBarFill, &mut Node, &mut BackgroundColor)>,
) {
    for event in health_events.read() {
        for (fill, mut node, mut bg_color) in &mut fills {
            if fill.0 != event.player_index {
                continue;
            }
            node.width = Val::Percent(event.ratio * 100.0);
            bg_color.0 = health_color(event.ratio);
        }
    }
}

pub(crate) fn update_clock_text(
    mut ticks: MessageReader<CountdownTick>,
    mut messages: MessageReader<CountdownMessage>,
    mut clocks: Query<&mut Text, With<ClockText>>,
) {
    let mut display: Option<String> = None;
    for tick in ticks.read() {
        display = Some(tick.seconds_left.to_string());
    }
    for message in messages.read() {
        display = Some(message.text.to_string());
    }

    if let Some(display) = display {
        for mut text in &mut clocks {
            **text = display.clone();
        }
    }
}

pub(crate) fn update_round_text(
    mut started: MessageReader<RoundStarted>,
    mut rounds: Query<&mut Text, With<RoundText>>,
) {
    for event in started.read() {
        for mut text in &mut rounds {
            **text = format!("Round {}", event.round);
        }
    }
}

pub(crate) fn update_wins_text(score: Res<MatchScore>, mut wins: Query<(&WinsText, &mut Text)>) {
    if !score.is_changed() {
        return;
    }
    for (label, mut text) in &mut wins {
        **text = format!("P{}  wins: {}", label.0 + 1, score.wins(label.0));
    }
}

pub(crate) fn show_round_banner(
    mut concluded: MessageReader<RoundConcluded>,
    mut banners: Query<&mut Text, With<BannerText>>,
) {
    for event in concluded.read() {
        let message = match event.outcome {
            RoundOutcome::Winner(winner) => format!("Player {} takes the round!", winner + 1),
            RoundOutcome::Draw => "Draw! Nobody takes the round".to_string(),
        };
        for mut text in &mut banners {
            **text = message.clone();
        }
    }
}

/// A fresh round clears the result banner.
pub(crate) fn clear_round_banner(mut banners: Query<&mut Text, With<BannerText>>) {
    for mut text in &mut banners {
        **text = String::new();
    }
}

pub(crate) fn cleanup_match_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
