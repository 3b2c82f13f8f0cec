//! Combat domain: strike processing, fireballs, and damage application.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::components::{AttackState, CombatState, DamageOutcome, Fighter, Fireball};
use crate::combat::events::{CharacterDefeated, HealthChanged, HitLanded};
use crate::combat::resources::StrikeTuning;
use crate::core::{MatchTuning, PLAYERS_COUNT};
use crate::input::FighterInputs;

const FIREBALL_SIZE: Vec2 = Vec2::new(24.0, 24.0);
const FIREBALL_COLOR: Color = Color::srgb(0.95, 0.55, 0.15);

fn opponent_of(player: usize) -> Option<usize> {
    match player {
        0 => Some(1),
        1 => Some(0),
        _ => None,
    }
}

/// Wind down attack cooldowns.
pub(crate) fn tick_attack_timers(time: Res<Time>, mut query: Query<&mut AttackState>) {
    let dt = time.delta_secs();
    for mut attack in &mut query {
        if attack.punch_timer > 0.0 {
            attack.punch_timer -= dt;
        }
        if attack.kick_timer > 0.0 {
            attack.kick_timer -= dt;
        }
        if attack.fireball_timer > 0.0 {
            attack.fireball_timer -= dt;
        }
    }
}

/// Turn attack inputs into landed hits and fireball spawns. Strikes land
/// when the opponent is within reach along the stage axis; locked
/// fighters are skipped entirely.
pub(crate) fn process_attacks(
    mut commands: Commands,
    inputs: Res<FighterInputs>,
    tuning: Res<StrikeTuning>,
    mut hits: MessageWriter<HitLanded>,
    mut fighters: Query<(&CombatState, &Transform, &mut AttackState), With<Fighter>>,
) {
    let mut positions = [None::<f32>; PLAYERS_COUNT];
    for (state, transform, _) in fighters.iter() {
        if let Some(slot) = positions.get_mut(state.player_index()) {
            *slot = Some(transform.translation.x);
        }
    }

    for (state, transform, mut attack) in &mut fighters {
        if state.is_locked() {
            continue;
        }
        let me = state.player_index();
        let Some(target) = opponent_of(me) else {
            continue;
        };
        let Some(opponent_x) = positions.get(target).copied().flatten() else {
            continue;
        };

        let input = inputs.player(me);
        let x = transform.translation.x;
        let distance = (opponent_x - x).abs();

        if input.punch_pressed && attack.punch_timer <= 0.0 {
            attack.punch_timer = tuning.punch_cooldown;
            if distance <= tuning.punch_reach {
                hits.write(HitLanded {
                    attacker: me,
                    target,
                });
            }
        }

        if input.kick_pressed && attack.kick_timer <= 0.0 {
            attack.kick_timer = tuning.kick_cooldown;
            if distance <= tuning.kick_reach {
                hits.write(HitLanded {
                    attacker: me,
                    target,
                });
            }
        }

        if input.fireball_pressed && attack.fireball_timer <= 0.0 {
            attack.fireball_timer = tuning.fireball_cooldown;
            let direction = if opponent_x >= x { 1.0 } else { -1.0 };
            commands.spawn((
                Fireball {
                    owner: me,
                    direction,
                    lifetime: tuning.fireball_lifetime,
                },
                Sprite {
                    color: FIREBALL_COLOR,
                    custom_size: Some(FIREBALL_SIZE),
                    ..default()
                },
                Transform::from_xyz(x + direction * tuning.fireball_spawn_offset, 0.0, 2.0),
            ));
        }
    }
}

/// Advance fireballs, expire them, and land hits on contact.
pub(crate) fn move_fireballs(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<StrikeTuning>,
    mut hits: MessageWriter<HitLanded>,
    mut fireballs: Query<(Entity, &mut Fireball, &mut Transform)>,
    fighters: Query<(&CombatState, &Transform), (With<Fighter>, Without<Fireball>)>,
) {
    let dt = time.delta_secs();
    for (entity, mut fireball, mut transform) in &mut fireballs {
        fireball.lifetime -= dt;
        if fireball.lifetime <= 0.0 {
            commands.entity(entity).despawn();
            continue;
        }

        transform.translation.x += fireball.direction * tuning.fireball_speed * dt;

        for (state, fighter_transform) in &fighters {
            if state.player_index() == fireball.owner {
                continue;
            }
            let distance = (fighter_transform.translation.x - transform.translation.x).abs();
            if distance <= tuning.fireball_hit_radius {
                hits.write(HitLanded {
                    attacker: fireball.owner,
                    target: state.player_index(),
                });
                commands.entity(entity).despawn();
                break;
            }
        }
    }
}

/// Apply landed hits through the combat state contract. Unknown targets
/// and rejected hits are silent no-ops.
pub(crate) fn apply_damage(
    time: Res<Time>,
    tuning: Res<MatchTuning>,
    mut hits: MessageReader<HitLanded>,
    mut fighters: Query<&mut CombatState>,
    mut health_events: MessageWriter<HealthChanged>,
    mut defeats: MessageWriter<CharacterDefeated>,
) {
    let now = time.elapsed_secs_f64();
    for hit in hits.read() {
        let Some(mut state) = fighters
            .iter_mut()
            .find(|state| state.player_index() == hit.target)
        else {
            continue;
        };

        match state.apply_damage(now, tuning.damage_per_hit, tuning.damage_cooldown) {
            DamageOutcome::Rejected => {}
            DamageOutcome::Damaged { health } => {
                health_events.write(HealthChanged {
                    player_index: hit.target,
                    health,
                    ratio: state.ratio(),
                });
            }
            DamageOutcome::Defeated => {
                health_events.write(HealthChanged {
                    player_index: hit.target,
                    health: 0,
                    ratio: 0.0,
                });
                defeats.write(CharacterDefeated {
                    player_index: hit.target,
                });
            }
        }
    }
}

/// Round start: full health, locked until "GO!", health bars refreshed.
pub(crate) fn reset_combat_states(
    mut fighters: Query<&mut CombatState>,
    mut health_events: MessageWriter<HealthChanged>,
) {
    for mut state in &mut fighters {
        state.reset();
        state.set_locked(true);
        health_events.write(HealthChanged {
            player_index: state.player_index(),
            health: state.health(),
            ratio: state.ratio(),
        });
    }
}

/// Round conclusion cancels every pending projectile synchronously so no
/// delayed effect leaks into the next round.
pub(crate) fn despawn_fireballs(
    mut commands: Commands,
    fireballs: Query<Entity, With<Fireball>>,
) {
    for entity in &fireballs {
        commands.entity(entity).despawn();
    }
}
