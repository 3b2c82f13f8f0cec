//! Camera domain: arena setup and a camera that frames both fighters.

use bevy::prelude::*;

use crate::combat::Fighter;

const FOLLOW_SPEED: f32 = 3.0;
const MIN_FRAME_DISTANCE: f32 = 250.0;
const MAX_FRAME_DISTANCE: f32 = 800.0;
const MIN_ZOOM: f32 = 0.9;
const MAX_ZOOM: f32 = 1.5;

const GROUND_Y: f32 = -80.0;
const GROUND_SIZE: Vec2 = Vec2::new(2400.0, 40.0);

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_arena)
            .add_systems(Update, frame_fighters);
    }
}

pub(crate) fn setup_arena(mut commands: Commands) {
    commands.spawn(Camera2d);

    commands.spawn((
        Sprite {
            color: Color::srgb(0.25, 0.22, 0.2),
            custom_size: Some(GROUND_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, GROUND_Y, -1.0),
    ));
}

/// Ease the camera toward the midpoint of the fighters and zoom out as
/// they separate.
pub(crate) fn frame_fighters(
    time: Res<Time>,
    fighters: Query<&Transform, (With<Fighter>, Without<Camera2d>)>,
    mut camera: Query<(&mut Transform, &mut Projection), (With<Camera2d>, Without<Fighter>)>,
) {
    let Ok((mut camera_transform, mut projection)) = camera.single_mut() else {
        return;
    };

    let positions: Vec<Vec2> = fighters
        .iter()
        .map(|transform| transform.translation.truncate())
        .collect();
    if positions.len() < 2 {
        return;
    }

    let midpoint = (positions[0] + positions[1]) / 2.0;
    let distance = positions[0].distance(positions[1]);

    let t = (FOLLOW_SPEED * time.delta_secs()).min(1.0);
    let current = camera_transform.translation.truncate();
    let eased = current.lerp(midpoint, t);
    camera_transform.translation.x = eased.x;
    camera_transform.translation.y = eased.y;

    if let Projection::Orthographic(ortho) = projection.as_mut() {
        let spread = ((distance - MIN_FRAME_DISTANCE)
            / (MAX_FRAME_DISTANCE - MIN_FRAME_DISTANCE))
            .clamp(0.0, 1.0);
        let target_scale = MIN_ZOOM + spread * (MAX_ZOOM - MIN_ZOOM);
        ortho.scale += (target_scale - ortho.scale) * t;
    }
}
