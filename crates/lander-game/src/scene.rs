use avian3d::prelude::*;
use bevy::prelude::*;
use lander_core::{
    DEFAULT_DAMPING, FlightTuning, PLAYER_FRICTION, PLAYER_MASS, SPRITE_SIZE, WALL_FRICTION,
    spawn_position,
};

use crate::components::{FlightControl, HudText, Lander, LanderSprite, SpriteTilt};
use crate::terrain::{TerrainKind, TerrainSegment};

const LANDER_COLOR: Color = Color::srgb(0.85, 0.85, 0.9);
const CRASH_COLOR: Color = Color::srgb(0.45, 0.42, 0.4);
const PAD_COLOR: Color = Color::srgb(0.3, 0.75, 0.35);

/// Converts "fraction of velocity kept per second" into avian's damping
/// coefficient.
pub fn damping_coefficient(retained_per_s: f32) -> f32 {
    (-retained_per_s.clamp(f32::MIN_POSITIVE, 1.0).ln()).max(0.0)
}

pub fn spawn_lander(commands: &mut Commands<'_, '_>, tuning: FlightTuning) -> Entity {
    let (x, y) = spawn_position();
    let lander = commands
        .spawn((
            Name::new("lander"),
            Lander,
            FlightControl::new(tuning),
            SpriteTilt::default(),
            Transform::from_xyz(x, y, 0.0),
            Visibility::default(),
        ))
        .insert((
            RigidBody::Dynamic,
            Collider::cuboid(SPRITE_SIZE, SPRITE_SIZE, SPRITE_SIZE),
            Mass(PLAYER_MASS),
            Friction::new(PLAYER_FRICTION),
            LinearDamping(damping_coefficient(DEFAULT_DAMPING)),
            LockedAxes::ROTATION_LOCKED.lock_translation_z(),
            ConstantForce::default(),
        ))
        .id();

    commands.entity(lander).with_children(|child| {
        child.spawn((
            LanderSprite,
            Sprite::from_color(LANDER_COLOR, Vec2::splat(SPRITE_SIZE)),
            Transform::default(),
        ));
    });
    info!(entity = ?lander, fuel = tuning.initial_fuel, "lander spawned");
    lander
}

pub fn spawn_terrain(commands: &mut Commands<'_, '_>, segments: &[TerrainSegment]) {
    for segment in segments {
        let color = match segment.kind {
            TerrainKind::Crash => CRASH_COLOR,
            TerrainKind::Pad => PAD_COLOR,
        };
        let center = segment.center();
        let size = segment.size();
        commands.spawn((
            Name::new(format!("terrain:{:?}", segment.kind)),
            segment.kind,
            Sprite::from_color(color, size),
            Transform::from_xyz(center.x, center.y, -1.0),
            RigidBody::Static,
            Collider::cuboid(size.x, size.y, SPRITE_SIZE),
            Friction::new(WALL_FRICTION),
        ));
    }
}

pub fn spawn_hud(commands: &mut Commands<'_, '_>) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: px(12),
            top: px(12),
            ..default()
        },
        Text::new(""),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::WHITE),
        HudText,
    ));
}
