use anyhow::Context;
use avian3d::prelude::*;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use lander_core::config::LanderConfig;
use lander_core::{GRAVITY, SCREEN_HEIGHT, SCREEN_TITLE, SCREEN_WIDTH, SPRITE_SIZE, TILE_SIZE};
use lander_game::scene::{spawn_hud, spawn_lander, spawn_terrain};
use lander_game::terrain::{GROUND_TOP, default_terrain};
use lander_game::{LanderGamePlugin, LanderSettings};
use rand::Rng;

const STAR_COUNT: usize = 120;
const STAR_SIZE: f32 = 2.0;

#[derive(Component)]
struct Star;

fn main() -> anyhow::Result<()> {
    let config = LanderConfig::from_env().context("invalid lander configuration")?;

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(play_field_window()),
        ..default()
    }));
    app.add_plugins(PhysicsPlugins::default().with_length_unit(SPRITE_SIZE));
    app.insert_resource(Gravity(Vec3::new(0.0, -GRAVITY, 0.0)));
    app.insert_resource(ClearColor(Color::BLACK));
    app.add_plugins(LanderGamePlugin { config });
    app.add_systems(Startup, (spawn_camera, spawn_starfield, spawn_world));
    app.run();
    Ok(())
}

/// Fixed-size window that shows exactly the play field.
fn play_field_window() -> Window {
    Window {
        title: SCREEN_TITLE.to_string(),
        resolution: WindowResolution::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32),
        resizable: false,
        ..default()
    }
}

fn spawn_camera(mut commands: Commands<'_, '_>) {
    // Put the origin at the bottom-left corner of the play field.
    commands.spawn((
        Camera2d,
        Transform::from_xyz(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0, 0.0),
    ));
}

fn spawn_world(mut commands: Commands<'_, '_>, settings: Res<'_, LanderSettings>) {
    spawn_terrain(&mut commands, &default_terrain());
    spawn_lander(&mut commands, settings.0.flight);
    spawn_hud(&mut commands);
    info!(
        tick_hz = settings.0.sim_tick_hz,
        fuel = settings.0.flight.initial_fuel,
        "lunar lander ready; arrows or WAD to thrust"
    );
}

fn spawn_starfield(mut commands: Commands<'_, '_>) {
    let mut rng = rand::rng();
    for position in star_positions(&mut rng, STAR_COUNT) {
        commands.spawn((
            Sprite::from_color(Color::srgb(0.7, 0.8, 1.0), Vec2::splat(STAR_SIZE)),
            Transform::from_xyz(position.x, position.y, -2.0),
            Star,
        ));
    }
}

/// Random star positions in the sky above the tallest terrain.
fn star_positions<R: Rng>(rng: &mut R, count: usize) -> Vec<Vec2> {
    let floor = GROUND_TOP + TILE_SIZE * 3.0;
    (0..count)
        .map(|_| {
            Vec2::new(
                rng.random_range(0.0..SCREEN_WIDTH),
                rng.random_range(floor..SCREEN_HEIGHT),
            )
        })
        .collect()
}
