use avian3d::prelude::{ConstantForce, LinearVelocity};
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use bevy::window::WindowFocused;
use lander_core::FlightTuning;
use lander_game::flight::tilt_lander_sprites;
use lander_game::hud::update_hud_text;
use lander_game::input::release_input_on_focus_loss;
use lander_game::{
    ControlBindings, FlightControl, HudText, KeyboardFlightInput, Lander, LanderGamePlugin,
    LanderSettings, LanderSprite, SpriteTilt, capture_keyboard_input, clamp_lander_speed,
    step_lander_flight,
};
use lander_sim_core::{HeldDirections, ThrustDirection};

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LanderGamePlugin::default()));
    app
}

fn spawn_test_lander(app: &mut App, fuel: u32) -> Entity {
    app.world_mut()
        .spawn((
            Lander,
            FlightControl::new(FlightTuning::default().with_initial_fuel(fuel)),
            ConstantForce::default(),
        ))
        .id()
}

fn hold(app: &mut App, direction: ThrustDirection) {
    app.world_mut()
        .resource_mut::<KeyboardFlightInput>()
        .translator
        .on_key_down(direction);
}

#[test]
fn plugin_inserts_flight_resources() {
    let app = test_app();
    let world = app.world();
    assert!(world.contains_resource::<KeyboardFlightInput>());
    assert!(world.contains_resource::<ControlBindings>());
    assert!(world.contains_resource::<LanderSettings>());
    assert!(world.contains_resource::<ButtonInput<KeyCode>>());
}

#[test]
fn keyboard_presses_reach_translator() {
    let mut app = test_app();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ArrowRight);
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyW);
    app.world_mut()
        .run_system_once(capture_keyboard_input)
        .expect("capture runs");

    let held = app.world().resource::<KeyboardFlightInput>().translator.held();
    assert_eq!(
        held,
        HeldDirections {
            left: false,
            right: true,
            up: true,
        }
    );

    {
        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.clear();
        keys.release(KeyCode::ArrowRight);
        keys.press(KeyCode::Space);
    }
    app.world_mut()
        .run_system_once(capture_keyboard_input)
        .expect("capture runs");

    let held = app.world().resource::<KeyboardFlightInput>().translator.held();
    assert!(!held.right);
    assert!(held.up);
    assert!(!held.left);
}

#[test]
fn losing_focus_releases_every_direction() {
    let mut app = test_app();
    hold(&mut app, ThrustDirection::Left);
    hold(&mut app, ThrustDirection::Up);
    app.world_mut().write_message(WindowFocused {
        window: Entity::PLACEHOLDER,
        focused: false,
    });

    app.world_mut()
        .run_system_once(release_input_on_focus_loss)
        .expect("release runs");

    let held = app.world().resource::<KeyboardFlightInput>().translator.held();
    assert!(!held.any());
}

#[test]
fn flight_tick_writes_thrust_into_constant_force() {
    let mut app = test_app();
    let lander = spawn_test_lander(&mut app, 3);
    hold(&mut app, ThrustDirection::Right);

    app.world_mut()
        .run_system_once(step_lander_flight)
        .expect("flight runs");

    let force = app.world().get::<ConstantForce>(lander).expect("force");
    assert_eq!(force.0, Vec3::new(65.0, 0.0, 0.0));
    let control = app.world().get::<FlightControl>(lander).expect("control");
    assert_eq!(control.controller().fuel(), 2);
    assert_eq!(control.controller().rotation_degrees(), 5.0);
    assert_eq!(control.last_report().map(|r| r.tick), Some(1));
}

#[test]
fn released_keys_switch_the_engine_off() {
    let mut app = test_app();
    let lander = spawn_test_lander(&mut app, 10);
    hold(&mut app, ThrustDirection::Up);
    app.world_mut()
        .run_system_once(step_lander_flight)
        .expect("flight runs");

    app.world_mut()
        .resource_mut::<KeyboardFlightInput>()
        .translator
        .release_all();
    app.world_mut()
        .run_system_once(step_lander_flight)
        .expect("flight runs");

    let force = app.world().get::<ConstantForce>(lander).expect("force");
    assert_eq!(force.0, Vec3::ZERO);
    let control = app.world().get::<FlightControl>(lander).expect("control");
    assert_eq!(control.controller().fuel(), 9);
}

#[test]
fn empty_tank_keeps_force_at_zero() {
    let mut app = test_app();
    let lander = spawn_test_lander(&mut app, 1);
    hold(&mut app, ThrustDirection::Left);

    for _ in 0..3 {
        app.world_mut()
            .run_system_once(step_lander_flight)
            .expect("flight runs");
    }

    let force = app.world().get::<ConstantForce>(lander).expect("force");
    assert_eq!(force.0, Vec3::ZERO);
    let control = app.world().get::<FlightControl>(lander).expect("control");
    assert_eq!(control.controller().fuel(), 0);
    assert_eq!(control.last_report().map(|r| r.tick), Some(3));
}

#[test]
fn lander_without_force_component_aborts_its_tick() {
    let mut app = test_app();
    let lander = app
        .world_mut()
        .spawn((Lander, FlightControl::new(FlightTuning::default())))
        .id();
    hold(&mut app, ThrustDirection::Left);

    app.world_mut()
        .run_system_once(step_lander_flight)
        .expect("flight runs");

    let control = app.world().get::<FlightControl>(lander).expect("control");
    assert!(control.last_report().is_none());
    assert_eq!(control.controller().rotation_degrees(), 0.0);
}

#[test]
fn speed_is_capped_per_axis() {
    let mut app = test_app();
    let lander = app
        .world_mut()
        .spawn((Lander, LinearVelocity(Vec3::new(-900.0, 2000.0, 0.0))))
        .id();
    let bystander = app
        .world_mut()
        .spawn(LinearVelocity(Vec3::new(-900.0, 2000.0, 0.0)))
        .id();

    app.world_mut()
        .run_system_once(clamp_lander_speed)
        .expect("clamp runs");

    let velocity = app.world().get::<LinearVelocity>(lander).expect("velocity");
    assert_eq!(velocity.0, Vec3::new(-450.0, 1600.0, 0.0));
    let untouched = app.world().get::<LinearVelocity>(bystander).expect("velocity");
    assert_eq!(untouched.0, Vec3::new(-900.0, 2000.0, 0.0));
}

#[test]
fn tilt_rotates_sprite_child_only() {
    let mut app = test_app();
    let body_transform = Transform::from_xyz(400.0, 496.0, 0.0);
    let lander = app
        .world_mut()
        .spawn((
            Lander,
            FlightControl::new(FlightTuning::default()),
            SpriteTilt::default(),
            ConstantForce::default(),
            body_transform,
        ))
        .id();
    let sprite = app
        .world_mut()
        .spawn((LanderSprite, Transform::default(), ChildOf(lander)))
        .id();
    hold(&mut app, ThrustDirection::Left);

    for _ in 0..2 {
        app.world_mut()
            .run_system_once(step_lander_flight)
            .expect("flight runs");
    }
    app.world_mut()
        .run_system_once(tilt_lander_sprites)
        .expect("tilt runs");

    let sprite_transform = app.world().get::<Transform>(sprite).expect("sprite");
    assert_eq!(
        sprite_transform.rotation,
        Quat::from_rotation_z(10f32.to_radians())
    );
    let lander_transform = app.world().get::<Transform>(lander).expect("lander");
    assert_eq!(*lander_transform, body_transform);
}

#[test]
fn hud_text_tracks_lander_state() {
    let mut app = test_app();
    let hud = app.world_mut().spawn((HudText, Text::new(""))).id();
    app.world_mut().spawn((
        Lander,
        FlightControl::new(FlightTuning::default()),
        Transform::from_xyz(400.0, 144.5, 0.0),
    ));

    app.world_mut()
        .run_system_once(update_hud_text)
        .expect("hud runs");
    let text = app.world().get::<Text>(hud).expect("text");
    assert_eq!(text.0, "Fuel: 100.0%   Altitude: 100");

    app.world_mut()
        .resource_mut::<LanderSettings>()
        .0
        .show_debug_hud = true;
    app.world_mut()
        .run_system_once(update_hud_text)
        .expect("hud runs");
    let text = app.world().get::<Text>(hud).expect("text");
    assert_eq!(
        text.0,
        "Fuel: 100.0%   Altitude: 100   Thrust: (0, 0)   Tilt: 0°"
    );
}
