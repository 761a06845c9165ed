use bevy::prelude::*;
use bevy::window::WindowFocused;
use lander_core::config::LanderConfig;

pub mod components;
pub mod flight;
pub mod hud;
pub mod input;
pub mod scene;
pub mod terrain;

pub use components::*;
pub use flight::{BackendError, ConstantForceBackend, clamp_lander_speed, step_lander_flight};
pub use input::{ControlBindings, KeyboardFlightInput, capture_keyboard_input};

/// Config the game was started with.
#[derive(Resource, Debug, Clone)]
pub struct LanderSettings(pub LanderConfig);

#[derive(Default)]
pub struct LanderGamePlugin {
    pub config: LanderConfig,
}

impl Plugin for LanderGamePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(f64::from(self.config.sim_tick_hz)))
            .insert_resource(LanderSettings(self.config.clone()))
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<KeyboardFlightInput>()
            .init_resource::<ControlBindings>()
            .add_message::<WindowFocused>();

        app.add_systems(
            Update,
            (
                input::release_input_on_focus_loss,
                capture_keyboard_input,
            )
                .chain(),
        );

        // Speed caps act on the velocity the previous physics step produced.
        app.add_systems(
            FixedUpdate,
            (clamp_lander_speed, step_lander_flight).chain(),
        );

        app.add_systems(Update, (flight::tilt_lander_sprites, hud::update_hud_text));
    }
}
