use bevy::prelude::*;
use bevy::window::WindowFocused;
use lander_input_map::{InputTranslator, KeyBindings};
use lander_sim_core::{HeldDirectionSource, HeldDirections, ThrustDirection};

/// Held-direction state shared between the keyboard and the fixed tick.
#[derive(Resource, Debug, Default)]
pub struct KeyboardFlightInput {
    pub translator: InputTranslator,
}

impl HeldDirectionSource for KeyboardFlightInput {
    fn held_directions(&self) -> HeldDirections {
        self.translator.held()
    }
}

#[derive(Resource, Debug, Clone)]
pub struct ControlBindings(pub KeyBindings<KeyCode>);

impl Default for ControlBindings {
    fn default() -> Self {
        Self(
            KeyBindings::new()
                .bind(KeyCode::ArrowLeft, ThrustDirection::Left)
                .bind(KeyCode::ArrowRight, ThrustDirection::Right)
                .bind(KeyCode::ArrowUp, ThrustDirection::Up)
                .bind(KeyCode::KeyA, ThrustDirection::Left)
                .bind(KeyCode::KeyD, ThrustDirection::Right)
                .bind(KeyCode::KeyW, ThrustDirection::Up),
        )
    }
}

pub fn capture_keyboard_input(
    keys: Res<'_, ButtonInput<KeyCode>>,
    bindings: Res<'_, ControlBindings>,
    mut input: ResMut<'_, KeyboardFlightInput>,
) {
    for key in keys.get_just_pressed() {
        input.translator.key_down(&bindings.0, key);
    }
    for key in keys.get_just_released() {
        input.translator.key_up(&bindings.0, key);
    }
}

/// Key-up events are lost while unfocused, so drop everything on blur.
pub fn release_input_on_focus_loss(
    mut focus_events: MessageReader<'_, '_, WindowFocused>,
    mut input: ResMut<'_, KeyboardFlightInput>,
) {
    if focus_events.read().any(|event| !event.focused) {
        debug!("window lost focus; releasing held directions");
        input.translator.release_all();
    }
}
