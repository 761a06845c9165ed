use bevy::prelude::*;
use lander_core::ALTITUDE_DATUM;
use lander_sim_core::ThrustVector;

use crate::LanderSettings;
use crate::components::{FlightControl, HudText, Lander};

pub fn altitude_of(center_y: f32) -> f32 {
    center_y - ALTITUDE_DATUM
}

pub fn fuel_text(fuel_fraction: f32) -> String {
    format!("Fuel: {:.1}%", fuel_fraction.clamp(0.0, 1.0) * 100.0)
}

pub fn altitude_text(altitude: f32) -> String {
    format!("Altitude: {altitude:.0}")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudDebug {
    pub thrust: ThrustVector,
    pub rotation_deg: f32,
}

pub fn hud_line(fuel_fraction: f32, altitude: f32, debug: Option<HudDebug>) -> String {
    let mut line = format!("{}   {}", fuel_text(fuel_fraction), altitude_text(altitude));
    if let Some(debug) = debug {
        line.push_str(&format!(
            "   Thrust: ({:.0}, {:.0})   Tilt: {:.0}°",
            debug.thrust.x, debug.thrust.y, debug.rotation_deg
        ));
    }
    line
}

pub fn update_hud_text(
    settings: Res<'_, LanderSettings>,
    landers: Query<'_, '_, (&Transform, &FlightControl), With<Lander>>,
    mut hud: Query<'_, '_, &mut Text, With<HudText>>,
) {
    let Ok((transform, control)) = landers.single() else {
        return;
    };
    let Ok(mut text) = hud.single_mut() else {
        return;
    };

    let controller = control.controller();
    let debug = settings.0.show_debug_hud.then(|| HudDebug {
        thrust: controller.thrust(),
        rotation_deg: controller.rotation_degrees(),
    });
    let content = hud_line(
        controller.fuel_fraction(),
        altitude_of(transform.translation.y),
        debug,
    );
    if **text != content {
        content.clone_into(&mut **text);
    }
}
