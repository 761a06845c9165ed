//! Drives the lander flight model from the fixed schedule.
//!
//! Input flows KeyboardFlightInput → FlightControl → ConstantForce. Avian's
//! physics schedule runs right after FixedUpdate and integrates the force.

use avian3d::prelude::*;
use bevy::prelude::*;
use lander_core::{PLAYER_MAX_HORIZONTAL_SPEED, PLAYER_MAX_VERTICAL_SPEED};
use lander_sim_core::{PhysicsBackend, ThrustVector};
use thiserror::Error;

use crate::components::{FlightControl, Lander, LanderSprite, SpriteTilt};
use crate::input::KeyboardFlightInput;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BackendError {
    #[error("entity {0:?} has no ConstantForce to drive")]
    UnknownBody(Entity),
}

/// Physics backend over avian's persistent `ConstantForce`. The force is
/// overwritten every tick, so a zero decision switches the engine off.
pub struct ConstantForceBackend<'q, 'w, 's> {
    forces: &'q mut Query<'w, 's, &'static mut ConstantForce>,
}

impl<'q, 'w, 's> ConstantForceBackend<'q, 'w, 's> {
    pub fn new(forces: &'q mut Query<'w, 's, &'static mut ConstantForce>) -> Self {
        Self { forces }
    }
}

impl PhysicsBackend for ConstantForceBackend<'_, '_, '_> {
    type Body = Entity;
    type Error = BackendError;

    fn apply_force(&mut self, body: Entity, force: ThrustVector) -> Result<(), BackendError> {
        let mut constant = self
            .forces
            .get_mut(body)
            .map_err(|_| BackendError::UnknownBody(body))?;
        constant.0 = Vec3::new(force.x, force.y, 0.0);
        Ok(())
    }

    /// No-op: avian integrates the body in its own schedule, which runs once
    /// per fixed tick right after FixedUpdate.
    fn step(&mut self) -> Result<(), BackendError> {
        Ok(())
    }
}

pub fn step_lander_flight(
    time: Res<'_, Time>,
    input: Res<'_, KeyboardFlightInput>,
    mut landers: Query<'_, '_, (Entity, &mut FlightControl), With<Lander>>,
    mut forces: Query<'_, '_, &'static mut ConstantForce>,
) {
    let dt = time.delta_secs();
    let mut backend = ConstantForceBackend::new(&mut forces);

    for (entity, mut control) in &mut landers {
        let fuel_before = control.controller().fuel();
        match control.step(&*input, &mut backend, entity, dt) {
            Ok(report) => {
                if fuel_before > 0 && report.fuel == 0 {
                    info!(entity = ?entity, tick = report.tick, "lander out of fuel");
                }
            }
            Err(err) => {
                error!(entity = ?entity, %err, "lander flight tick aborted");
            }
        }
    }
}

/// Caps each velocity axis separately.
pub fn clamp_lander_speed(mut landers: Query<'_, '_, &mut LinearVelocity, With<Lander>>) {
    for mut velocity in &mut landers {
        velocity.0.x = velocity
            .0
            .x
            .clamp(-PLAYER_MAX_HORIZONTAL_SPEED, PLAYER_MAX_HORIZONTAL_SPEED);
        velocity.0.y = velocity
            .0
            .y
            .clamp(-PLAYER_MAX_VERTICAL_SPEED, PLAYER_MAX_VERTICAL_SPEED);
    }
}

pub fn tilt_lander_sprites(
    mut landers: Query<'_, '_, (&FlightControl, &mut SpriteTilt), With<Lander>>,
    mut sprites: Query<'_, '_, (&ChildOf, &mut Transform), With<LanderSprite>>,
) {
    for (control, mut tilt) in &mut landers {
        tilt.observe(control.controller().thrust());
    }

    for (child_of, mut transform) in &mut sprites {
        let Ok((control, tilt)) = landers.get(child_of.parent()) else {
            continue;
        };
        let angle = tilt.angle_rad(control.controller().rotation_degrees());
        transform.rotation = Quat::from_rotation_z(angle);
    }
}
