use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::flight::{FlightController, ThrustVector};
use crate::held::{HeldDirectionSource, ThrustDirection};

/// Rigid-body engine that owns the craft's dynamics.
pub trait PhysicsBackend {
    type Body: Copy;
    type Error;

    /// Applies `force` to `body` for the coming step.
    fn apply_force(&mut self, body: Self::Body, force: ThrustVector) -> Result<(), Self::Error>;

    /// Advances the simulation by one step.
    fn step(&mut self) -> Result<(), Self::Error>;
}

/// Render-relevant state read back after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub tick: u64,
    pub direction: Option<ThrustDirection>,
    pub thrust: ThrustVector,
    pub fuel: u32,
    pub fuel_fraction: f32,
    pub rotation_deg: f32,
}

#[derive(Debug, Clone, Default)]
pub struct SimulationLoop {
    controller: FlightController,
    ticks: u64,
}

impl SimulationLoop {
    pub fn new(controller: FlightController) -> Self {
        Self {
            controller,
            ticks: 0,
        }
    }

    pub fn controller(&self) -> &FlightController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut FlightController {
        &mut self.controller
    }

    /// Number of ticks that completed without a backend error.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Runs one fixed tick. The force is applied unscaled whatever `_delta_s`
    /// is. A backend error aborts the tick: fuel spent by the controller stays
    /// spent, but tilt feedback is skipped and the tick count does not move.
    pub fn step<I, B>(
        &mut self,
        input: &I,
        backend: &mut B,
        body: B::Body,
        _delta_s: f32,
    ) -> Result<TickReport, B::Error>
    where
        I: HeldDirectionSource + ?Sized,
        B: PhysicsBackend + ?Sized,
    {
        let held = input.held_directions();
        let decision = self.controller.tick(held);
        backend.apply_force(body, decision.force)?;
        backend.step()?;
        self.controller.apply_rotation_feedback(decision.force);
        self.ticks += 1;

        let report = self.report(decision.direction);
        trace!(
            tick = report.tick,
            fuel = report.fuel,
            rotation_deg = report.rotation_deg,
            "lander tick"
        );
        Ok(report)
    }

    fn report(&self, direction: Option<ThrustDirection>) -> TickReport {
        TickReport {
            tick: self.ticks,
            direction,
            thrust: self.controller.thrust(),
            fuel: self.controller.fuel(),
            fuel_fraction: self.controller.fuel_fraction(),
            rotation_deg: self.controller.rotation_degrees(),
        }
    }
}
