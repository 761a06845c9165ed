use bevy::prelude::*;
use lander_core::FlightTuning;
use lander_sim_core::{
    FlightController, HeldDirectionSource, PhysicsBackend, SimulationLoop, ThrustVector,
    TickReport,
};

/// Marks the player-controlled craft body.
#[derive(Component, Debug, Default)]
pub struct Lander;

/// Visual child of the lander; tilts without touching the body.
#[derive(Component, Debug, Default)]
pub struct LanderSprite;

#[derive(Component, Debug, Default)]
pub struct HudText;

/// Flight model of one craft, stepped once per fixed tick.
#[derive(Component, Debug, Default)]
pub struct FlightControl {
    sim: SimulationLoop,
    last_report: Option<TickReport>,
}

impl FlightControl {
    pub fn new(tuning: FlightTuning) -> Self {
        Self {
            sim: SimulationLoop::new(FlightController::new(tuning)),
            last_report: None,
        }
    }

    pub fn controller(&self) -> &FlightController {
        self.sim.controller()
    }

    pub fn last_report(&self) -> Option<&TickReport> {
        self.last_report.as_ref()
    }

    pub fn step<I, B>(
        &mut self,
        input: &I,
        backend: &mut B,
        body: B::Body,
        delta_s: f32,
    ) -> Result<TickReport, B::Error>
    where
        I: HeldDirectionSource + ?Sized,
        B: PhysicsBackend + ?Sized,
    {
        let report = self.sim.step(input, backend, body, delta_s)?;
        self.last_report = Some(report);
        Ok(report)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lean {
    #[default]
    Upright,
    Left,
    Right,
}

/// Which way the sprite leans; follows the most recent horizontal thrust.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpriteTilt {
    pub lean: Lean,
}

impl SpriteTilt {
    pub fn observe(&mut self, thrust: ThrustVector) {
        if thrust.x < 0.0 {
            self.lean = Lean::Left;
        } else if thrust.x > 0.0 {
            self.lean = Lean::Right;
        }
    }

    /// Sprite angle around +z. Left leans counter-clockwise, right clockwise.
    pub fn angle_rad(&self, rotation_deg: f32) -> f32 {
        match self.lean {
            Lean::Upright => 0.0,
            Lean::Left => rotation_deg.to_radians(),
            Lean::Right => -rotation_deg.to_radians(),
        }
    }
}
