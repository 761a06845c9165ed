use lander_core::FlightTuning;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::held::{HeldDirections, ThrustDirection};

/// Force applied to the craft for a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ThrustVector {
    pub x: f32,
    pub y: f32,
}

impl ThrustVector {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Force of `magnitude` pointing along `direction` (±x for left/right, +y for up).
    pub fn along(direction: ThrustDirection, magnitude: f32) -> Self {
        match direction {
            ThrustDirection::Left => Self::new(-magnitude, 0.0),
            ThrustDirection::Right => Self::new(magnitude, 0.0),
            ThrustDirection::Up => Self::new(0.0, magnitude),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn is_horizontal(&self) -> bool {
        self.x != 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThrustDecision {
    pub direction: Option<ThrustDirection>,
    pub force: ThrustVector,
}

impl ThrustDecision {
    pub const IDLE: Self = Self {
        direction: None,
        force: ThrustVector::ZERO,
    };

    pub fn is_idle(&self) -> bool {
        self.direction.is_none()
    }
}

/// Controllable attributes of the craft. Only [`FlightController`] writes to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    fuel: u32,
    rotation_deg: f32,
    thrust: ThrustVector,
    // Reserved for collision handling; nothing sets it yet.
    has_crashed: bool,
}

impl FlightState {
    fn fueled(fuel: u32) -> Self {
        Self {
            fuel,
            rotation_deg: 0.0,
            thrust: ThrustVector::ZERO,
            has_crashed: false,
        }
    }

    pub fn fuel(&self) -> u32 {
        self.fuel
    }

    pub fn rotation_deg(&self) -> f32 {
        self.rotation_deg
    }

    pub fn thrust(&self) -> ThrustVector {
        self.thrust
    }

    pub fn has_crashed(&self) -> bool {
        self.has_crashed
    }
}

/// Single authority over fuel consumption, thrust and tilt feedback.
#[derive(Debug, Clone)]
pub struct FlightController {
    tuning: FlightTuning,
    state: FlightState,
}

impl Default for FlightController {
    fn default() -> Self {
        Self::new(FlightTuning::default())
    }
}

impl FlightController {
    pub fn new(tuning: FlightTuning) -> Self {
        Self {
            state: FlightState::fueled(tuning.initial_fuel),
            tuning,
        }
    }

    pub fn tuning(&self) -> &FlightTuning {
        &self.tuning
    }

    pub fn state(&self) -> &FlightState {
        &self.state
    }

    /// Picks this tick's thrust from the held directions and burns one unit of
    /// fuel if it fires. This is the only place fuel is consumed.
    pub fn tick(&mut self, held: HeldDirections) -> ThrustDecision {
        let decision = match held.dominant() {
            Some(direction) if self.state.fuel > 0 => {
                self.state.fuel -= 1;
                if self.state.fuel == 0 {
                    debug!(
                        initial_fuel = self.tuning.initial_fuel,
                        "lander fuel exhausted"
                    );
                }
                ThrustDecision {
                    direction: Some(direction),
                    force: ThrustVector::along(direction, self.tuning.move_force),
                }
            }
            Some(direction) => {
                trace!(?direction, "thrust requested with empty tank");
                ThrustDecision::IDLE
            }
            None => ThrustDecision::IDLE,
        };
        self.state.thrust = decision.force;
        decision
    }

    /// Cosmetic tilt cue: any horizontal thrust leans the craft one step
    /// further, saturating at the configured maximum. Never decays.
    pub fn apply_rotation_feedback(&mut self, thrust: ThrustVector) {
        if !thrust.is_horizontal() {
            return;
        }
        let stepped = self.state.rotation_deg + self.tuning.rotation_step_deg;
        self.state.rotation_deg = stepped.min(self.tuning.max_rotation_deg);
    }

    pub fn reset_rotation(&mut self) {
        self.state.rotation_deg = 0.0;
    }

    /// Remaining fuel as a fraction of the initial load, for the HUD.
    pub fn fuel_fraction(&self) -> f32 {
        if self.tuning.initial_fuel == 0 {
            return 0.0;
        }
        (self.state.fuel as f32 / self.tuning.initial_fuel as f32).clamp(0.0, 1.0)
    }

    pub fn fuel(&self) -> u32 {
        self.state.fuel
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.state.rotation_deg
    }

    pub fn thrust(&self) -> ThrustVector {
        self.state.thrust
    }

    pub fn has_crashed(&self) -> bool {
        self.state.has_crashed
    }
}
