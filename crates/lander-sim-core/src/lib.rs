//! Deterministic lander flight model.
//!
//! Nothing in here knows about windows, sprites or rigid bodies: the
//! [`FlightController`] turns held directions into a force, and the
//! [`SimulationLoop`] hands that force to whatever [`PhysicsBackend`] the
//! caller plugs in.

pub mod flight;
pub mod held;
pub mod sim_loop;

pub use flight::{FlightController, FlightState, ThrustDecision, ThrustVector};
pub use held::{HeldDirectionSource, HeldDirections, ThrustDirection};
pub use sim_loop::{PhysicsBackend, SimulationLoop, TickReport};
