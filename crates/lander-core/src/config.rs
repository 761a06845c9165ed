use std::env;

use thiserror::Error;

use crate::{FlightTuning, SIM_TICK_HZ};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} is not a valid {expected}: {raw:?}")]
    Malformed {
        key: String,
        expected: &'static str,
        raw: String,
    },
    #[error("initial fuel must be greater than zero")]
    NoFuel,
    #[error("move force must be finite and positive, got {0}")]
    InvalidMoveForce(f32),
    #[error("rotation step must be finite and non-negative, got {0}")]
    InvalidRotationStep(f32),
    #[error("max rotation must be finite and non-negative, got {0}")]
    InvalidMaxRotation(f32),
    #[error("sim tick rate must be greater than zero")]
    ZeroTickRate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanderConfig {
    pub flight: FlightTuning,
    pub sim_tick_hz: u16,
    pub show_debug_hud: bool,
}

impl Default for LanderConfig {
    fn default() -> Self {
        Self {
            flight: FlightTuning::default(),
            sim_tick_hz: SIM_TICK_HZ,
            show_debug_hud: false,
        }
    }
}

impl LanderConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Missing or blank keys keep
    /// their defaults; present numeric keys must parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &str| lookup(key).filter(|raw| !raw.trim().is_empty());

        let flight = FlightTuning {
            initial_fuel: parse_or(&read, "LANDER_INITIAL_FUEL", "u32", defaults.flight.initial_fuel)?,
            move_force: parse_or(&read, "LANDER_MOVE_FORCE", "f32", defaults.flight.move_force)?,
            rotation_step_deg: parse_or(
                &read,
                "LANDER_ROTATION_STEP_DEG",
                "f32",
                defaults.flight.rotation_step_deg,
            )?,
            max_rotation_deg: parse_or(
                &read,
                "LANDER_MAX_ROTATION_DEG",
                "f32",
                defaults.flight.max_rotation_deg,
            )?,
        };
        let sim_tick_hz = parse_or(&read, "LANDER_SIM_TICK_HZ", "u16", defaults.sim_tick_hz)?;
        let show_debug_hud = read("LANDER_SHOW_DEBUG_HUD")
            .and_then(|raw| parse_bool(&raw))
            .unwrap_or(defaults.show_debug_hud);

        let config = Self {
            flight,
            sim_tick_hz,
            show_debug_hud,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let flight = &self.flight;
        if flight.initial_fuel == 0 {
            return Err(ConfigError::NoFuel);
        }
        if !flight.move_force.is_finite() || flight.move_force <= 0.0 {
            return Err(ConfigError::InvalidMoveForce(flight.move_force));
        }
        if !flight.rotation_step_deg.is_finite() || flight.rotation_step_deg < 0.0 {
            return Err(ConfigError::InvalidRotationStep(flight.rotation_step_deg));
        }
        if !flight.max_rotation_deg.is_finite() || flight.max_rotation_deg < 0.0 {
            return Err(ConfigError::InvalidMaxRotation(flight.max_rotation_deg));
        }
        if self.sim_tick_hz == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }
}

fn parse_or<T, R>(read: &R, key: &str, expected: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    R: Fn(&str) -> Option<String>,
{
    match read(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Malformed {
            key: key.to_string(),
            expected,
            raw,
        }),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    let lowered = raw.trim().to_ascii_lowercase();
    match lowered.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
