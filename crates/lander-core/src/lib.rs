use serde::{Deserialize, Serialize};

pub mod config;

pub const SIM_TICK_HZ: u16 = 60;

pub const SCREEN_TITLE: &str = "Lunar Lander";

// Play field geometry, in pixels.
pub const SPRITE_IMAGE_SIZE: f32 = 64.0;
pub const SPRITE_SCALING_PLAYER: f32 = 0.5;
pub const SPRITE_SCALING_TILES: f32 = 0.25;
pub const SPRITE_SIZE: f32 = SPRITE_IMAGE_SIZE * SPRITE_SCALING_PLAYER;
pub const TILE_SIZE: f32 = SPRITE_IMAGE_SIZE * SPRITE_SCALING_TILES;
pub const SCREEN_GRID_WIDTH: u16 = 25;
pub const SCREEN_GRID_HEIGHT: u16 = 20;
pub const SCREEN_WIDTH: f32 = SPRITE_SIZE * SCREEN_GRID_WIDTH as f32;
pub const SCREEN_HEIGHT: f32 = SPRITE_SIZE * SCREEN_GRID_HEIGHT as f32;
pub const SPAWN_GRID_X: u16 = 12;
pub const SPAWN_GRID_Y: u16 = 15;

/// Height subtracted from the lander's centre to get the HUD altitude.
pub const ALTITUDE_DATUM: f32 = 44.5;

// Physics tuning handed to the physics backend.
pub const GRAVITY: f32 = 10.0;
/// Fraction of velocity kept per second; 1.0 means no loss.
pub const DEFAULT_DAMPING: f32 = 1.0;
pub const PLAYER_FRICTION: f32 = 1.0;
pub const WALL_FRICTION: f32 = 0.7;
pub const PLAYER_MASS: f32 = 2.0;
pub const PLAYER_MAX_HORIZONTAL_SPEED: f32 = 450.0;
pub const PLAYER_MAX_VERTICAL_SPEED: f32 = 1600.0;

// Flight model defaults.
pub const DEFAULT_INITIAL_FUEL: u32 = 1000;
pub const MOVE_FORCE: f32 = 65.0;
pub const ROTATION_STEP_DEG: f32 = 5.0;
pub const MAX_ROTATION_DEG: f32 = 45.0;

/// Tunables of the lander flight model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightTuning {
    pub initial_fuel: u32,
    pub move_force: f32,
    pub rotation_step_deg: f32,
    pub max_rotation_deg: f32,
}

impl Default for FlightTuning {
    fn default() -> Self {
        Self {
            initial_fuel: DEFAULT_INITIAL_FUEL,
            move_force: MOVE_FORCE,
            rotation_step_deg: ROTATION_STEP_DEG,
            max_rotation_deg: MAX_ROTATION_DEG,
        }
    }
}

impl FlightTuning {
    pub fn with_initial_fuel(mut self, initial_fuel: u32) -> Self {
        self.initial_fuel = initial_fuel;
        self
    }
}

/// Centre of the spawn grid cell, in play field coordinates.
pub fn spawn_position() -> (f32, f32) {
    (
        SPRITE_SIZE * SPAWN_GRID_X as f32 + SPRITE_SIZE / 2.0,
        SPRITE_SIZE * SPAWN_GRID_Y as f32 + SPRITE_SIZE / 2.0,
    )
}
