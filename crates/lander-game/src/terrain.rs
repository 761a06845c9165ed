use bevy::prelude::*;
use lander_core::{ALTITUDE_DATUM, SCREEN_WIDTH, SPRITE_SIZE, TILE_SIZE};

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerrainKind {
    Crash,
    Pad,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainSegment {
    pub kind: TerrainKind,
    pub x_min: f32,
    pub x_max: f32,
    pub top: f32,
}

impl TerrainSegment {
    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    /// Centre of the block that fills the segment from y = 0 up to `top`.
    pub fn center(&self) -> Vec2 {
        Vec2::new((self.x_min + self.x_max) / 2.0, self.top / 2.0)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.top)
    }
}

/// Ground top that puts a resting lander at altitude zero.
pub const GROUND_TOP: f32 = ALTITUDE_DATUM - SPRITE_SIZE / 2.0;

const PAD_START_TILE: u16 = 34;
const PAD_TILES: u16 = 8;
const RIDGE_START_TILE: u16 = 44;
const RIDGE_TILES_HIGH: u16 = 2;

/// Flat plain, one landing pad, and a ridge to the east.
pub fn default_terrain() -> Vec<TerrainSegment> {
    let pad_start = TILE_SIZE * f32::from(PAD_START_TILE);
    let pad_end = pad_start + TILE_SIZE * f32::from(PAD_TILES);
    let ridge_start = TILE_SIZE * f32::from(RIDGE_START_TILE);

    vec![
        TerrainSegment {
            kind: TerrainKind::Crash,
            x_min: 0.0,
            x_max: pad_start,
            top: GROUND_TOP,
        },
        TerrainSegment {
            kind: TerrainKind::Pad,
            x_min: pad_start,
            x_max: pad_end,
            top: GROUND_TOP,
        },
        TerrainSegment {
            kind: TerrainKind::Crash,
            x_min: pad_end,
            x_max: ridge_start,
            top: GROUND_TOP,
        },
        TerrainSegment {
            kind: TerrainKind::Crash,
            x_min: ridge_start,
            x_max: SCREEN_WIDTH,
            top: GROUND_TOP + TILE_SIZE * f32::from(RIDGE_TILES_HIGH),
        },
    ]
}
