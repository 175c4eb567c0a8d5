//! Lane Leap - a lane-crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, session state)
//! - `renderer`: WebGPU rendering pipeline
//!
//! The simulation is pure and platform-free: the driver feeds it discrete
//! input events and clock samples, and reads back a render snapshot each
//! frame. Nothing in `sim` touches the window, the GPU, or wall-clock time.

pub mod renderer;
pub mod sim;

pub use sim::{GameState, InputEvent};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Logical window size in pixels
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Number of horizontal lanes; odd indices are roads, even indices grass
    pub const LANE_COUNT: usize = 5;
    /// Height of one lane band
    pub const LANE_HEIGHT: f32 = WINDOW_HEIGHT / LANE_COUNT as f32;

    /// Side of the player's square bounding box
    pub const PLAYER_SIZE: f32 = 50.0;
    /// Horizontal hop distance (one lane height on every axis)
    pub const PLAYER_STEP: f32 = LANE_HEIGHT;

    /// Seconds between spawns before level scaling is applied
    pub const SPAWN_BASE_INTERVAL: f32 = 2.0;
    /// How far beyond the window edge vehicles are created
    pub const SPAWN_MARGIN: f32 = 150.0;
    /// How far beyond the opposite edge vehicles are retired
    pub const DESPAWN_MARGIN: f32 = 200.0;

    /// Vehicle speeds are stated per-frame at 60 Hz; this rescales them to per-second
    pub const SPEED_SCALE: f32 = 60.0;

    /// Vehicle width range in pixels
    pub const OBSTACLE_MIN_WIDTH: f32 = 120.0;
    pub const OBSTACLE_MAX_WIDTH: f32 = 180.0;
    /// Vehicle height as a fraction of the lane band
    pub const OBSTACLE_HEIGHT_FRAC: f32 = 0.7;

    /// Vehicle body palette (cosmetic only)
    pub const CAR_BODY_COLORS: [[f32; 3]; 5] = [
        [0.9, 0.2, 0.2],
        [0.2, 0.4, 0.8],
        [0.1, 0.7, 0.1],
        [0.9, 0.7, 0.1],
        [0.8, 0.3, 0.8],
    ];
}

/// Whether a lane index carries traffic (odd) rather than grass (even)
#[inline]
pub fn is_road_lane(lane: usize) -> bool {
    lane % 2 == 1
}

/// Vertical extent of a lane band as (bottom, top)
#[inline]
pub fn lane_band(lane: usize) -> (f32, f32) {
    let bottom = lane as f32 * consts::LANE_HEIGHT;
    (bottom, bottom + consts::LANE_HEIGHT)
}

/// Center y of a lane band
#[inline]
pub fn lane_center(lane: usize) -> f32 {
    lane as f32 * consts::LANE_HEIGHT + consts::LANE_HEIGHT / 2.0
}

/// Where the player stands at the start of every level: bottom-center grass
#[inline]
pub fn player_start() -> Vec2 {
    Vec2::new(consts::WINDOW_WIDTH / 2.0, consts::LANE_HEIGHT / 2.0)
}
