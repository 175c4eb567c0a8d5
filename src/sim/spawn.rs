//! Vehicle spawning
//!
//! The sole source of difficulty scaling: higher levels shorten the spawn
//! interval and raise vehicle speed. Lane geometry, player speed, and
//! collision boxes never change.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Obstacle;
use crate::consts::*;

/// Seconds between spawns at the given level
///
/// Level is unsigned, so the divisor stays at or above one.
pub fn spawn_interval(level: u32) -> f32 {
    SPAWN_BASE_INTERVAL / (1.0 + level as f32 * 0.2)
}

/// Accumulate `dt` into the spawn timer; produce one vehicle when it fills
pub fn maybe_spawn(timer: &mut f32, dt: f32, level: u32, rng: &mut Pcg32) -> Option<Obstacle> {
    *timer += dt;
    if *timer >= spawn_interval(level) {
        *timer = 0.0;
        Some(spawn_obstacle(level, rng))
    } else {
        None
    }
}

/// Build one vehicle just off-screen on the side opposite its travel
pub fn spawn_obstacle(level: u32, rng: &mut Pcg32) -> Obstacle {
    let lane = rng.random_range(0..LANE_COUNT / 2) * 2 + 1;
    let moves_right = rng.random::<bool>();

    let magnitude = 1.0 + level as f32 * 0.5;
    let (x, speed) = if moves_right {
        (-SPAWN_MARGIN, magnitude)
    } else {
        (WINDOW_WIDTH + SPAWN_MARGIN, -magnitude)
    };

    Obstacle {
        x,
        lane,
        speed,
        width: rng.random_range(OBSTACLE_MIN_WIDTH..OBSTACLE_MAX_WIDTH),
        height: LANE_HEIGHT * OBSTACLE_HEIGHT_FRAC,
        moves_right,
        active: true,
        color: CAR_BODY_COLORS[rng.random_range(0..CAR_BODY_COLORS.len())],
    }
}
