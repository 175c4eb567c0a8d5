//! Collision and goal detection
//!
//! Pure axis-aligned box tests, evaluated by the tick after vehicle motion.
//! Overlap is strict on both axes: boxes that merely share an edge do not
//! collide.

use super::state::{Obstacle, Player};
use crate::consts::*;

/// Strict AABB overlap between two (min_x, min_y, max_x, max_y) boxes
#[inline]
pub fn aabb_overlap(a: (f32, f32, f32, f32), b: (f32, f32, f32, f32)) -> bool {
    a.2 > b.0 && a.0 < b.2 && a.3 > b.1 && a.1 < b.3
}

/// True if the player's square overlaps any active vehicle's lane-band box
pub fn player_hit(player: &Player, obstacles: &[Obstacle]) -> bool {
    let player_box = player.bounds();
    obstacles
        .iter()
        .filter(|car| car.active)
        .any(|car| aabb_overlap(player_box, car.bounds()))
}

/// True once the player's box reaches the far edge of the lane field
pub fn reached_goal(player: &Player) -> bool {
    player.pos.y >= WINDOW_HEIGHT - PLAYER_SIZE
}
