//! Session state and core simulation types
//!
//! Everything the driver needs to replay a run deterministically lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{lane_band, player_start};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title/menu screen, waiting for a start input
    StartScreen,
    /// Active gameplay
    Playing,
    /// Goal lane reached, waiting for a next-level input
    LevelComplete,
    /// Run ended by a collision
    GameOver,
}

/// A vehicle occupying one road lane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge in window coordinates; off-screen values are normal near spawn and retire
    pub x: f32,
    /// Road lane index; odd, never changes after creation
    pub lane: usize,
    /// Signed horizontal speed in per-frame units (see `SPEED_SCALE`)
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    /// Redundant with the speed sign, kept for clarity
    pub moves_right: bool,
    /// Cleared once past the exit margin; purged the same tick
    pub active: bool,
    /// Body color from `CAR_BODY_COLORS` (cosmetic)
    pub color: [f32; 3],
}

impl Obstacle {
    /// Advance along the lane; speeds are per-frame at 60 Hz
    pub fn advance(&mut self, dt: f32) {
        self.x += self.speed * dt * SPEED_SCALE;
    }

    /// True once fully past the opposite edge plus the retire margin
    pub fn past_exit(&self) -> bool {
        if self.moves_right {
            self.x > WINDOW_WIDTH + DESPAWN_MARGIN
        } else {
            self.x < -DESPAWN_MARGIN - self.width
        }
    }

    /// Collision box as (min_x, min_y, max_x, max_y)
    ///
    /// The vertical extent is the whole lane band; the drawn body is shorter
    /// but the hitbox is not.
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        let (bottom, top) = lane_band(self.lane);
        (self.x, bottom, self.x + self.width, top)
    }
}

/// The player-controlled character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Center of the bounding square in window coordinates
    pub pos: Vec2,
}

impl Default for Player {
    fn default() -> Self {
        Self { pos: player_start() }
    }
}

impl Player {
    /// Apply one directional hop, clamped so the bounding box stays on screen
    pub fn hop(&mut self, dx: f32, dy: f32) {
        let half = PLAYER_SIZE / 2.0;
        self.pos.x = (self.pos.x + dx).clamp(half, WINDOW_WIDTH - half);
        self.pos.y = (self.pos.y + dy).clamp(half, WINDOW_HEIGHT - half);
    }

    /// Bounding square as (min_x, min_y, max_x, max_y)
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        let half = PLAYER_SIZE / 2.0;
        (
            self.pos.x - half,
            self.pos.y - half,
            self.pos.x + half,
            self.pos.y + half,
        )
    }
}

/// Complete session state (deterministic)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawner RNG; the only source of randomness in the simulation
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Current level, 1-based
    pub level: u32,
    /// Cumulative score
    pub score: u64,
    /// Seconds accumulated toward the next spawn
    pub spawn_timer: f32,
    /// Player character
    pub player: Player,
    /// Live vehicles, dense; retired entries are purged every tick
    pub obstacles: Vec<Obstacle>,
    /// Set by a Quit input; the driver owns process teardown
    pub quit_requested: bool,
}

impl GameState {
    /// Create a session on the start screen with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::StartScreen,
            level: 1,
            score: 0,
            spawn_timer: 0.0,
            player: Player::default(),
            obstacles: Vec::new(),
            quit_requested: false,
        }
    }

    /// Reset the field for a fresh level: player home, no traffic, timer zeroed
    pub fn reset_level(&mut self) {
        self.player = Player::default();
        self.obstacles.clear();
        self.spawn_timer = 0.0;
    }

    /// Begin a brand-new run from the start or game-over screen
    pub fn start_run(&mut self) {
        self.level = 1;
        self.score = 0;
        self.reset_level();
        self.phase = GamePhase::Playing;
    }

    /// Read-only view handed to the renderer each frame
    pub fn snapshot(&self) -> RenderSnapshot<'_> {
        RenderSnapshot {
            phase: self.phase,
            level: self.level,
            score: self.score,
            player: self.player.pos,
            obstacles: &self.obstacles,
        }
    }
}

/// What the renderer is allowed to see
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot<'a> {
    pub phase: GamePhase,
    pub level: u32,
    pub score: u64,
    pub player: Vec2,
    pub obstacles: &'a [Obstacle],
}
