//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Delta-scaled stepping, driven entirely by the caller's clock samples
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use clock::Clock;
pub use collision::{aabb_overlap, player_hit, reached_goal};
pub use spawn::{maybe_spawn, spawn_interval, spawn_obstacle};
pub use state::{GamePhase, GameState, Obstacle, Player, RenderSnapshot};
pub use tick::{InputEvent, handle_input, tick};
