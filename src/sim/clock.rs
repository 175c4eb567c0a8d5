//! Delta-time sampling
//!
//! The driver owns the wall clock; the simulation only ever sees deltas.

use serde::{Deserialize, Serialize};

/// Turns a stream of timestamps into per-tick delta times.
///
/// The first sample yields zero so nothing teleports on startup, and a
/// non-monotonic host clock yields zero rather than a negative delta.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Clock {
    last_sample: Option<f64>,
}

impl Clock {
    pub fn new() -> Self {
        Self { last_sample: None }
    }

    /// Feed a timestamp in seconds, get the clamped delta since the previous one
    pub fn delta_seconds(&mut self, now: f64) -> f32 {
        let dt = match self.last_sample {
            Some(last) => (now - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last_sample = Some(now);
        dt
    }
}
