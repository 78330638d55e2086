//! Horizontal gating band - accepts only a centered subject
//!
//! The camera may see more than one body. Averaging x over all landmarks
//! and requiring it inside a central band keeps a passer-by at the edge
//! of the frame from driving the character.

use super::frame::PoseFrame;

/// Central region of camera space in which a body counts as the player
#[derive(Clone, Copy)]
pub struct CenterBand {
    pub min_x: f32,
    pub max_x: f32,
}

impl CenterBand {
    pub fn new(min_x: f32, max_x: f32) -> Self {
        Self { min_x, max_x }
    }

    /// Strict bounds: a body sitting exactly on the edge is rejected
    pub fn contains(&self, x: f32) -> bool {
        x > self.min_x && x < self.max_x
    }
}

impl Default for CenterBand {
    fn default() -> Self {
        Self::new(0.35, 0.65)
    }
}

/// Mean x over all landmarks of a frame
pub fn mean_x(frame: &PoseFrame) -> f32 {
    let sum: f32 = frame.iter().map(|lm| lm.x).sum();
    sum / frame.len() as f32
}
