//! Gesture module - translates noisy pose frames into jump commands
//!
//! Re-exports only. All logic in submodules.

mod frame;
mod gating;
mod jump_detector;

pub use frame::{Landmark, PoseFrame, LEFT_ANKLE, LEFT_HIP, POSE_LANDMARK_COUNT, RIGHT_ANKLE, RIGHT_HIP};
pub use gating::{mean_x, CenterBand};
pub use jump_detector::{JumpDetector, JumpDetectorConfig, PoseReading, TrackedPair};
