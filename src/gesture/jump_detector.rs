//! Jump detection from vertical landmark displacement
//!
//! Single-pole rise detector with a cooldown: a tracked point moving up
//! faster than the threshold between two frames emits one jump command,
//! then the detector stays quiet for the cooldown window so one physical
//! jump cannot fire twice.

use super::frame::{PoseFrame, LEFT_ANKLE, LEFT_HIP, RIGHT_ANKLE, RIGHT_HIP};
use super::gating::{mean_x, CenterBand};

/// Which landmark pair the detector tracks
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackedPair {
    Hips,
    Ankles,
}

impl TrackedPair {
    fn indices(&self) -> (usize, usize) {
        match self {
            TrackedPair::Hips => (LEFT_HIP, RIGHT_HIP),
            TrackedPair::Ankles => (LEFT_ANKLE, RIGHT_ANKLE),
        }
    }
}

/// Outcome of processing one sensor frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoseReading {
    /// No body in frame, or the body is outside the gating band
    NotDetected,
    /// Body tracked, no jump this frame
    Tracked,
    /// Rise exceeded the threshold - emit one jump command
    Jump,
}

/// Detector tuning. Threshold and cooldown are data, not code paths.
#[derive(Clone, Copy)]
pub struct JumpDetectorConfig {
    pub pair: TrackedPair,
    /// Minimum upward displacement between frames (normalized units)
    pub rise_threshold: f32,
    /// Quiet window after an accepted jump, in seconds
    pub cooldown_secs: f64,
    /// Horizontal gate; None disables gating
    pub band: Option<CenterBand>,
}

impl JumpDetectorConfig {
    /// Hip tracking with center gating - the shipped configuration
    pub fn hip_gated() -> Self {
        Self {
            pair: TrackedPair::Hips,
            rise_threshold: 0.02,
            cooldown_secs: 0.6,
            band: Some(CenterBand::default()),
        }
    }

    /// Ankle tracking, no gating, higher threshold
    pub fn ankle_free() -> Self {
        Self {
            pair: TrackedPair::Ankles,
            rise_threshold: 0.08,
            cooldown_secs: 0.6,
            band: None,
        }
    }
}

impl Default for JumpDetectorConfig {
    fn default() -> Self {
        Self::hip_gated()
    }
}

/// Debounced gesture-to-action translator
pub struct JumpDetector {
    config: JumpDetectorConfig,
    /// Last tracked vertical position; None until the first good frame
    previous_y: Option<f32>,
    is_jumping: bool,
    /// Frame timestamp at which the active cooldown started
    cooldown_started_at: Option<f64>,
}

impl JumpDetector {
    pub fn new(config: JumpDetectorConfig) -> Self {
        Self {
            config,
            previous_y: None,
            is_jumping: false,
            cooldown_started_at: None,
        }
    }

    pub fn config(&self) -> &JumpDetectorConfig {
        &self.config
    }

    /// True while the post-jump quiet window is open
    pub fn in_cooldown(&self) -> bool {
        self.cooldown_started_at.is_some()
    }

    /// Process one sensor frame. `t` is the frame timestamp in seconds,
    /// `frame` is None when no body was detected.
    ///
    /// previous_y only advances on frames that pass detection and
    /// gating; a dropout does not poison the next displacement.
    pub fn process(&mut self, t: f64, frame: Option<&PoseFrame>) -> PoseReading {
        // Expire the cooldown first so a frame arriving after the window
        // is evaluated normally. Both flags clear together.
        if let Some(started) = self.cooldown_started_at {
            if t - started >= self.config.cooldown_secs {
                self.cooldown_started_at = None;
                self.is_jumping = false;
            }
        }

        let frame = match frame {
            Some(frame) => frame,
            None => return PoseReading::NotDetected,
        };

        if let Some(band) = self.config.band {
            if !band.contains(mean_x(frame)) {
                return PoseReading::NotDetected;
            }
        }

        let (a, b) = self.config.pair.indices();
        let current_y = (frame[a].y + frame[b].y) / 2.0;

        let mut reading = PoseReading::Tracked;
        if let Some(previous_y) = self.previous_y {
            if self.cooldown_started_at.is_none() {
                // Image-space y grows downward, so a rise is a positive delta
                let rise = previous_y - current_y;
                if rise > self.config.rise_threshold && !self.is_jumping {
                    self.is_jumping = true;
                    self.cooldown_started_at = Some(t);
                    reading = PoseReading::Jump;
                }
            }
        }

        self.previous_y = Some(current_y);
        reading
    }

    /// Clear all state (session start)
    pub fn reset(&mut self) {
        self.previous_y = None;
        self.is_jumping = false;
        self.cooldown_started_at = None;
    }
}

impl Default for JumpDetector {
    fn default() -> Self {
        Self::new(JumpDetectorConfig::default())
    }
}
