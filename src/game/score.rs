//! Distance meter - score, high score, overflow clamp
//!
//! Score is a fixed ratio of scroll distance. The digit cap is a hard
//! ceiling: once reached, the stored score itself stays clamped.

/// Score tuning
#[derive(Clone, Copy)]
pub struct ScoreConfig {
    /// Distance units per score point
    pub ratio: f32,
    /// Maximum digits the display can show
    pub max_digits: u32,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            ratio: 0.05,
            max_digits: 5,
        }
    }
}

pub struct ScoreMeter {
    config: ScoreConfig,
    score: u32,
    highest_score: u32,
}

impl ScoreMeter {
    pub fn new(config: ScoreConfig) -> Self {
        Self {
            config,
            score: 0,
            highest_score: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn highest_score(&self) -> u32 {
        self.highest_score
    }

    /// Largest value the display can hold
    fn cap(&self) -> u32 {
        10u32.pow(self.config.max_digits) - 1
    }

    /// Recompute the score from total scroll distance
    pub fn update(&mut self, distance: f32) {
        let score = (distance * self.config.ratio).floor() as u32;
        self.score = score.min(self.cap());
    }

    /// Commit the current score if it beats the record
    pub fn update_high_score(&mut self) {
        if self.score > self.highest_score {
            self.highest_score = self.score;
        }
    }

    /// Zero-padded display string, always `max_digits` wide
    pub fn display(&self) -> String {
        format!("{:0width$}", self.score, width = self.config.max_digits as usize)
    }

    pub fn high_score_display(&self) -> String {
        format!("{:0width$}", self.highest_score, width = self.config.max_digits as usize)
    }

    /// Clears only the record, not the running score
    pub fn reset(&mut self) {
        self.highest_score = 0;
    }
}

impl Default for ScoreMeter {
    fn default() -> Self {
        Self::new(ScoreConfig::default())
    }
}
