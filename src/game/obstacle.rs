//! Scrolling hazard
//!
//! Obstacles only move horizontally, at the world scroll speed. Vertical
//! placement comes from either a fixed y position or a ground offset,
//! never both.

use super::entity::{Entity, HitboxShrink, Rect};
use super::error::ConfigError;

/// Obstacle placement and hitbox tuning
#[derive(Clone, Copy)]
pub struct ObstacleConfig {
    /// Spawn x, normally just past the right canvas edge
    pub x_pos: f32,
    /// Fixed vertical position; mutually exclusive with `ground_height`
    pub y_pos: Option<f32>,
    /// Distance from canvas bottom to the ground line
    pub ground_height: Option<f32>,
    /// Natural sprite size
    pub sprite: (f32, f32),
    pub shrink: HitboxShrink,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            x_pos: 0.0,
            y_pos: None,
            ground_height: Some(70.0),
            sprite: (34.0, 70.0),
            shrink: HitboxShrink {
                width: 0.6,
                height: 0.7,
                offset_x: 0.2,
                offset_y: 0.15,
            },
        }
    }
}

pub struct Obstacle {
    entity: Entity,
}

impl Obstacle {
    pub fn new(canvas: (f32, f32), config: ObstacleConfig) -> Result<Self, ConfigError> {
        if config.y_pos.is_some() && config.ground_height.is_some() {
            return Err(ConfigError::DualVerticalAnchor);
        }
        config.shrink.validate()?;
        let y_pos = match config.y_pos {
            Some(y) => y,
            None => canvas.1 - config.sprite.1 - config.ground_height.unwrap_or(0.0),
        };
        Ok(Self {
            entity: Entity {
                x_pos: config.x_pos,
                y_pos,
                sprite: config.sprite,
                canvas,
                shrink: config.shrink,
            },
        })
    }

    pub fn x_pos(&self) -> f32 {
        self.entity.x_pos
    }

    pub fn y_pos(&self) -> f32 {
        self.entity.y_pos
    }

    pub fn hitbox(&self) -> Rect {
        self.entity.hitbox()
    }

    /// Fully past the left canvas edge, ready to retire
    pub fn is_off_screen(&self) -> bool {
        self.entity.x_pos + self.entity.sprite.0 < 0.0
    }

    /// Scroll left at the world speed
    pub fn update(&mut self, delta_time: f32, speed: f32) {
        self.entity.x_pos -= speed * delta_time;
    }
}
