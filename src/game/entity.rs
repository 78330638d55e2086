//! Shared entity record - position, sprite footprint, hitbox math
//!
//! Character and obstacle compose this record instead of inheriting it.
//! The hitbox is always derived on demand because the sprite footprint
//! follows the current animation frame.

use super::error::ConfigError;

/// Axis-aligned rectangle in game-world units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Hitbox shrink ratios relative to the sprite bounding box
///
/// Shrinking below the visible sprite keeps near-misses from registering
/// as hits. Ratios are fractions of the sprite's natural size.
#[derive(Clone, Copy)]
pub struct HitboxShrink {
    /// Hitbox width as a fraction of sprite width
    pub width: f32,
    /// Hitbox height as a fraction of sprite height
    pub height: f32,
    /// Left inset as a fraction of sprite width
    pub offset_x: f32,
    /// Top inset as a fraction of sprite height
    pub offset_y: f32,
}

impl HitboxShrink {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit = 0.0..=1.0;
        if !unit.contains(&self.width) {
            return Err(ConfigError::ShrinkOutOfRange("width"));
        }
        if !unit.contains(&self.height) {
            return Err(ConfigError::ShrinkOutOfRange("height"));
        }
        if !unit.contains(&self.offset_x) {
            return Err(ConfigError::ShrinkOutOfRange("offset_x"));
        }
        if !unit.contains(&self.offset_y) {
            return Err(ConfigError::ShrinkOutOfRange("offset_y"));
        }
        Ok(())
    }
}

/// Position and footprint shared by every drawable game object
#[derive(Clone, Copy)]
pub struct Entity {
    pub x_pos: f32,
    pub y_pos: f32,
    /// Natural size of the current animation frame
    pub sprite: (f32, f32),
    /// Canvas size, for ground and off-screen bounds math
    pub canvas: (f32, f32),
    pub shrink: HitboxShrink,
}

impl Entity {
    /// Derive the reduced collision rectangle for the current frame
    pub fn hitbox(&self) -> Rect {
        let (w, h) = self.sprite;
        Rect {
            x: self.x_pos + w * self.shrink.offset_x,
            y: self.y_pos + h * self.shrink.offset_y,
            width: w * self.shrink.width,
            height: h * self.shrink.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hitbox_shrinks_and_offsets() {
        let entity = Entity {
            x_pos: 10.0,
            y_pos: 20.0,
            sprite: (100.0, 50.0),
            canvas: (800.0, 400.0),
            shrink: HitboxShrink {
                width: 0.6,
                height: 0.7,
                offset_x: 0.2,
                offset_y: 0.15,
            },
        };
        let hitbox = entity.hitbox();
        assert_eq!(hitbox, Rect { x: 30.0, y: 27.5, width: 60.0, height: 35.0 });
    }

    #[test]
    fn test_shrink_ratio_out_of_range_rejected() {
        let shrink = HitboxShrink { width: 1.2, height: 0.7, offset_x: 0.2, offset_y: 0.15 };
        assert_eq!(shrink.validate(), Err(ConfigError::ShrinkOutOfRange("width")));

        let shrink = HitboxShrink { width: 0.6, height: 0.7, offset_x: -0.1, offset_y: 0.15 };
        assert_eq!(shrink.validate(), Err(ConfigError::ShrinkOutOfRange("offset_x")));
    }
}
