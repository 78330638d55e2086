//! Game module - character physics, obstacles, collision, score, loop
//!
//! Re-exports only. All logic in submodules.

mod character;
mod collision;
mod entity;
mod error;
mod obstacle;
mod score;
mod world;

pub use character::{Character, CharacterConfig, SoundCue, Status};
pub use collision::overlaps;
pub use entity::{Entity, HitboxShrink, Rect};
pub use error::ConfigError;
pub use obstacle::{Obstacle, ObstacleConfig};
pub use score::{ScoreConfig, ScoreMeter};
pub use world::{Phase, World, WorldConfig};
