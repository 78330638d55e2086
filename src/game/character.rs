//! Player character - jump physics and run/duck animation machine
//!
//! The animation cycle runs on its own timer so the visual cadence stays
//! independent of the jump arc. Physics is a plain Euler step with
//! constant gravity.

use super::entity::{Entity, HitboxShrink, Rect};
use super::error::ConfigError;

/// Animation/physics states
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Start,
    Jump,
    Duck1,
    Run1,
    Duck2,
    Run2,
    Crash,
}

impl Status {
    pub fn name(&self) -> &'static str {
        match self {
            Status::Start => "START",
            Status::Jump => "JUMP",
            Status::Duck1 => "DUCK_1",
            Status::Run1 => "RUN_1",
            Status::Duck2 => "DUCK_2",
            Status::Run2 => "RUN_2",
            Status::Crash => "CRASH",
        }
    }
}

/// Sound effects the character can request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Jump,
    Hit,
}

/// Character tuning, fixed at construction
#[derive(Clone, Copy)]
pub struct CharacterConfig {
    /// Seconds between run/duck animation steps
    pub duck_interval: f32,
    /// Resting horizontal position after the opening slide
    pub x_pos: f32,
    /// Distance from canvas bottom to the ground line
    pub ground_height: f32,
    /// Constant downward deceleration applied to the jump velocity
    pub gravity: f32,
    /// Upward velocity granted by a jump
    pub jump_speed: f32,
    /// Horizontal speed of the opening slide into position
    pub approach_speed: f32,
    /// Natural sprite size for Start/Jump/Run frames
    pub run_sprite: (f32, f32),
    /// Natural sprite size for Duck frames
    pub duck_sprite: (f32, f32),
    /// Natural sprite size for the Crash frame
    pub crash_sprite: (f32, f32),
    pub shrink: HitboxShrink,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            duck_interval: 0.1,
            x_pos: 100.0,
            ground_height: 70.0,
            gravity: 1000.0,
            jump_speed: 550.0,
            approach_speed: 70.0,
            run_sprite: (88.0, 94.0),
            duck_sprite: (110.0, 60.0),
            crash_sprite: (88.0, 94.0),
            shrink: HitboxShrink {
                width: 0.2,
                height: 0.3,
                offset_x: 0.2,
                offset_y: 0.15,
            },
        }
    }
}

/// The player entity
pub struct Character {
    entity: Entity,
    config: CharacterConfig,
    status: Status,
    jump_velocity: f32,
    /// Hard floor; y_pos never ends a tick below it
    ground_y: f32,
    duck_time: f32,
}

impl Character {
    pub fn new(canvas: (f32, f32), config: CharacterConfig) -> Result<Self, ConfigError> {
        config.shrink.validate()?;
        let ground_y = canvas.1 - config.run_sprite.1 - config.ground_height;
        Ok(Self {
            entity: Entity {
                x_pos: 0.0,
                y_pos: ground_y,
                sprite: config.run_sprite,
                canvas,
                shrink: config.shrink,
            },
            config,
            status: Status::Start,
            jump_velocity: 0.0,
            ground_y,
            duck_time: 0.0,
        })
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn x_pos(&self) -> f32 {
        self.entity.x_pos
    }

    pub fn y_pos(&self) -> f32 {
        self.entity.y_pos
    }

    pub fn ground_y(&self) -> f32 {
        self.ground_y
    }

    pub fn jump_velocity(&self) -> f32 {
        self.jump_velocity
    }

    pub fn config(&self) -> &CharacterConfig {
        &self.config
    }

    /// Natural size of the frame shown for the current state
    fn sprite_size(&self) -> (f32, f32) {
        match self.status {
            Status::Start | Status::Jump | Status::Run1 | Status::Run2 => self.config.run_sprite,
            Status::Duck1 | Status::Duck2 => self.config.duck_sprite,
            Status::Crash => self.config.crash_sprite,
        }
    }

    /// Collision rectangle for the current animation frame
    pub fn hitbox(&self) -> Rect {
        Entity {
            sprite: self.sprite_size(),
            ..self.entity
        }
        .hitbox()
    }

    /// Drop the character into the run cycle through the landing path
    pub fn start(&mut self) {
        self.status = Status::Jump;
    }

    /// Request a jump. Ignored mid-air and after a crash.
    pub fn jump(&mut self, speed: f32) -> Option<SoundCue> {
        if self.status == Status::Jump || self.status == Status::Crash {
            return None;
        }
        self.status = Status::Jump;
        self.jump_velocity = speed;
        Some(SoundCue::Jump)
    }

    /// Obstacle hit: terminal state with a forced falling velocity
    pub fn crash(&mut self) -> SoundCue {
        self.status = Status::Crash;
        self.jump_velocity = -self.jump_velocity.abs();
        SoundCue::Hit
    }

    /// Advance one frame
    pub fn update(&mut self, delta_time: f32) {
        // Opening slide toward the resting position, once per session
        if self.status != Status::Jump && self.entity.x_pos < self.config.x_pos {
            self.entity.x_pos += self.config.approach_speed * delta_time;
            if self.entity.x_pos > self.config.x_pos {
                self.entity.x_pos = self.config.x_pos;
            }
        }

        // Jump arc: Euler step, constant gravity
        if self.status == Status::Jump {
            self.entity.y_pos -= self.jump_velocity * delta_time;
            self.jump_velocity -= self.config.gravity * delta_time;
        }

        // Landing: the only way back from Jump into the run cycle
        if self.entity.y_pos > self.ground_y {
            self.entity.y_pos = self.ground_y;
            self.jump_velocity = 0.0;
            self.status = Status::Duck1;
            self.duck_time = 0.0;
        }

        // Animation cycle, decoupled from the physics above
        self.duck_time += delta_time;
        if self.duck_time > self.config.duck_interval {
            self.switch_duck();
            self.duck_time = 0.0;
        }
    }

    fn switch_duck(&mut self) {
        self.status = match self.status {
            Status::Duck1 => Status::Run1,
            Status::Run1 => Status::Duck2,
            Status::Duck2 => Status::Run2,
            Status::Run2 => Status::Duck1,
            // Not in the cycle; the timer still resets
            Status::Start | Status::Jump | Status::Crash => self.status,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: (f32, f32) = (800.0, 400.0);

    fn character() -> Character {
        Character::new(CANVAS, CharacterConfig::default()).unwrap()
    }

    /// Run the character through a full jump until it lands
    fn jump_and_land(character: &mut Character) {
        character.jump(character.config().jump_speed);
        for _ in 0..200 {
            character.update(0.016);
            if character.status() != Status::Jump {
                return;
            }
        }
        panic!("character never landed");
    }

    #[test]
    fn test_ground_y_derivation() {
        let c = character();
        assert_eq!(c.ground_y(), 400.0 - 94.0 - 70.0);
        assert_eq!(c.y_pos(), c.ground_y());
    }

    #[test]
    fn test_y_never_exceeds_ground_after_tick() {
        let mut c = character();
        c.jump(550.0);
        for _ in 0..500 {
            c.update(0.016);
            assert!(c.y_pos() <= c.ground_y());
        }
    }

    #[test]
    fn test_jump_while_jumping_is_ignored() {
        let mut c = character();
        c.jump(550.0);
        c.update(0.016);
        let velocity = c.jump_velocity();
        assert_eq!(c.jump(550.0), None);
        assert_eq!(c.jump_velocity(), velocity);
        assert_eq!(c.status(), Status::Jump);
    }

    #[test]
    fn test_jump_after_crash_is_ignored() {
        let mut c = character();
        c.crash();
        assert_eq!(c.jump(550.0), None);
        assert_eq!(c.status(), Status::Crash);
    }

    #[test]
    fn test_jump_from_ground_emits_cue() {
        let mut c = character();
        assert_eq!(c.jump(550.0), Some(SoundCue::Jump));
        assert_eq!(c.status(), Status::Jump);
        assert_eq!(c.jump_velocity(), 550.0);
    }

    #[test]
    fn test_crash_forces_falling_velocity() {
        let mut c = character();
        c.jump(550.0);
        assert_eq!(c.crash(), SoundCue::Hit);
        assert_eq!(c.status(), Status::Crash);
        assert_eq!(c.jump_velocity(), -550.0);
    }

    #[test]
    fn test_landing_enters_duck_cycle() {
        let mut c = character();
        jump_and_land(&mut c);
        assert_eq!(c.status(), Status::Duck1);
        assert_eq!(c.y_pos(), c.ground_y());
        assert_eq!(c.jump_velocity(), 0.0);
    }

    #[test]
    fn test_duck_cycle_order() {
        let mut c = character();
        jump_and_land(&mut c);
        let mut seen = vec![c.status()];
        // Cross the interval four times, one step per crossing
        for _ in 0..4 {
            c.update(0.11);
            seen.push(c.status());
        }
        assert_eq!(
            seen,
            vec![Status::Duck1, Status::Run1, Status::Duck2, Status::Run2, Status::Duck1]
        );
    }

    #[test]
    fn test_duck_cycle_waits_for_interval() {
        let mut c = character();
        jump_and_land(&mut c);
        c.update(0.05);
        assert_eq!(c.status(), Status::Duck1);
        c.update(0.06); // crosses 0.1s
        assert_eq!(c.status(), Status::Run1);
    }

    #[test]
    fn test_opening_slide_clamps_at_resting_position() {
        let mut c = character();
        assert_eq!(c.x_pos(), 0.0);
        for _ in 0..200 {
            c.update(0.016);
        }
        assert_eq!(c.x_pos(), c.config().x_pos);
    }

    #[test]
    fn test_hitbox_follows_animation_frame() {
        let mut c = character();
        let run_box = c.hitbox();
        jump_and_land(&mut c);
        // Duck frames use a different natural size
        let duck_box = c.hitbox();
        assert_eq!(run_box.width, 88.0 * 0.2);
        assert_eq!(duck_box.width, 110.0 * 0.2);
    }

    #[test]
    fn test_bad_shrink_rejected_at_construction() {
        let config = CharacterConfig {
            shrink: HitboxShrink { width: 2.0, height: 0.3, offset_x: 0.2, offset_y: 0.15 },
            ..CharacterConfig::default()
        };
        assert!(Character::new(CANVAS, config).is_err());
    }
}
