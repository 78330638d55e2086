//! Simulation loop - orchestrates entities, collision, and score
//!
//! The world advances only while Running. Obstacle spawning stays
//! external; the shell pushes validated obstacles in and reads state out.

use super::character::{Character, CharacterConfig, SoundCue};
use super::collision::overlaps;
use super::error::ConfigError;
use super::obstacle::{Obstacle, ObstacleConfig};
use super::score::{ScoreConfig, ScoreMeter};

/// Run phase. Paused is a safe restartable stop for sensor failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Running,
    Paused,
    Over,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Ready => "READY",
            Phase::Running => "RUNNING",
            Phase::Paused => "PAUSED",
            Phase::Over => "OVER",
        }
    }
}

/// World tuning, fixed at construction
#[derive(Clone, Copy)]
pub struct WorldConfig {
    /// Horizontal scroll speed, game-world units per second
    pub scroll_speed: f32,
    pub character: CharacterConfig,
    pub score: ScoreConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            scroll_speed: 300.0,
            character: CharacterConfig::default(),
            score: ScoreConfig::default(),
        }
    }
}

pub struct World {
    canvas: (f32, f32),
    config: WorldConfig,
    character: Character,
    obstacles: Vec<Obstacle>,
    meter: ScoreMeter,
    /// Total scroll distance this run
    distance: f32,
    phase: Phase,
}

impl World {
    pub fn new(canvas: (f32, f32), config: WorldConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            canvas,
            config,
            character: Character::new(canvas, config.character)?,
            obstacles: Vec::new(),
            meter: ScoreMeter::new(config.score),
            distance: 0.0,
            phase: Phase::Ready,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn meter(&self) -> &ScoreMeter {
        &self.meter
    }

    pub fn meter_mut(&mut self) -> &mut ScoreMeter {
        &mut self.meter
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Begin the run
    pub fn start(&mut self) {
        if self.phase == Phase::Ready {
            self.phase = Phase::Running;
            self.character.start();
        }
    }

    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.phase == Phase::Paused {
            self.phase = Phase::Running;
        }
    }

    /// Back to Ready with a fresh character and an empty field.
    /// The score meter carries over so the record survives runs.
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        self.character = Character::new(self.canvas, self.config.character)?;
        self.obstacles.clear();
        self.distance = 0.0;
        self.phase = Phase::Ready;
        Ok(())
    }

    /// Push a hazard into the field. Placement is validated here, so a
    /// misconfigured spawner fails loudly instead of rendering nonsense.
    pub fn spawn_obstacle(&mut self, config: ObstacleConfig) -> Result<(), ConfigError> {
        self.obstacles.push(Obstacle::new(self.canvas, config)?);
        Ok(())
    }

    /// External jump request; the character decides whether to honor it
    pub fn on_action(&mut self) -> Option<SoundCue> {
        if self.phase != Phase::Running {
            return None;
        }
        self.character.jump(self.config.character.jump_speed)
    }

    /// Advance the simulation by one frame. Returns the hit cue when the
    /// run ends on a collision.
    pub fn tick(&mut self, delta_time: f32) -> Option<SoundCue> {
        if self.phase != Phase::Running {
            return None;
        }

        self.character.update(delta_time);
        for obstacle in &mut self.obstacles {
            obstacle.update(delta_time, self.config.scroll_speed);
        }
        self.obstacles.retain(|obstacle| !obstacle.is_off_screen());

        self.distance += self.config.scroll_speed * delta_time;
        self.meter.update(self.distance);

        let character_box = self.character.hitbox();
        let hit = self
            .obstacles
            .iter()
            .any(|obstacle| overlaps(&character_box, &obstacle.hitbox()));
        if hit {
            let cue = self.character.crash();
            self.meter.update_high_score();
            self.phase = Phase::Over;
            return Some(cue);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::character::Status;

    const CANVAS: (f32, f32) = (800.0, 400.0);

    fn world() -> World {
        World::new(CANVAS, WorldConfig::default()).unwrap()
    }

    /// Ground-anchored obstacle at the given x
    fn obstacle_at(x: f32) -> ObstacleConfig {
        ObstacleConfig { x_pos: x, ..ObstacleConfig::default() }
    }

    #[test]
    fn test_tick_is_noop_before_start() {
        let mut w = world();
        assert_eq!(w.tick(0.016), None);
        assert_eq!(w.distance(), 0.0);
        assert_eq!(w.character().status(), Status::Start);
    }

    #[test]
    fn test_score_accumulates_with_scroll_distance() {
        let mut w = world();
        w.start();
        w.tick(1.0);
        assert_eq!(w.distance(), 300.0);
        assert_eq!(w.meter().score(), 15);
    }

    #[test]
    fn test_collision_ends_run_and_commits_high_score() {
        let mut w = world();
        w.start();
        w.spawn_obstacle(obstacle_at(10.0)).unwrap();
        let cue = w.tick(0.016);
        assert_eq!(cue, Some(SoundCue::Hit));
        assert_eq!(w.phase(), Phase::Over);
        assert_eq!(w.character().status(), Status::Crash);
        assert_eq!(w.meter().highest_score(), w.meter().score());
    }

    #[test]
    fn test_no_advance_after_game_over() {
        let mut w = world();
        w.start();
        w.spawn_obstacle(obstacle_at(10.0)).unwrap();
        w.tick(0.016);
        let distance = w.distance();
        assert_eq!(w.tick(0.016), None);
        assert_eq!(w.distance(), distance);
        assert_eq!(w.on_action(), None);
    }

    #[test]
    fn test_pause_freezes_and_resume_continues() {
        let mut w = world();
        w.start();
        w.tick(0.1);
        w.pause();
        let distance = w.distance();
        assert_eq!(w.tick(0.1), None);
        assert_eq!(w.distance(), distance);
        w.resume();
        w.tick(0.1);
        assert!(w.distance() > distance);
    }

    #[test]
    fn test_far_obstacle_does_not_collide() {
        let mut w = world();
        w.start();
        w.spawn_obstacle(obstacle_at(790.0)).unwrap();
        assert_eq!(w.tick(0.016), None);
        assert_eq!(w.phase(), Phase::Running);
    }

    #[test]
    fn test_off_screen_obstacles_retire() {
        let mut w = world();
        w.start();
        // Anchored high above the character so it scrolls past untouched
        let config = ObstacleConfig {
            x_pos: 700.0,
            y_pos: Some(0.0),
            ground_height: None,
            ..ObstacleConfig::default()
        };
        w.spawn_obstacle(config).unwrap();
        // Scrolls 300 units/s; well past the left edge after 3 seconds
        for _ in 0..200 {
            w.tick(0.016);
        }
        assert!(w.obstacles().is_empty());
    }

    #[test]
    fn test_spawn_rejects_bad_config() {
        let mut w = world();
        let config = ObstacleConfig {
            y_pos: Some(100.0),
            ground_height: Some(70.0),
            ..ObstacleConfig::default()
        };
        assert!(w.spawn_obstacle(config).is_err());
    }

    #[test]
    fn test_on_action_jumps_only_while_running() {
        let mut w = world();
        assert_eq!(w.on_action(), None);
        w.start();
        // Two ticks: gravity takes hold, then the landing snap fires
        w.tick(0.5);
        w.tick(0.016);
        assert_eq!(w.character().status(), Status::Duck1);
        assert_eq!(w.on_action(), Some(SoundCue::Jump));
        assert_eq!(w.character().status(), Status::Jump);
    }

    #[test]
    fn test_reset_preserves_high_score() {
        let mut w = world();
        w.start();
        w.tick(1.0); // 300 units of distance banked before the hit
        // Tall hazard spanning both run and duck frame heights
        let config = ObstacleConfig {
            x_pos: 10.0,
            y_pos: Some(200.0),
            ground_height: None,
            ..ObstacleConfig::default()
        };
        w.spawn_obstacle(config).unwrap();
        assert_eq!(w.tick(0.016), Some(SoundCue::Hit));
        assert_eq!(w.meter().highest_score(), 15);

        w.reset().unwrap();
        assert_eq!(w.phase(), Phase::Ready);
        assert!(w.obstacles().is_empty());
        assert_eq!(w.meter().highest_score(), 15);
        assert_eq!(w.character().status(), Status::Start);
    }
}
