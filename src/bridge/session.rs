//! Game session - JS-facing lifecycle, tick, and read API
//!
//! Owns the world and the jump detector behind a thread-local cell. The
//! rendering shell drives `game_tick` once per display refresh and the
//! pose pipeline drives `process_pose` at its own cadence.

use std::cell::RefCell;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{audio, landmarks};
use crate::game::{ObstacleConfig, Phase, SoundCue, World, WorldConfig};
use crate::gesture::{mean_x, JumpDetector, PoseReading};

struct Session {
    world: Option<World>,
    detector: JumpDetector,
    pose_detected: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            world: None,
            detector: JumpDetector::default(),
            pose_detected: false,
        }
    }
}

thread_local! {
    static SESSION: RefCell<Session> = RefCell::new(Session::default());
}

fn play(cue: Option<SoundCue>) {
    if let Some(cue) = cue {
        audio::play_cue(cue);
    }
}

/// Start (or restart) a run on a canvas of the given size. The session
/// record survives restarts; only the field is rebuilt.
#[wasm_bindgen]
pub fn start_game(width: f32, height: f32) -> Result<(), JsValue> {
    SESSION.with(|session_cell| {
        let mut session = session_cell.borrow_mut();
        if let Some(world) = session.world.as_mut() {
            world.reset()?;
        } else {
            session.world = Some(World::new((width, height), WorldConfig::default())?);
        }
        if let Some(world) = session.world.as_mut() {
            world.start();
        }
        session.detector.reset();
        web_sys::console::log_1(&"✅ Game session started".into());
        Ok(())
    })
}

/// Advance the simulation; called once per display refresh
#[wasm_bindgen]
pub fn game_tick(delta_time: f32) {
    SESSION.with(|session_cell| {
        let mut session = session_cell.borrow_mut();
        if let Some(world) = session.world.as_mut() {
            play(world.tick(delta_time));
        }
    });
}

/// Jump request from the shell (key press / tap). The character decides
/// whether it is honored.
#[wasm_bindgen]
pub fn on_action() {
    SESSION.with(|session_cell| {
        let mut session = session_cell.borrow_mut();
        if let Some(world) = session.world.as_mut() {
            play(world.on_action());
        }
    });
}

/// Run the jump detector over the current landmark frame. `t_ms` is the
/// frame timestamp in milliseconds (performance.now()).
///
/// Displacement is only evaluated while the run is active; before the
/// start the frame feeds the detection indicator alone, so the first
/// in-game frame starts tracking fresh.
#[wasm_bindgen]
pub fn process_pose(t_ms: f64) {
    let frame = landmarks::current_frame();
    SESSION.with(|session_cell| {
        let mut session = session_cell.borrow_mut();
        let running = session
            .world
            .as_ref()
            .is_some_and(|world| world.phase() == Phase::Running);

        if running {
            let reading = session.detector.process(t_ms / 1000.0, frame.as_ref());
            session.pose_detected = reading != PoseReading::NotDetected;
            if reading == PoseReading::Jump {
                if let Some(world) = session.world.as_mut() {
                    play(world.on_action());
                }
            }
        } else {
            session.pose_detected = match frame.as_ref() {
                Some(frame) => session
                    .detector
                    .config()
                    .band
                    .map_or(true, |band| band.contains(mean_x(frame))),
                None => false,
            };
        }
    });
}

/// Push a ground-anchored obstacle at the given x position
#[wasm_bindgen]
pub fn spawn_obstacle(x: f32) -> Result<(), JsValue> {
    SESSION.with(|session_cell| {
        let mut session = session_cell.borrow_mut();
        if let Some(world) = session.world.as_mut() {
            let config = ObstacleConfig { x_pos: x, ..ObstacleConfig::default() };
            world.spawn_obstacle(config)?;
        }
        Ok(())
    })
}

/// Safe stop for sensor failures; `resume_game` restarts cleanly
#[wasm_bindgen]
pub fn pause_game() {
    SESSION.with(|session_cell| {
        let mut session = session_cell.borrow_mut();
        if let Some(world) = session.world.as_mut() {
            world.pause();
        }
    });
}

#[wasm_bindgen]
pub fn resume_game() {
    SESSION.with(|session_cell| {
        let mut session = session_cell.borrow_mut();
        if let Some(world) = session.world.as_mut() {
            world.resume();
        }
    });
}

/// Back to the Ready phase with a fresh field; the record is kept
#[wasm_bindgen]
pub fn reset_game() -> Result<(), JsValue> {
    SESSION.with(|session_cell| {
        let mut session = session_cell.borrow_mut();
        if let Some(world) = session.world.as_mut() {
            world.reset()?;
        }
        session.detector.reset();
        session.pose_detected = false;
        Ok(())
    })
}

/// Session teardown. The shell releases the camera; this clears every
/// sensor-derived store so nothing stale survives into the next session.
#[wasm_bindgen]
pub fn stop_game() {
    landmarks::clear_landmarks();
    SESSION.with(|session_cell| {
        let mut session = session_cell.borrow_mut();
        if let Some(world) = session.world.as_mut() {
            world.pause();
        }
        session.detector.reset();
        session.pose_detected = false;
    });
}

#[wasm_bindgen]
pub fn get_score() -> u32 {
    SESSION.with(|session_cell| {
        let session = session_cell.borrow();
        session.world.as_ref().map_or(0, |world| world.meter().score())
    })
}

#[wasm_bindgen]
pub fn get_score_display() -> String {
    SESSION.with(|session_cell| {
        let session = session_cell.borrow();
        session
            .world
            .as_ref()
            .map_or_else(|| "00000".to_string(), |world| world.meter().display())
    })
}

#[wasm_bindgen]
pub fn get_high_score() -> u32 {
    SESSION.with(|session_cell| {
        let session = session_cell.borrow();
        session
            .world
            .as_ref()
            .map_or(0, |world| world.meter().highest_score())
    })
}

/// Character state name, for sprite selection in the shell
#[wasm_bindgen]
pub fn get_status() -> String {
    SESSION.with(|session_cell| {
        let session = session_cell.borrow();
        session
            .world
            .as_ref()
            .map_or("START", |world| world.character().status().name())
            .to_string()
    })
}

/// True when a centered body is currently tracked
#[wasm_bindgen]
pub fn is_pose_detected() -> bool {
    SESSION.with(|session_cell| session_cell.borrow().pose_detected)
}

#[derive(Serialize)]
struct DebugInfo {
    phase: &'static str,
    status: &'static str,
    score: u32,
    highest_score: u32,
    obstacles: usize,
    distance: f32,
    pose_detected: bool,
    in_cooldown: bool,
}

/// Structured snapshot for the shell's debug overlay
#[wasm_bindgen]
pub fn get_debug_info() -> JsValue {
    SESSION.with(|session_cell| {
        let session = session_cell.borrow();
        let info = match session.world.as_ref() {
            Some(world) => DebugInfo {
                phase: world.phase().name(),
                status: world.character().status().name(),
                score: world.meter().score(),
                highest_score: world.meter().highest_score(),
                obstacles: world.obstacles().len(),
                distance: world.distance(),
                pose_detected: session.pose_detected,
                in_cooldown: session.detector.in_cooldown(),
            },
            None => DebugInfo {
                phase: Phase::Ready.name(),
                status: "START",
                score: 0,
                highest_score: 0,
                obstacles: 0,
                distance: 0.0,
                pose_detected: session.pose_detected,
                in_cooldown: false,
            },
        };
        serde_wasm_bindgen::to_value(&info).unwrap_or(JsValue::NULL)
    })
}
