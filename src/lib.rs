//! Runner Web - pose-controlled side-scrolling runner, game core
//!
//! Entry point for the WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! The rendering shell, webcam plumbing, and pose estimation live in
//! JavaScript; this crate owns the simulation and the gesture-to-jump
//! translation.

mod bridge;
pub mod game;
pub mod gesture;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    clear_landmarks, game_tick, get_debug_info, get_high_score, get_score, get_score_display,
    get_status, is_pose_detected, on_action, pause_game, process_pose, register_sound, reset_game,
    resume_game, spawn_obstacle, start_game, stop_game, update_landmarks,
};

/// Called automatically when the WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
