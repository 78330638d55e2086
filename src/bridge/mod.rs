//! Bridge module - JS <-> Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod audio;
mod landmarks;
mod session;

pub use audio::register_sound;
pub use landmarks::{clear_landmarks, update_landmarks};
pub use session::{
    game_tick, get_debug_info, get_high_score, get_score, get_score_display, get_status,
    is_pose_detected, on_action, pause_game, process_pose, reset_game, resume_game, spawn_obstacle,
    start_game, stop_game,
};
