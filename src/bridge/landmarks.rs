//! Landmark storage and JS bridge
//!
//! Receives MediaPipe pose landmarks from JavaScript and stores them
//! for the jump detector to read. One frame at a time; the newest frame
//! simply replaces the previous one.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::gesture::{Landmark, PoseFrame, POSE_LANDMARK_COUNT};

/// Flat values per frame: 33 landmarks x (x, y, z)
const FRAME_FLOATS: usize = POSE_LANDMARK_COUNT * 3;

/// Internal storage for the current frame's landmarks
struct FrameStore {
    landmarks: PoseFrame,
    has_data: bool,
}

impl Default for FrameStore {
    fn default() -> Self {
        Self {
            landmarks: [Landmark::default(); POSE_LANDMARK_COUNT],
            has_data: false,
        }
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static FRAME: RefCell<FrameStore> = RefCell::new(FrameStore::default());
}

/// Called from JavaScript with a flat Float32Array of 99 values
/// (33 landmarks x 3 coordinates: x, y, z)
#[wasm_bindgen]
pub fn update_landmarks(data: &[f32]) {
    if data.len() != FRAME_FLOATS {
        web_sys::console::warn_1(
            &format!(
                "Invalid landmark data length: {} (expected {})",
                data.len(),
                FRAME_FLOATS
            )
            .into(),
        );
        return;
    }

    FRAME.with(|store_cell| {
        let mut store = store_cell.borrow_mut();
        for i in 0..POSE_LANDMARK_COUNT {
            store.landmarks[i] = Landmark {
                x: data[i * 3],
                y: data[i * 3 + 1],
                z: data[i * 3 + 2],
            };
        }
        store.has_data = true;
    });
}

/// Called from JavaScript when the estimator found no body this frame
#[wasm_bindgen]
pub fn clear_landmarks() {
    FRAME.with(|store_cell| {
        store_cell.borrow_mut().has_data = false;
    });
}

/// Get the current frame (for the detector)
pub fn current_frame() -> Option<PoseFrame> {
    FRAME.with(|store_cell| {
        let store = store_cell.borrow();
        if store.has_data {
            Some(store.landmarks)
        } else {
            None
        }
    })
}
