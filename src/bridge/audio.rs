//! Sound effects - fire-and-forget playback
//!
//! The shell registers `<audio>` elements up front; playback is skipped
//! silently when an element is missing or not yet buffered, so a cold
//! asset can never stall a tick.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys::HtmlAudioElement;

use crate::game::SoundCue;

// HTMLMediaElement.readyState value for "fully buffered"
const HAVE_ENOUGH_DATA: u16 = 4;

#[derive(Default)]
struct SoundBank {
    jump: Option<HtmlAudioElement>,
    hit: Option<HtmlAudioElement>,
}

thread_local! {
    static SOUNDS: RefCell<SoundBank> = RefCell::new(SoundBank::default());
}

/// Register an effect under "jump" or "hit". Unknown names are reported
/// but otherwise ignored.
#[wasm_bindgen]
pub fn register_sound(name: &str, element: HtmlAudioElement) {
    SOUNDS.with(|bank_cell| {
        let mut bank = bank_cell.borrow_mut();
        match name {
            "jump" => bank.jump = Some(element),
            "hit" => bank.hit = Some(element),
            other => {
                web_sys::console::warn_1(&format!("Unknown sound effect '{}'", other).into());
            }
        }
    });
}

/// Play the effect for a cue, if its element is ready
pub fn play_cue(cue: SoundCue) {
    SOUNDS.with(|bank_cell| {
        let bank = bank_cell.borrow();
        let element = match cue {
            SoundCue::Jump => bank.jump.as_ref(),
            SoundCue::Hit => bank.hit.as_ref(),
        };
        let element = match element {
            Some(element) if element.ready_state() == HAVE_ENOUGH_DATA => element,
            _ => return,
        };
        // Fire and forget: the playback promise is dropped either way
        let _: Result<js_sys::Promise, JsValue> = element.play();
    });
}
