//! Construction-time configuration errors
//!
//! Bad configuration fails at construction, never silently.

use wasm_bindgen::JsValue;

/// Errors raised while validating an entity configuration
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A fixed y position and a ground offset were both supplied
    DualVerticalAnchor,
    /// A hitbox shrink ratio fell outside [0, 1]
    ShrinkOutOfRange(&'static str),
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::DualVerticalAnchor => {
                JsValue::from_str("options 'y_pos' and 'ground_height' exist simultaneously")
            }
            ConfigError::ShrinkOutOfRange(field) => {
                JsValue::from_str(&format!("hitbox shrink '{}' must be within [0, 1]", field))
            }
        }
    }
}
