//! Error types for the boundary around the reducer
//!
//! The reducer itself is total; these errors come from validating events
//! before they enter the queue and from loading settings.

use thiserror::Error;

/// An event rejected before it reaches the reducer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("tick elapsed time must be finite and non-negative, got {0}")]
    InvalidElapsed(f64),
    #[error("touch field `{field}` must be finite, got {value}")]
    NonFiniteTouch { field: &'static str, value: f64 },
}

/// Settings that could not be loaded or are out of range
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("screen dimensions must be positive, got {width}x{height}")]
    InvalidScreen { width: f64, height: f64 },
    #[error("max frame dt must be positive, got {0}")]
    InvalidFrameClamp(f64),
    #[error("fps must be positive")]
    InvalidFps,
}
