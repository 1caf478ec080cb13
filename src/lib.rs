//! Spin Wheel - a touch-spun wheel toy
//!
//! Core modules:
//! - `sim`: Deterministic wheel physics (angle math, events, reducer, frame clock)
//! - `store`: Serialized event queue that folds events into the wheel state
//! - `settings`: Screen and run configuration
//! - `error`: Boundary validation and configuration errors

pub mod error;
pub mod settings;
pub mod sim;
pub mod store;

pub use error::{InputError, SettingsError};
pub use settings::Settings;
pub use store::{Raised, Store};

use glam::DVec2;

/// Wheel configuration constants
pub mod consts {
    /// Angular velocity the wheel starts with (degrees/sec)
    pub const START_AVEL: f64 = 150.0;
    /// Wheel size as a fraction of the smaller screen dimension
    pub const WHEEL_SCREEN_FRACTION: f64 = 0.8;

    /// Damping target as a fraction of the current velocity
    pub const DAMPING_RATIO: f64 = 0.5;
    /// Damping targets below this magnitude snap to zero (degrees/sec)
    pub const AVEL_FLOOR: f64 = 5.0;
    /// Velocities below this magnitude lock to zero once the target is zero
    pub const REST_EPSILON: f64 = 0.01;

    /// Base angular velocity of a triggered spin (degrees/sec)
    pub const SPIN_BASE: f64 = 1000.0;
    /// Upper bound (exclusive) of the random jitter added to a spin
    pub const SPIN_JITTER: f64 = 100.0;

    /// Torque gain applied to a touch at half the screen width from center
    pub const TOUCH_TORQUE_GAIN: f64 = 600.0;

    /// Longest frame the clock reports (seconds)
    pub const MAX_FRAME_DT: f64 = 0.05;
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: DVec2) -> (f64, f64) {
    (pos.length(), pos.y.atan2(pos.x))
}
