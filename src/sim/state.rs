//! Wheel state and screen geometry
//!
//! `WheelState` is a plain value: every transition builds a new one.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::WHEEL_SCREEN_FRACTION;

/// Display dimensions supplied by the platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub width: f64,
    pub height: f64,
}

impl Screen {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Edge length of the (square) wheel image
    #[inline]
    pub fn wheel_dim(&self) -> f64 {
        WHEEL_SCREEN_FRACTION * self.width.min(self.height)
    }

    /// Rotation center, which is the screen center
    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(0.5 * self.width, 0.5 * self.height)
    }
}

/// Complete wheel state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelState {
    /// Accumulated rotation (degrees, never wrapped)
    pub rot: f64,
    /// Angular velocity (degrees/sec, sign is direction)
    pub avel: f64,
    /// Wheel width (cached layout)
    pub w: f64,
    /// Wheel height (cached layout)
    pub h: f64,
}

impl WheelState {
    /// Copy of this state with a different angular velocity
    #[inline]
    pub fn with_avel(&self, avel: f64) -> Self {
        Self { avel, ..*self }
    }

    /// Whether the wheel has come to a complete stop
    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.avel == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_dim_uses_smaller_side() {
        let screen = Screen::new(375.0, 667.0);
        assert!((screen.wheel_dim() - 300.0).abs() < 1e-9);
        assert_eq!(screen.center(), DVec2::new(187.5, 333.5));
    }

    #[test]
    fn test_with_avel_keeps_other_fields() {
        let state = WheelState { rot: 12.0, avel: 3.0, w: 1.0, h: 2.0 };
        let next = state.with_avel(-7.0);
        assert_eq!(next, WheelState { rot: 12.0, avel: -7.0, w: 1.0, h: 2.0 });
        assert_eq!(state.avel, 3.0);
    }
}
