//! Frame clock
//!
//! Turns animation-frame timestamps into the elapsed seconds a `Tick`
//! carries. Long frames are clamped so one slow frame can't take a huge
//! integration step.

use crate::consts::MAX_FRAME_DT;

#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Timestamp of the previous frame (milliseconds)
    last_ms: Option<f64>,
    /// Longest elapsed time reported (seconds)
    max_dt: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DT)
    }
}

impl FrameClock {
    pub fn new(max_dt: f64) -> Self {
        Self { last_ms: None, max_dt }
    }

    /// Seconds since the previous frame, in [0, max_dt].
    ///
    /// The first frame reports 0. A timestamp earlier than the previous one
    /// also reports 0.
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        let dt = match self.last_ms {
            Some(last) => (0.001 * (now_ms - last)).clamp(0.0, self.max_dt),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt
    }
}
