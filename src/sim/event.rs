//! Events folded into the wheel state
//!
//! The wire form is a JSON object tagged by `type`, using the kind strings
//! the input sources emit (`START`, `TICK`, `TOUCH`, `SPIN`). Any other kind
//! decodes to [`Event::Other`], which the reducer treats as a no-op.

use serde::{Deserialize, Serialize};

use crate::error::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Event {
    /// Initial event, builds the wheel from the screen size
    Start,
    /// One animation frame
    Tick {
        /// Seconds since the previous frame
        #[serde(alias = "elapsedSeconds")]
        dt: f64,
    },
    /// Pan gesture sample: touch position and gesture velocity (screen space)
    Touch {
        #[serde(rename = "moveX")]
        move_x: f64,
        #[serde(rename = "moveY")]
        move_y: f64,
        vx: f64,
        vy: f64,
    },
    /// Programmatic strong spin (deep-link trigger)
    Spin,
    /// Unrecognized event kind
    #[serde(other)]
    Other,
}

impl Event {
    /// Event kind as emitted on the wire
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Start => "START",
            Event::Tick { .. } => "TICK",
            Event::Touch { .. } => "TOUCH",
            Event::Spin => "SPIN",
            Event::Other => "OTHER",
        }
    }

    /// Check the numeric payload before the event enters the queue.
    ///
    /// The reducer assumes well-formed numbers and would carry NaN or
    /// infinity straight into the wheel state.
    pub fn validate(&self) -> Result<(), InputError> {
        match *self {
            Event::Tick { dt } => {
                if !dt.is_finite() || dt < 0.0 {
                    return Err(InputError::InvalidElapsed(dt));
                }
            }
            Event::Touch {
                move_x,
                move_y,
                vx,
                vy,
            } => {
                let fields = [("moveX", move_x), ("moveY", move_y), ("vx", vx), ("vy", vy)];
                for (field, value) in fields {
                    if !value.is_finite() {
                        return Err(InputError::NonFiniteTouch { field, value });
                    }
                }
            }
            Event::Start | Event::Spin | Event::Other => {}
        }
        Ok(())
    }
}
