//! Deterministic wheel simulation
//!
//! All wheel physics lives here. This module must be pure and deterministic:
//! - Every transition returns a new state value
//! - Randomness only through a caller-supplied RNG
//! - No rendering, clock or platform dependencies

pub mod angle;
pub mod clock;
pub mod event;
pub mod reduce;
pub mod state;

pub use angle::{diff_angle, normalize_pi, normalize_tau};
pub use clock::FrameClock;
pub use event::Event;
pub use reduce::{reduce, spin, start, tick, touch};
pub use state::{Screen, WheelState};
