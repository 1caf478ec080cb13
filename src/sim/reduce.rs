//! Wheel state machine
//!
//! Folds one event into the wheel state. Every transition is total and
//! pure apart from the caller-supplied RNG used by `spin`.

use glam::DVec2;
use rand::Rng;

use super::angle::diff_angle;
use super::event::Event;
use super::state::{Screen, WheelState};
use crate::cartesian_to_polar;
use crate::consts::*;

/// Produce the next state from `prior` and `event`.
///
/// `Start` is the only event that runs without a prior state. Any other event
/// arriving first yields the `Start` baseline and is otherwise dropped.
pub fn reduce<R: Rng>(
    prior: Option<&WheelState>,
    event: &Event,
    screen: &Screen,
    rng: &mut R,
) -> WheelState {
    let state = match (prior, event) {
        (_, Event::Start) => return start(screen),
        (None, _) => {
            log::warn!("{} before START, starting wheel instead", event.kind());
            return start(screen);
        }
        (Some(state), _) => state,
    };

    match *event {
        Event::Tick { dt } => tick(state, dt),
        Event::Touch {
            move_x,
            move_y,
            vx,
            vy,
        } => touch(state, screen, move_x, move_y, vx, vy),
        Event::Spin => spin(state, rng),
        _ => *state,
    }
}

/// Fresh wheel sized to the screen, already turning slowly
pub fn start(screen: &Screen) -> WheelState {
    let dim = screen.wheel_dim();
    WheelState {
        rot: 0.0,
        avel: START_AVEL,
        w: dim,
        h: dim,
    }
}

/// Advance by `dt` seconds.
///
/// Velocity takes one Euler step toward half its value (zero once that target
/// drops under the floor). Rotation integrates the velocity from before the
/// step.
pub fn tick(state: &WheelState, dt: f64) -> WheelState {
    let mut target = state.avel * DAMPING_RATIO;
    if target.abs() < AVEL_FLOOR {
        target = 0.0;
    }

    let mut avel = state.avel + (target - state.avel) * dt;
    if target == 0.0 && dt > 0.0 && avel.abs() < REST_EPSILON {
        avel = 0.0;
    }

    WheelState {
        avel,
        rot: state.rot + state.avel * dt,
        ..*state
    }
}

/// Replace the velocity with the torque of a touch gesture.
///
/// Only the tangential part of the gesture velocity turns the wheel, and the
/// lever arm grows with the distance from the center.
pub fn touch(
    state: &WheelState,
    screen: &Screen,
    move_x: f64,
    move_y: f64,
    vx: f64,
    vy: f64,
) -> WheelState {
    let to_touch = DVec2::new(move_x, move_y) - screen.center();
    let (distance, angle_center_to_touch) = cartesian_to_polar(to_touch);
    let (speed, angle_touch_velocity) = cartesian_to_polar(DVec2::new(vx, vy));

    let torque = TOUCH_TORQUE_GAIN * distance / (0.5 * screen.width);
    let avel = diff_angle(angle_touch_velocity, angle_center_to_touch).sin() * speed * torque;
    log::debug!(
        "touch at r={:.1}: speed={:.3} torque={:.3} -> avel={:.3}",
        distance,
        speed,
        torque,
        avel
    );

    state.with_avel(avel)
}

/// Strong spin with a little randomness so repeated spins differ
pub fn spin<R: Rng>(state: &WheelState, rng: &mut R) -> WheelState {
    let avel = SPIN_BASE + rng.random_range(0.0..SPIN_JITTER);
    log::debug!("spin -> avel={:.3}", avel);
    state.with_avel(avel)
}
