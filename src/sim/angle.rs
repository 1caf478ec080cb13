//! Angle math on the circle
//!
//! Angles are radians and may arrive with any real value. Normalization is
//! done with repeated add/subtract of 2π rather than a single modulo, so
//! exact multiples of π and 2π land on the same side every time.

use std::f64::consts::{PI, TAU};

/// Beyond this many turns the loops are preceded by a `rem_euclid` reduction
const MAX_LOOP_TURNS: f64 = 64.0;

#[inline]
fn pre_reduce(angle: f64) -> f64 {
    if angle.abs() > MAX_LOOP_TURNS * TAU {
        angle.rem_euclid(TAU)
    } else {
        angle
    }
}

/// Normalize angle to [0, 2π)
#[inline]
pub fn normalize_tau(angle: f64) -> f64 {
    let mut angle = pre_reduce(angle);
    while angle < 0.0 {
        angle += TAU;
    }
    while angle >= TAU {
        angle -= TAU;
    }
    angle
}

/// Normalize angle to [-π, π)
#[inline]
pub fn normalize_pi(angle: f64) -> f64 {
    let mut angle = pre_reduce(angle);
    while angle >= PI {
        angle -= TAU;
    }
    while angle < -PI {
        angle += TAU;
    }
    angle
}

/// Signed shortest rotation from `b` to `a`, in [-π, π].
///
/// Both angles are first brought into [0, 2π). If that difference is already
/// the short way round it is returned as-is; otherwise both are moved into
/// [-π, π) so the difference crosses the 0/2π seam instead.
///
/// Returns NaN if either input is not finite.
pub fn diff_angle(a: f64, b: f64) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return f64::NAN;
    }

    let a = normalize_tau(a);
    let b = normalize_tau(b);
    let diff = a - b;
    if diff.abs() <= PI {
        return diff;
    }

    normalize_pi(a) - normalize_pi(b)
}
