//! Headless radar animation: a rotating sweep plus a decaying population of
//! blips, advanced one frame at a time by an external driver.

pub mod jitter;
pub mod simulator;

pub use jitter::{FixedJitter, JitterSource, SeededJitter};
pub use simulator::{Blip, RadarSimulator, RadarState, SweepState};

use std::f64::consts::TAU;

/// Distance mapped to the outer ring.
pub const MAX_RANGE_CM: f64 = 200.0;
/// Maximum angular offset of a new blip from the sweep, in radians.
pub const JITTER_SPREAD: f64 = 0.3;
/// Sweep advance per tick, in radians.
pub const SWEEP_STEP: f64 = 0.03;
/// Per-tick alpha multiplier.
pub const ALPHA_DECAY: f64 = 0.985;
/// Blips fainter than this are dropped.
pub const ALPHA_EPSILON: f64 = 0.02;
/// Lifetime of a fresh blip, in ticks.
pub const BLIP_TTL: u32 = 240;
/// Upper bound on the live blip population.
pub const MAX_BLIPS: usize = 64;

pub(crate) fn wrap_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Linear normalization of a distance against [`MAX_RANGE_CM`], clamped to [0, 1].
pub fn normalized_radius(distance_cm: f64) -> f64 {
    if !distance_cm.is_finite() {
        return 0.0;
    }
    (distance_cm / MAX_RANGE_CM).clamp(0.0, 1.0)
}
