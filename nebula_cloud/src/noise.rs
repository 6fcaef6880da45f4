// Copyright 2025 the Nebula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic hash noise for cosmetic point animation.
//!
//! Everything here is a pure function of its arguments, so renders are
//! reproducible and testable: the same `(seed, salt, time)` always yields the
//! same wander. The mixer is splitmix64; good enough statistically for visual
//! jitter and cheap enough to call per point per frame.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// splitmix64 finalizer: one round of the standard constants.
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// A splitmix64 stream for batch attribute assignment (depth, per-point seed).
#[derive(Clone, Debug)]
pub(crate) struct SplitMix64(u64);

impl SplitMix64 {
    pub(crate) fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    pub(crate) fn next_f64(&mut self) -> f64 {
        // 53 high bits into the mantissa range.
        (self.next_u64() >> 11) as f64 * (1.0 / (1_u64 << 53) as f64)
    }
}

/// Hashes `(seed, salt)` to a uniform value in `[0, 1)`.
///
/// Used for per-point static jitter; `salt` decorrelates the axes.
#[must_use]
pub fn hash01(seed: u64, salt: u32) -> f64 {
    let x = seed ^ u64::from(salt).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    (splitmix64(x) >> 11) as f64 * (1.0 / (1_u64 << 53) as f64)
}

/// Smooth 1D value noise in `[0, 1)` keyed on `(seed, salt, t)`.
///
/// Hashes the integer lattice around `t` and blends with a smoothstep, giving
/// a continuous, slowly wandering value as `t` advances. Distinct salts give
/// independent channels for the x and y axes.
#[must_use]
pub fn value_noise(seed: u64, salt: u32, t: f64) -> f64 {
    let floor = t.floor();
    let frac = t - floor;
    // Offset so negative lattice coordinates stay distinct after the cast.
    let lattice = (floor as i64).wrapping_add(0x4000_0000) as u64;

    let base = seed ^ u64::from(salt).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let a = (splitmix64(base ^ lattice.wrapping_mul(0xD6E8_FEB8_6659_FD93)) >> 11) as f64
        * (1.0 / (1_u64 << 53) as f64);
    let b = (splitmix64(base ^ (lattice + 1).wrapping_mul(0xD6E8_FEB8_6659_FD93)) >> 11) as f64
        * (1.0 / (1_u64 << 53) as f64);

    let smooth = frac * frac * (3.0 - 2.0 * frac);
    a + (b - a) * smooth
}
