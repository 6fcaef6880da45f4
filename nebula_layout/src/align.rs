// Copyright 2025 the Nebula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orientation normalization via principal component analysis.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

/// Returns the angle of the point set's principal variance axis, in radians.
///
/// Computed as `0.5 * atan2(2 * cov_xy, cov_xx - cov_yy)` from the 2x2
/// covariance of the points about their mean. With fewer than 2 points there
/// is no defined variance axis and the angle is `0.0`.
#[must_use]
pub fn principal_angle(points: &[Point]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    let n = points.len() as f64;
    let mut mean = Vec2::ZERO;
    for p in points {
        mean += p.to_vec2();
    }
    mean /= n;

    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for p in points {
        let d = p.to_vec2() - mean;
        sxx += d.x * d.x;
        syy += d.y * d.y;
        sxy += d.x * d.y;
    }
    sxx /= n;
    syy /= n;
    sxy /= n;

    0.5 * (2.0 * sxy).atan2(sxx - syy)
}

/// Rotates the point set about its mean so the principal axis is horizontal.
///
/// The projector's output orientation is arbitrary and unstable across runs;
/// aligning to the principal axis makes the layout reproducible regardless.
/// Applying this twice is idempotent up to numerical tolerance. With fewer
/// than 2 points this is the identity.
pub fn align_to_principal_axis(points: &mut [Point]) {
    if points.len() < 2 {
        return;
    }
    let theta = principal_angle(points);

    let n = points.len() as f64;
    let mut mean = Vec2::ZERO;
    for p in points.iter() {
        mean += p.to_vec2();
    }
    mean /= n;

    let ct = (-theta).cos();
    let st = (-theta).sin();
    for p in points.iter_mut() {
        let d = p.to_vec2() - mean;
        *p = (mean + Vec2::new(d.x * ct - d.y * st, d.x * st + d.y * ct)).to_point();
    }
}
