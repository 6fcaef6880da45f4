// Copyright 2025 the Nebula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aspect-preserving fitting of a point set into a target rectangle.

use kurbo::{Point, Rect};

/// Extent floor guarding against coincident points.
const MIN_EXTENT: f64 = 1e-9;

/// Uniformly scales and recenters the point set into `target`.
///
/// The target rectangle is first shrunk by `(1 - pad)` on both axes; the
/// point set's bounding box is then scaled by
/// `min(target_w / box_w, target_h / box_h)` and its center moved onto the
/// rect center. Aspect ratio is preserved, so relative structure is never
/// distorted; the non-limiting axis ends up with extra margin.
///
/// A zero-extent bounding box (coincident points) is floored to a small
/// epsilon, collapsing everything onto the rect center rather than dividing
/// by zero. Empty input is a no-op.
pub fn fit_to_rect(points: &mut [Point], target: Rect, pad: f64) {
    if points.is_empty() {
        return;
    }

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in points.iter() {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    let w = (max_x - min_x).max(MIN_EXTENT);
    let h = (max_y - min_y).max(MIN_EXTENT);

    let target_w = target.width() * (1.0 - pad);
    let target_h = target.height() * (1.0 - pad);
    let scale = (target_w / w).min(target_h / h);

    let box_cx = (min_x + max_x) * 0.5;
    let box_cy = (min_y + max_y) * 0.5;
    let center = target.center();

    for p in points.iter_mut() {
        p.x = center.x + (p.x - box_cx) * scale;
        p.y = center.y + (p.y - box_cy) * scale;
    }
}
