// Copyright 2025 the Nebula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Local pairwise repulsion to declutter dense projection regions.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use alloc::vec;
use alloc::vec::Vec;
use kurbo::{Point, Vec2};

/// Pairs closer than this are treated as coincident and skipped: there is no
/// defined direction to push them apart along.
const MIN_DIST_SQ: f64 = 1e-12;

/// Parameters for [`relax`].
#[derive(Clone, Copy, Debug)]
pub struct RelaxParams {
    /// Number of full passes. A fixed budget, not a convergence check:
    /// under- or over-relaxation is an accepted bounded-cost approximation.
    pub iters: u32,
    /// Interaction radius in layout units; only pairs closer than this
    /// repel each other.
    pub radius: f64,
    /// Displacement scale applied to each pass's accumulated forces.
    pub strength: f64,
}

impl Default for RelaxParams {
    fn default() -> Self {
        Self {
            iters: 22,
            radius: 28.0,
            strength: 0.06,
        }
    }
}

/// Pushes overlapping points apart over a fixed number of passes.
///
/// For every unordered pair within `radius` of each other, a repulsive
/// displacement along the connecting unit vector, proportional to
/// `(radius - d) / radius` and scaled by `strength`, is applied to both
/// points in opposite directions. Displacements for a pass are accumulated
/// into a scratch buffer and applied simultaneously after the pass, so the
/// result does not depend on iteration order. Pairwise forces are equal and
/// opposite, so the centroid never moves.
///
/// Cost is `O(iters * n^2)`, acceptable at the corpus sizes this targets
/// (hundreds of points).
pub fn relax(points: &mut [Point], params: &RelaxParams) {
    if points.len() < 2 || params.iters == 0 {
        return;
    }
    let radius_sq = params.radius * params.radius;
    let mut forces: Vec<Vec2> = vec![Vec2::ZERO; points.len()];

    for _ in 0..params.iters {
        for f in forces.iter_mut() {
            *f = Vec2::ZERO;
        }
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let d = points[i] - points[j];
                let d_sq = d.hypot2();
                if d_sq <= MIN_DIST_SQ || d_sq >= radius_sq {
                    continue;
                }
                let dist = d_sq.sqrt();
                let push = (params.radius - dist) / params.radius;
                let f = d * (push / dist);
                forces[i] += f;
                forces[j] -= f;
            }
        }
        for (p, f) in points.iter_mut().zip(&forces) {
            *p += *f * params.strength;
        }
    }
}
