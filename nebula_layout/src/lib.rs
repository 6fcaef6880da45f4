// Copyright 2025 the Nebula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nebula Layout: deterministic 2D layout for projected point clouds.
//!
//! Dimensionality-reduction routines (UMAP and friends) emit 2D coordinates
//! whose orientation and scale are arbitrary and unstable across runs. This
//! crate turns such a raw projection into a stable, decluttered layout inside
//! a target rectangle:
//!
//! 1. [`align_to_principal_axis`] — rotate the point set so its principal
//!    variance axis is horizontal, removing the projector's arbitrary
//!    orientation.
//! 2. [`fit_to_rect`] — uniform, aspect-preserving scale and recenter into a
//!    padded target rectangle.
//! 3. [`relax`] — a fixed number of local pairwise repulsion passes to pull
//!    apart visually overlapping points.
//! 4. A final re-fit so padding is exact regardless of relaxation drift.
//!
//! [`layout`] runs the whole pipeline. Every stage is total and deterministic:
//! identical inputs produce identical geometry, with no randomness anywhere.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use nebula_layout::{LayoutParams, layout};
//!
//! let raw = [Point::new(0.3, -1.2), Point::new(4.1, 2.2), Point::new(-2.0, 0.4)];
//! let target = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let positions = layout(&raw, target, &LayoutParams::default());
//!
//! for p in &positions {
//!     assert!(target.contains(*p));
//! }
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod align;
mod fit;
mod relax;

pub use align::{align_to_principal_axis, principal_angle};
pub use fit::fit_to_rect;
pub use relax::{RelaxParams, relax};

use alloc::vec::Vec;
use kurbo::{Point, Rect};

/// Parameters for the full [`layout`] pipeline.
#[derive(Clone, Copy, Debug)]
pub struct LayoutParams {
    /// Fraction of the target rect reserved as padding on each axis, in
    /// `[0, 1)`. The point cloud is fitted into the rect shrunk by
    /// `(1 - pad)`.
    pub pad: f64,
    /// Relaxation parameters for the declutter passes.
    pub relax: RelaxParams,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            pad: 0.03,
            relax: RelaxParams::default(),
        }
    }
}

/// Runs the full layout pipeline on a raw projection.
///
/// Aligns the point set to its principal axis, fits it into `target` with the
/// configured padding, relaxes overlaps, and re-fits so the padded bounds are
/// exact. The input is untouched; the returned positions are in the same
/// order as `raw`.
#[must_use]
pub fn layout(raw: &[Point], target: Rect, params: &LayoutParams) -> Vec<Point> {
    let mut pts: Vec<Point> = raw.to_vec();
    align_to_principal_axis(&mut pts);
    fit_to_rect(&mut pts, target, params.pad);
    relax(&mut pts, &params.relax);
    fit_to_rect(&mut pts, target, params.pad);
    pts
}
