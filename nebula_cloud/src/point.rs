// Copyright 2025 the Nebula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use kurbo::Point;

/// Sentinel rank for a point before any query has been committed.
pub const UNRANKED: usize = usize::MAX;

/// One corpus item in the cloud.
///
/// Created once per corpus load. The text, depth, and seed never change;
/// the layout position is re-derived only on viewport resize; similarity and
/// rank are rewritten atomically by [`crate::PointCloud::commit_search`].
#[derive(Clone, Debug)]
pub struct CloudPoint {
    /// Raw projector output; opaque scale and orientation.
    pub(crate) raw: Point,
    /// Stable layout-space position.
    pub(crate) pos: Point,
    /// Draw-order / parallax key in `(0, 1]`; larger is nearer.
    pub(crate) depth: f64,
    /// Per-point phase for deterministic cosmetic animation.
    pub(crate) seed: u64,
    /// The last committed query's similarity score.
    pub(crate) similarity: f64,
    /// 0-based rank under the last committed query, or [`UNRANKED`].
    pub(crate) rank: usize,
    /// The corpus item's text.
    pub(crate) text: String,
}

impl CloudPoint {
    /// The raw 2D projection this point was created from.
    #[must_use]
    pub fn raw_projection(&self) -> Point {
        self.raw
    }

    /// The stable layout-space position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.pos
    }

    /// The depth key in `(0, 1]`; larger is nearer to the viewer.
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// The last committed query's similarity score for this point.
    #[must_use]
    pub fn similarity(&self) -> f64 {
        self.similarity
    }

    /// The 0-based rank under the last committed query, or [`UNRANKED`]
    /// before any query.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// The corpus item's text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
