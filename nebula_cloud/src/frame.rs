// Copyright 2025 the Nebula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use kurbo::Point;

/// Everything the presentation layer needs to draw one point this frame.
///
/// Emitted in draw order (back to front). The intensity and rank are inputs
/// to whatever styling curve the presentation layer applies; the core does
/// not mandate a curve shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    /// Index of the point in the cloud.
    pub index: usize,
    /// Final screen-space position: camera transform + parallax + wander.
    pub screen: Point,
    /// Normalized similarity in `[0, 1]`, or the neutral default when no
    /// query is active.
    pub intensity: f64,
    /// 0-based query rank, or [`crate::UNRANKED`] before any query.
    pub rank: usize,
    /// Depth key in `(0, 1]`; larger is nearer and drawn later.
    pub depth: f64,
}

/// The point under the pointer, if any.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hover {
    /// Index of the hovered point in the cloud.
    pub index: usize,
    /// The hovered point's screen-space position this frame.
    pub screen: Point,
}

/// One frame's render output: sprites in draw order plus at most one hover.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Per-point draw data, back to front.
    pub sprites: Vec<Sprite>,
    /// The frontmost point within pointer hit tolerance, if any.
    pub hover: Option<Hover>,
}
