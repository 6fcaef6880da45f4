// Copyright 2025 the Nebula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use nebula_layout::RelaxParams;

/// Tunable parameters for a [`crate::PointCloud`].
///
/// The defaults are the values the visualization was tuned with; hosts
/// usually only touch `pad` and `top_k`.
#[derive(Clone, Copy, Debug)]
pub struct CloudParams {
    /// Padding fraction of the viewport reserved around the fitted layout.
    pub pad: f64,
    /// Relaxation (declutter) parameters for the layout pipeline.
    pub relax: RelaxParams,
    /// Amplitude of the static per-point jitter, in screen units.
    pub jitter: f64,
    /// Amplitude of the animated per-point drift, in screen units.
    pub drift: f64,
    /// How fast the drift wanders, in noise-lattice units per second.
    pub drift_rate: f64,
    /// Maximum pointer parallax shift for the farthest points, in screen
    /// units.
    pub parallax: f64,
    /// Visual intensity reported for every point when no query is active.
    pub neutral_intensity: f64,
    /// Exponent shaping the hit-tolerance growth with intensity.
    pub intensity_gamma: f64,
    /// Number of matches retained for [`crate::PointCloud::top_matches`].
    pub top_k: usize,
    /// Number of top matches the camera frames on a query
    /// (clamped to the corpus size).
    pub focus_count: usize,
    /// Desired on-screen cluster radius as a fraction of the smaller
    /// viewport dimension.
    pub view_radius_frac: f64,
    /// Minimum pointer hit tolerance, in screen units.
    pub hit_radius_min: f64,
    /// Hit tolerance for a full-intensity point, in screen units.
    pub hit_radius_max: f64,
}

impl Default for CloudParams {
    fn default() -> Self {
        Self {
            pad: 0.03,
            relax: RelaxParams::default(),
            jitter: 22.0,
            drift: 0.75,
            drift_rate: 0.24,
            parallax: 26.0,
            neutral_intensity: 0.22,
            intensity_gamma: 2.9,
            top_k: 25,
            focus_count: 120,
            view_radius_frac: 0.22,
            hit_radius_min: 7.0,
            hit_radius_max: 22.5,
        }
    }
}
