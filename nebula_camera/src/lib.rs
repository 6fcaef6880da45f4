// Copyright 2025 the Nebula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nebula Camera: smoothed pan/zoom state for a 2D point cloud.
//!
//! [`Camera`] holds a current and a target value for both zoom and focus and
//! converges the current values toward the targets with fixed-fraction
//! exponential decay on every [`Camera::tick`]. There is no velocity state:
//! any retarget simply overwrites the target and the interpolation takes over,
//! so motion is always smooth and always overridable.
//!
//! Retargeting comes in three flavors:
//! - [`Camera::retarget_on_matches`] frames the cluster of top query matches,
//!   zooming proportionally to how tightly it clusters.
//! - [`Camera::reset_to_overview`] returns to the baseline zoom over the whole
//!   cloud (initial load, resize).
//! - [`Camera::apply_zoom_delta`] nudges the zoom target from wheel/pinch
//!   input.
//!
//! The camera defines no loop of its own; the host drives `tick` once per
//! display frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use nebula_camera::Camera;
//!
//! let mut cam = Camera::new();
//! cam.reset_to_overview(Point::new(400.0, 300.0));
//! cam.snap_to_target();
//!
//! // Frame two matches clustered around (10, 20).
//! let matches = [(Point::new(5.0, 20.0), 1.0), (Point::new(15.0, 20.0), 1.0)];
//! cam.retarget_on_matches(&matches, 50.0);
//!
//! // 60 Hz frames converge toward the target.
//! for _ in 0..120 {
//!     cam.tick(1.0 / 60.0);
//! }
//! assert!((cam.focus().x - 10.0).abs() < 1e-3);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

/// Exponent applied to normalized similarity when weighting the focus
/// centroid. Strongly favors the best matches.
const FOCUS_WEIGHT_POWER: f64 = 3.2;

/// Tiny weight floor so the centroid is defined even when every normalized
/// similarity is zero.
const WEIGHT_FLOOR: f64 = 1e-4;

/// Spread floor guarding the zoom ratio against a degenerate (single-point)
/// cluster.
const MIN_SPREAD: f64 = 1e-6;

/// The reference tick rate for smoothing: at `1/60` s per tick, one tick
/// moves exactly `smoothing` of the remaining distance.
const REFERENCE_HZ: f64 = 60.0;

/// A pan/zoom camera with exponentially smoothed target tracking.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    zoom: f64,
    zoom_target: f64,
    focus: Point,
    focus_target: Point,
    min_zoom: f64,
    max_zoom: f64,
    smoothing: f64,
    zoom_delta_sensitivity: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// The default fraction of the remaining distance covered per 60 Hz tick.
    pub const DEFAULT_SMOOTHING: f64 = 0.12;
    /// The default minimum zoom factor (the overview baseline).
    pub const DEFAULT_MIN_ZOOM: f64 = 1.0;
    /// The default maximum zoom factor.
    pub const DEFAULT_MAX_ZOOM: f64 = 2.8;
    /// The default wheel/pinch sensitivity for [`Camera::apply_zoom_delta`].
    pub const DEFAULT_ZOOM_DELTA_SENSITIVITY: f64 = 0.0016;

    /// Creates a camera at the origin with baseline zoom and default bounds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            zoom_target: 1.0,
            focus: Point::ZERO,
            focus_target: Point::ZERO,
            min_zoom: Self::DEFAULT_MIN_ZOOM,
            max_zoom: Self::DEFAULT_MAX_ZOOM,
            smoothing: Self::DEFAULT_SMOOTHING,
            zoom_delta_sensitivity: Self::DEFAULT_ZOOM_DELTA_SENSITIVITY,
        }
    }

    /// The current (smoothed) zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// The zoom factor being converged toward.
    #[must_use]
    pub fn zoom_target(&self) -> f64 {
        self.zoom_target
    }

    /// The current (smoothed) focus in layout space.
    #[must_use]
    pub fn focus(&self) -> Point {
        self.focus
    }

    /// The focus being converged toward.
    #[must_use]
    pub fn focus_target(&self) -> Point {
        self.focus_target
    }

    /// Sets the minimum and maximum zoom factors.
    ///
    /// The provided range is normalized so that `min_zoom <= max_zoom`; the
    /// current target is re-clamped into the new range.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom_target = self.zoom_target.clamp(min_zoom, max_zoom);
    }

    /// Sets the per-60 Hz-tick smoothing fraction, clamped to `(0, 1]`.
    pub fn set_smoothing(&mut self, smoothing: f64) {
        self.smoothing = smoothing.clamp(f64::MIN_POSITIVE, 1.0);
    }

    /// Advances the smoothed state by `dt` seconds.
    ///
    /// Both zoom and each focus axis move a fixed fraction of the remaining
    /// distance toward their targets. The fraction is referenced to 60 Hz
    /// (`alpha = 1 - (1 - smoothing)^(dt * 60)`), so convergence speed is
    /// independent of the host's frame rate. Non-positive `dt` is a no-op.
    pub fn tick(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }
        let alpha = 1.0 - (1.0 - self.smoothing).powf(dt * REFERENCE_HZ);
        self.zoom += (self.zoom_target - self.zoom) * alpha;
        self.focus = self.focus.lerp(self.focus_target, alpha);
    }

    /// Retargets to frame a cluster of query matches.
    ///
    /// `matches` holds the top-M matches as `(layout position, normalized
    /// similarity in [0, 1])`, best first. Each entry is weighted by
    /// `max(0, similarity)^3.2`, strongly favoring the best matches; the
    /// weighted centroid becomes the focus target. The unweighted mean
    /// distance of the same entries to that centroid is the cluster spread,
    /// and the zoom target becomes `view_radius / spread`, clamped to the
    /// zoom bounds — so the view frames the cluster proportionally to how
    /// tightly it clusters. An empty slice is a no-op.
    pub fn retarget_on_matches(&mut self, matches: &[(Point, f64)], view_radius: f64) {
        if matches.is_empty() {
            return;
        }

        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        let mut sum_w = 0.0;
        for &(pos, similarity) in matches {
            let w = similarity.max(0.0).powf(FOCUS_WEIGHT_POWER) + WEIGHT_FLOOR;
            sum_x += pos.x * w;
            sum_y += pos.y * w;
            sum_w += w;
        }
        let centroid = Point::new(sum_x / sum_w, sum_y / sum_w);

        let mut spread = 0.0;
        for &(pos, _) in matches {
            spread += pos.distance(centroid);
        }
        spread /= matches.len() as f64;

        self.zoom_target =
            (view_radius / spread.max(MIN_SPREAD)).clamp(self.min_zoom, self.max_zoom);
        self.focus_target = centroid;
    }

    /// Retargets to the baseline overview: zoom 1, focus on `centroid`.
    ///
    /// Used on initial load and on viewport resize; `centroid` is expected to
    /// be the unweighted centroid of all points.
    pub fn reset_to_overview(&mut self, centroid: Point) {
        self.zoom_target = 1.0_f64.clamp(self.min_zoom, self.max_zoom);
        self.focus_target = centroid;
    }

    /// Jumps the current state onto the target, skipping the interpolation.
    ///
    /// Used after load/resize retargets where animating from the stale state
    /// would be meaningless.
    pub fn snap_to_target(&mut self) {
        self.zoom = self.zoom_target;
        self.focus = self.focus_target;
    }

    /// Adjusts the zoom target from a wheel/pinch delta.
    ///
    /// The target is multiplied by `2^(-delta * sensitivity)` and clamped to
    /// the zoom bounds; the focus target is untouched. Any finite delta is
    /// accepted — out-of-range input saturates at the bounds rather than
    /// erroring.
    pub fn apply_zoom_delta(&mut self, delta: f64) {
        let factor = 2.0_f64.powf(-delta * self.zoom_delta_sensitivity);
        self.zoom_target = (self.zoom_target * factor).clamp(self.min_zoom, self.max_zoom);
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::Camera;

    const DT: f64 = 1.0 / 60.0;

    #[test]
    fn tick_converges_monotonically() {
        let mut cam = Camera::new();
        cam.set_zoom_limits(1.0, 10.0);
        cam.retarget_on_matches(&[(Point::new(100.0, 50.0), 1.0)], 10.0);

        let mut prev_gap = (cam.zoom_target() - cam.zoom()).abs();
        let mut prev_focus_gap = cam.focus().distance(cam.focus_target());
        for _ in 0..200 {
            cam.tick(DT);
            let gap = (cam.zoom_target() - cam.zoom()).abs();
            let focus_gap = cam.focus().distance(cam.focus_target());
            assert!(gap <= prev_gap + 1e-12, "zoom gap must not grow");
            assert!(focus_gap <= prev_focus_gap + 1e-12, "focus gap must not grow");
            prev_gap = gap;
            prev_focus_gap = focus_gap;
        }
    }

    #[test]
    fn tick_reaches_epsilon_within_predicted_frames() {
        // With fixed fraction L per tick, the remaining gap after n ticks is
        // (1 - L)^n, so it drops below eps after ceil(ln eps / ln(1 - L)).
        let mut cam = Camera::new();
        cam.set_zoom_limits(1.0, 10.0);
        cam.retarget_on_matches(&[(Point::new(1.0, 0.0), 1.0)], 10.0);

        let eps: f64 = 1e-3;
        let initial_gap = (cam.zoom_target() - cam.zoom()).abs();
        let l = Camera::DEFAULT_SMOOTHING;
        let frames = (eps.ln() / (1.0 - l).ln()).ceil() as u32;
        for _ in 0..frames {
            cam.tick(DT);
        }
        let gap = (cam.zoom_target() - cam.zoom()).abs();
        assert!(
            gap <= initial_gap * eps * (1.0 + 1e-9),
            "gap {gap} should be within eps after {frames} frames"
        );
    }

    #[test]
    fn scenario_retarget_frames_cluster() {
        // Two equal-weight matches symmetric about (10, 20), each 5 away:
        // weighted centroid (10, 20), spread 5, view radius 50 -> zoom 10.
        let mut cam = Camera::new();
        cam.set_zoom_limits(1.0, 20.0);
        let matches = [(Point::new(5.0, 20.0), 1.0), (Point::new(15.0, 20.0), 1.0)];
        cam.retarget_on_matches(&matches, 50.0);

        assert!((cam.zoom_target() - 10.0).abs() < 1e-9);
        assert_eq!(cam.focus_target(), Point::new(10.0, 20.0));
    }

    #[test]
    fn retarget_zoom_is_clamped_to_bounds() {
        let mut cam = Camera::new();
        // Default bounds are [1.0, 2.8]; the raw ratio here is 10.
        let matches = [(Point::new(5.0, 20.0), 1.0), (Point::new(15.0, 20.0), 1.0)];
        cam.retarget_on_matches(&matches, 50.0);
        assert!((cam.zoom_target() - Camera::DEFAULT_MAX_ZOOM).abs() < 1e-9);
    }

    #[test]
    fn retarget_favors_high_similarity() {
        let mut cam = Camera::new();
        let matches = [
            (Point::new(0.0, 0.0), 1.0),
            (Point::new(100.0, 0.0), 0.1),
        ];
        cam.retarget_on_matches(&matches, 50.0);
        // The strong match dominates the centroid.
        assert!(cam.focus_target().x < 10.0);
    }

    #[test]
    fn degenerate_cluster_does_not_blow_up_zoom() {
        let mut cam = Camera::new();
        cam.set_zoom_limits(1.0, 1e12);
        let matches = [(Point::new(3.0, 3.0), 1.0), (Point::new(3.0, 3.0), 0.9)];
        cam.retarget_on_matches(&matches, 50.0);
        assert!(cam.zoom_target().is_finite());
    }

    #[test]
    fn empty_matches_are_a_no_op() {
        let mut cam = Camera::new();
        cam.reset_to_overview(Point::new(7.0, 8.0));
        cam.retarget_on_matches(&[], 50.0);
        assert_eq!(cam.focus_target(), Point::new(7.0, 8.0));
        assert_eq!(cam.zoom_target(), 1.0);
    }

    #[test]
    fn zoom_delta_scales_and_clamps() {
        let mut cam = Camera::new();
        // Scroll "in": negative delta raises the target.
        cam.apply_zoom_delta(-125.0);
        assert!(cam.zoom_target() > 1.0);

        // A huge delta saturates at the bound instead of erroring.
        cam.apply_zoom_delta(-1e9);
        assert_eq!(cam.zoom_target(), Camera::DEFAULT_MAX_ZOOM);
        cam.apply_zoom_delta(1e9);
        assert_eq!(cam.zoom_target(), Camera::DEFAULT_MIN_ZOOM);
    }

    #[test]
    fn snap_jumps_to_target() {
        let mut cam = Camera::new();
        cam.reset_to_overview(Point::new(40.0, 30.0));
        assert_ne!(cam.focus(), cam.focus_target());
        cam.snap_to_target();
        assert_eq!(cam.focus(), Point::new(40.0, 30.0));
        assert_eq!(cam.zoom(), 1.0);
    }

    #[test]
    fn zoom_limits_are_normalized() {
        let mut cam = Camera::new();
        cam.set_zoom_limits(5.0, 2.0);
        cam.apply_zoom_delta(-1e9);
        assert_eq!(cam.zoom_target(), 5.0);
    }
}
