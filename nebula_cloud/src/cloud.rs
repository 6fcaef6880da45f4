// Copyright 2025 the Nebula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect, Vec2};
use nebula_camera::Camera;
use nebula_layout::{LayoutParams, fit_to_rect, layout};
use nebula_rank::{Ranking, ScoreCountMismatch};

use crate::frame::{Frame, Hover, Sprite};
use crate::noise::{SplitMix64, hash01, value_noise};
use crate::params::CloudParams;
use crate::point::{CloudPoint, UNRANKED};

/// Smallest depth assigned to a point; keeps every point at least slightly
/// in front of the background plane.
const DEPTH_MIN: f64 = 0.06;

// Noise channel salts. Jitter is static per point; drift advances with time.
const JITTER_SALT_X: u32 = 1_000;
const JITTER_SALT_Y: u32 = 2_000;
const DRIFT_SALT_X: u32 = 0;
const DRIFT_SALT_Y: u32 = 999;

/// An owned, laid-out semantic point cloud with camera and frame transform.
///
/// Construction runs the full layout pipeline as one synchronous batch, so a
/// `PointCloud` is always in a consistent, queryable state — there is no
/// "still laying out" phase for callers to observe. All state lives here
/// explicitly; nothing is global.
#[derive(Clone, Debug)]
pub struct PointCloud {
    points: Vec<CloudPoint>,
    /// Point indices sorted by ascending depth: back to front, ties by index.
    /// Depths never change, so this is computed once.
    draw_order: Vec<usize>,
    viewport: Rect,
    camera: Camera,
    ranking: Option<Ranking>,
    params: CloudParams,
}

impl PointCloud {
    /// Builds the cloud from `(raw projection, text)` pairs.
    ///
    /// Runs orientation normalization, rect fitting, and relaxation into
    /// `viewport` (an uninterruptible batch; the only multi-millisecond
    /// operation in the crate), assigns each point a depth in
    /// `[0.06, 1.0]` and an animation seed from a splitmix64 stream seeded by
    /// `seed`, and snaps the camera to the overview. Layout geometry is fully
    /// deterministic; `seed` only feeds cosmetic animation.
    #[must_use]
    pub fn new(
        items: Vec<(Point, String)>,
        viewport: Rect,
        params: CloudParams,
        seed: u64,
    ) -> Self {
        let raw: Vec<Point> = items.iter().map(|(p, _)| *p).collect();
        let positions = layout(
            &raw,
            viewport,
            &LayoutParams {
                pad: params.pad,
                relax: params.relax,
            },
        );

        let mut stream = SplitMix64::new(seed);
        let points: Vec<CloudPoint> = items
            .into_iter()
            .zip(positions)
            .map(|((raw, text), pos)| CloudPoint {
                raw,
                pos,
                depth: DEPTH_MIN + stream.next_f64() * (1.0 - DEPTH_MIN),
                seed: stream.next_u64(),
                similarity: 0.0,
                rank: UNRANKED,
                text,
            })
            .collect();

        let mut draw_order: Vec<usize> = (0..points.len()).collect();
        draw_order.sort_unstable_by(|&a, &b| {
            points[a].depth.total_cmp(&points[b].depth).then(a.cmp(&b))
        });

        let mut cloud = Self {
            points,
            draw_order,
            viewport,
            camera: Camera::new(),
            ranking: None,
            params,
        };
        cloud.camera.reset_to_overview(cloud.centroid());
        cloud.camera.snap_to_target();
        cloud
    }

    /// The points, in corpus order.
    #[must_use]
    pub fn points(&self) -> &[CloudPoint] {
        &self.points
    }

    /// The number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the cloud is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The current viewport rectangle.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// The camera, for reading current/target state.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The camera, for host configuration (zoom limits, smoothing).
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// The committed ranking of the last query, if any.
    #[must_use]
    pub fn ranking(&self) -> Option<&Ranking> {
        self.ranking.as_ref()
    }

    /// The unweighted centroid of all layout positions.
    #[must_use]
    pub fn centroid(&self) -> Point {
        if self.points.is_empty() {
            return Point::ZERO;
        }
        let sum = self
            .points
            .iter()
            .fold(Vec2::ZERO, |acc, p| acc + p.pos.to_vec2());
        (sum / self.points.len() as f64).to_point()
    }

    /// Adapts to a new viewport by re-fitting only.
    ///
    /// Existing layout positions are uniformly rescaled and recentered into
    /// the new rect; relaxation is never re-run, so the cloud's structure is
    /// preserved exactly. The camera snaps back to the overview.
    pub fn resize(&mut self, viewport: Rect) {
        self.viewport = viewport;
        let mut positions: Vec<Point> = self.points.iter().map(|p| p.pos).collect();
        fit_to_rect(&mut positions, viewport, self.params.pad);
        for (p, pos) in self.points.iter_mut().zip(positions) {
            p.pos = pos;
        }
        self.camera.reset_to_overview(self.centroid());
        self.camera.snap_to_target();
    }

    /// Commits one query's similarity scores as a single atomic transaction.
    ///
    /// The new [`Ranking`] is built off to the side first; a score-count
    /// mismatch returns an error before any state is touched, leaving the
    /// previous query's results fully intact. On success, every point's
    /// similarity and rank, the stored ranking, and the camera target are
    /// all updated before returning — the host calls this between frames, so
    /// no frame ever observes a score from one query and a rank from another.
    ///
    /// The camera frames the top `focus_count` matches with a desired view
    /// radius of `view_radius_frac` times the smaller viewport dimension.
    pub fn commit_search(&mut self, scores: &[f64]) -> Result<(), ScoreCountMismatch> {
        let ranking = Ranking::from_scores(scores, self.points.len())?;

        for (i, p) in self.points.iter_mut().enumerate() {
            p.similarity = ranking.score_of(i);
            p.rank = ranking.rank_of(i);
        }

        let matches: Vec<(Point, f64)> = ranking
            .top(self.params.focus_count)
            .map(|(i, score)| (self.points[i].pos, ranking.normalized(score)))
            .collect();
        let view_radius =
            self.params.view_radius_frac * self.viewport.width().min(self.viewport.height());
        self.camera.retarget_on_matches(&matches, view_radius);

        self.ranking = Some(ranking);
        Ok(())
    }

    /// Drops the active query: neutral similarity, unranked points, overview
    /// camera target (animated, not snapped).
    pub fn clear_search(&mut self) {
        self.ranking = None;
        for p in self.points.iter_mut() {
            p.similarity = 0.0;
            p.rank = UNRANKED;
        }
        self.camera.reset_to_overview(self.centroid());
    }

    /// The committed top matches as `(index, score, text)`, best first.
    ///
    /// At most `top_k` entries; empty when no query has been committed.
    pub fn top_matches(&self) -> impl Iterator<Item = (usize, f64, &str)> + '_ {
        self.ranking
            .iter()
            .flat_map(|r| r.top(self.params.top_k))
            .map(|(i, score)| (i, score, self.points[i].text.as_str()))
    }

    /// Forwards a wheel/pinch delta to the camera's zoom target.
    pub fn apply_zoom_delta(&mut self, delta: f64) {
        self.camera.apply_zoom_delta(delta);
    }

    /// Advances the camera by `dt` seconds and produces this frame's output.
    ///
    /// For each point, in draw order (ascending depth, back to front):
    ///
    /// ```text
    /// screen = viewport.center() + (pos - focus) * zoom + parallax + wander
    /// ```
    ///
    /// - `pointer` is in normalized `[-1, 1]^2` coordinates relative to the
    ///   viewport center; out-of-range components are clamped, never an
    ///   error. `None` disables parallax and hovering.
    /// - Parallax scales with `(1 - depth)`: smaller depth is farther away
    ///   and shifts more with the pointer.
    /// - Wander is static jitter plus animated drift, deterministic in the
    ///   point's seed and `time` (seconds).
    /// - Intensity is the normalized similarity, or `neutral_intensity` when
    ///   no query with usable spread is active.
    /// - The hover result is the frontmost point whose screen distance to the
    ///   pointer is inside the intensity-dependent tolerance.
    ///
    /// Cost is `O(n)`; the draw order is precomputed at load.
    pub fn frame(&mut self, dt: f64, pointer: Option<Point>, time: f64) -> Frame {
        self.camera.tick(dt);
        let zoom = self.camera.zoom();
        let focus = self.camera.focus();
        let center = self.viewport.center();

        let pointer_norm = pointer.map(|p| Vec2::new(p.x.clamp(-1.0, 1.0), p.y.clamp(-1.0, 1.0)));
        let pointer_screen = pointer_norm.map(|n| {
            center
                + Vec2::new(
                    n.x * self.viewport.width() * 0.5,
                    n.y * self.viewport.height() * 0.5,
                )
        });
        let drift_t = time * self.params.drift_rate;

        let mut sprites = Vec::with_capacity(self.points.len());
        let mut hover: Option<Hover> = None;

        for &i in &self.draw_order {
            let p = &self.points[i];
            let intensity = match &self.ranking {
                Some(r) if r.has_spread() => r.normalized(p.similarity),
                _ => self.params.neutral_intensity,
            };

            let base = center.to_vec2() + (p.pos - focus) * zoom;
            let jitter = Vec2::new(
                (hash01(p.seed, JITTER_SALT_X) - 0.5) * self.params.jitter,
                (hash01(p.seed, JITTER_SALT_Y) - 0.5) * self.params.jitter,
            );
            let drift = Vec2::new(
                (value_noise(p.seed, DRIFT_SALT_X, drift_t) - 0.5) * self.params.drift,
                (value_noise(p.seed, DRIFT_SALT_Y, drift_t) - 0.5) * self.params.drift,
            );
            let parallax =
                pointer_norm.unwrap_or(Vec2::ZERO) * (self.params.parallax * (1.0 - p.depth));
            let screen = (base + jitter + drift + parallax).to_point();

            if let Some(ptr) = pointer_screen {
                let tolerance = self.params.hit_radius_min.max(
                    self.params.hit_radius_max * intensity.powf(self.params.intensity_gamma),
                );
                // Later qualifying points are drawn on top, so they win.
                if screen.distance(ptr) < tolerance {
                    hover = Some(Hover { index: i, screen });
                }
            }

            sprites.push(Sprite {
                index: i,
                screen,
                intensity,
                rank: p.rank,
                depth: p.depth,
            });
        }

        Frame { sprites, hover }
    }
}
