// Copyright 2025 the Nebula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nebula Rank: similarity ranking for query results.
//!
//! A query against the corpus yields one similarity score per point, produced
//! by an external scoring oracle. [`Ranking`] consumes those scores once and
//! derives everything the camera and the frame transform need:
//!
//! - The global score range ([`Ranking::sim_min`], [`Ranking::sim_max`]).
//! - A full descending order and its inverse rank permutation
//!   (`rank 0` = best match).
//! - A [`Ranking::top`] accessor for the best `k` matches.
//! - [`Ranking::normalized`] mapping a raw score into `[0, 1]` for visual
//!   intensity.
//!
//! Ties are broken by ascending original index, so rankings are fully
//! deterministic. A score slice whose length does not match the point count
//! is rejected with [`ScoreCountMismatch`] and the caller keeps its previous
//! ranking; that is a contract violation, not a partial update.
//!
//! ## Minimal example
//!
//! ```rust
//! use nebula_rank::Ranking;
//!
//! let ranking = Ranking::from_scores(&[0.9, 0.1, 0.5], 3).unwrap();
//! assert_eq!(ranking.sim_min(), 0.1);
//! assert_eq!(ranking.sim_max(), 0.9);
//! assert_eq!(ranking.rank_of(0), 0);
//! assert_eq!(ranking.rank_of(1), 2);
//! assert_eq!(ranking.top(1).next(), Some((0, 0.9)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

/// Guard against division by zero when normalizing a degenerate score range.
const RANGE_EPSILON: f64 = 1e-9;

/// Error returned when the score count does not match the point count.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ScoreCountMismatch {
    /// The number of points the scores were ranked against.
    pub expected: usize,
    /// The number of scores actually supplied.
    pub actual: usize,
}

impl fmt::Debug for ScoreCountMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ScoreCountMismatch {{ expected: {}, actual: {} }}",
            self.expected, self.actual
        )
    }
}

impl fmt::Display for ScoreCountMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {} similarity scores, got {}",
            self.expected, self.actual
        )
    }
}

impl core::error::Error for ScoreCountMismatch {}

/// The outcome of ranking one query's similarity scores.
///
/// Built once per query via [`Ranking::from_scores`] and then read-only: the
/// consumer swaps a new `Ranking` in atomically when the next query completes.
#[derive(Clone, Debug)]
pub struct Ranking {
    sim_min: f64,
    sim_max: f64,
    scores: Vec<f64>,
    /// Point indices sorted by descending score, ties by ascending index.
    order: Vec<usize>,
    /// Inverse of `order`: `rank[i]` is point `i`'s 0-based position.
    rank: Vec<usize>,
}

impl Ranking {
    /// Ranks one score per point, rejecting a count mismatch.
    ///
    /// `expected` is the corpus point count. On success the ranking holds the
    /// global score range, the full descending order (ties broken by
    /// ascending index), and the inverse rank permutation.
    pub fn from_scores(scores: &[f64], expected: usize) -> Result<Self, ScoreCountMismatch> {
        if scores.len() != expected {
            return Err(ScoreCountMismatch {
                expected,
                actual: scores.len(),
            });
        }

        let mut sim_min = f64::INFINITY;
        let mut sim_max = f64::NEG_INFINITY;
        for &s in scores {
            sim_min = sim_min.min(s);
            sim_max = sim_max.max(s);
        }
        if scores.is_empty() {
            sim_min = 0.0;
            sim_max = 0.0;
        }

        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_unstable_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));

        let mut rank = alloc::vec![0_usize; scores.len()];
        for (r, &i) in order.iter().enumerate() {
            rank[i] = r;
        }

        Ok(Self {
            sim_min,
            sim_max,
            scores: scores.to_vec(),
            order,
            rank,
        })
    }

    /// The number of ranked points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether the ranking is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// The minimum score over all points.
    #[must_use]
    pub fn sim_min(&self) -> f64 {
        self.sim_min
    }

    /// The maximum score over all points.
    #[must_use]
    pub fn sim_max(&self) -> f64 {
        self.sim_max
    }

    /// The 0-based rank of point `index` (0 = highest score).
    #[must_use]
    pub fn rank_of(&self, index: usize) -> usize {
        self.rank[index]
    }

    /// The raw score of point `index`.
    #[must_use]
    pub fn score_of(&self, index: usize) -> f64 {
        self.scores[index]
    }

    /// Point indices sorted by descending score, ties by ascending index.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// The best `k` matches as `(point index, score)`, descending.
    ///
    /// `k` is clamped to the number of ranked points.
    pub fn top(&self, k: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.order
            .iter()
            .take(k)
            .map(move |&i| (i, self.scores[i]))
    }

    /// Maps a raw score into `[0, 1]` relative to the global range.
    ///
    /// The denominator is padded by a small epsilon, so a degenerate range
    /// (all scores equal) maps everything to `0` rather than dividing by
    /// zero. The result is clamped to `[0, 1]`.
    #[must_use]
    pub fn normalized(&self, score: f64) -> f64 {
        ((score - self.sim_min) / (self.sim_max - self.sim_min + RANGE_EPSILON)).clamp(0.0, 1.0)
    }

    /// Whether the score range is wide enough to carry visual meaning.
    ///
    /// When this is `false` consumers should fall back to their neutral
    /// intensity rather than normalizing noise.
    #[must_use]
    pub fn has_spread(&self) -> bool {
        self.sim_max > self.sim_min + RANGE_EPSILON
    }
}
