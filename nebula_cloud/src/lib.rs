// Copyright 2025 the Nebula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nebula Cloud: the owned core of a semantic point-cloud visualization.
//!
//! A [`PointCloud`] turns a corpus of `(raw 2D projection, text)` pairs into
//! a stable, decluttered layout (via `nebula_layout`), tracks a smoothed
//! query-reactive camera (via `nebula_camera`), consumes externally computed
//! similarity scores (via `nebula_rank`), and emits per-frame screen-space
//! [`Sprite`]s plus an optional [`Hover`] hit-test result.
//!
//! The crate is deliberately headless: it owns no render loop, no pixels,
//! and no embedding model. The host is expected to:
//! - Run dimensionality reduction externally and hand the raw 2D coordinates
//!   to [`PointCloud::new`].
//! - Call [`PointCloud::frame`] once per display frame with the elapsed time
//!   and the pointer position in normalized `[-1, 1]^2` coordinates.
//! - Score queries externally (an async call, typically) and hand each
//!   result to [`PointCloud::commit_search`] between frames; commits are
//!   atomic, so a frame never mixes two queries' scores and ranks.
//! - Paint the emitted sprites in order, mapping intensity and rank through
//!   whatever styling curve it likes.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use nebula_cloud::{CloudParams, PointCloud};
//!
//! let items = vec![
//!     (Point::new(0.1, 2.3), "a rainy street at night".to_string()),
//!     (Point::new(-1.4, 0.2), "sunlight through leaves".to_string()),
//!     (Point::new(0.8, -0.9), "engines and thunder".to_string()),
//! ];
//! let view = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let mut cloud = PointCloud::new(items, view, CloudParams::default(), 42);
//!
//! // A query's scores arrive from the embedding oracle:
//! cloud.commit_search(&[0.2, 0.9, 0.4]).unwrap();
//!
//! let frame = cloud.frame(1.0 / 60.0, Some(Point::new(0.25, -0.5)), 0.016);
//! assert_eq!(frame.sprites.len(), 3);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod cloud;
mod frame;
pub mod noise;
mod params;
mod point;

pub use cloud::PointCloud;
pub use frame::{Frame, Hover, Sprite};
pub use params::CloudParams;
pub use point::{CloudPoint, UNRANKED};
