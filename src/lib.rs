// Copyright 2026 the Shapegen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synthetic 2D test data: point samples along circles and line segments.
//!
//! The library has two layers. The geometry layer holds small value types
//! ([`Point`], [`Vec2`], [`Circle`], [`Line`]) and the [`ParamSample`] trait,
//! which evaluates a shape at evenly spaced parameters on `[0, 1)`. The
//! scenario layer ([`ScenarioRunner`]) draws many random shapes from an
//! injected random source and writes every sample as an `x y` text row.
//!
//! # Examples
//!
//! Sampling a single circle:
//! ```
//! use shapegen::{Circle, ParamSample, Point};
//!
//! let circle = Circle::new((0.0, 0.0), 10.0);
//! let samples = circle.sample_set(4);
//! assert_eq!(samples.len(), 4);
//! assert!(samples[1].distance(Point::new(0.0, 10.0)) < 1e-9);
//! ```
//!
//! A reproducible scenario written to memory:
//! ```
//! use shapegen::{Scenario, ScenarioConfig, ScenarioRunner};
//!
//! let config = ScenarioConfig::default().with_count(3).with_resolution(10);
//! let mut out = Vec::new();
//! let summary = ScenarioRunner::seeded(7, config)?
//!     .write_scenario(Scenario::Lines, &mut out)?;
//! assert_eq!(summary.samples, 30);
//! assert_eq!(out.iter().filter(|&&b| b == b'\n').count(), 30);
//! # Ok::<(), shapegen::Error>(())
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the geometry types and
//!   [`ScenarioConfig`].
//! - `mint`: conversions between [`Point`]/[`Vec2`] and their `mint`
//!   counterparts.

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(
    clippy::many_single_char_names,
    reason = "geometry code reads best with x, y, t"
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod circle;
mod error;
mod line;
mod param_sample;
mod point;
mod range;
mod scenario;
mod vec2;

pub use crate::circle::*;
pub use crate::error::*;
pub use crate::line::*;
pub use crate::param_sample::*;
pub use crate::point::*;
pub use crate::range::*;
pub use crate::scenario::*;
pub use crate::vec2::*;
