// Copyright 2026 the Shapegen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use crate::{ParamSample, Point, Vec2};

/// A single line segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

impl Line {
    /// Create a new line.
    #[inline]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// The line starting at `p0` and displaced from it by `offset`.
    #[inline]
    pub fn from_offset(p0: impl Into<Point>, offset: Vec2) -> Line {
        let p0 = p0.into();
        Line { p0, p1: p0 + offset }
    }

    /// Is this a degenerate line, with both ends at the same point?
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.p0 == self.p1
    }

    /// Is this line finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.p0.is_finite() && self.p1.is_finite()
    }
}

/// Samples start exactly at `p1` and walk toward `p0` without reaching it.
impl ParamSample for Line {
    #[inline]
    fn sample_at(&self, t: f64) -> Point {
        self.p1.lerp(self.p0, t)
    }
}
