// Copyright 2026 the Shapegen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of circle shape.

use core::f64::consts::TAU;

use crate::{Error, ParamSample, Point, Vec2};

/// A circle.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: f64,
}

impl Circle {
    /// A new circle from center and radius.
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64) -> Circle {
        Circle {
            center: center.into(),
            radius,
        }
    }

    /// A new circle, rejecting radii that are not positive and finite.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRadius`] if `radius <= 0` or is not finite.
    pub fn checked(center: impl Into<Point>, radius: f64) -> Result<Circle, Error> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(Error::InvalidRadius(radius));
        }
        Ok(Circle::new(center, radius))
    }

    /// The point on the circle at the given angle, in radians.
    ///
    /// Angle zero is on the positive x axis from the center, and angles
    /// increase toward the positive y axis.
    #[inline]
    pub fn point_at_angle(&self, angle: f64) -> Point {
        self.center + Vec2::from_angle(angle) * self.radius
    }

    /// Is this circle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }
}

/// Samples go once around the circle counter-clockwise (in a y-up frame),
/// starting on the positive x axis.
///
/// Consecutive samples at resolution `n` are `2π / n` radians apart, and the
/// starting point is not repeated at the end.
impl ParamSample for Circle {
    #[inline]
    fn sample_at(&self, t: f64) -> Point {
        self.point_at_angle(t * TAU)
    }
}
