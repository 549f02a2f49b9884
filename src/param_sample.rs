// Copyright 2026 the Shapegen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trait for shapes sampled at evenly spaced parameter values.

use core::iter::FusedIterator;

use crate::Point;

/// The points sampled from one shape instance, in parameter order.
pub type SampleSet = Vec<Point>;

/// A shape parametrized by a scalar on the half-open interval `[0, 1)`.
///
/// Sampling at resolution `n` evaluates the shape at `t = i / n` for
/// `i` in `0..n`. The parameter value `1.0` is never evaluated, so closed
/// shapes do not repeat their first point and open shapes stop one step
/// short of their far end.
pub trait ParamSample: Copy {
    /// Evaluate the shape at parameter `t`.
    ///
    /// Generally `t` is in the range `[0, 1)`.
    fn sample_at(&self, t: f64) -> Point;

    /// Iterate over `resolution` evenly spaced samples.
    ///
    /// A resolution of zero yields no samples.
    #[inline]
    fn samples(&self, resolution: usize) -> Samples<Self> {
        Samples {
            shape: *self,
            ix: 0,
            n: resolution,
        }
    }

    /// Collect `resolution` evenly spaced samples.
    fn sample_set(&self, resolution: usize) -> SampleSet {
        self.samples(resolution).collect()
    }
}

/// Iterator over evenly spaced samples of a shape.
///
/// Created by [`ParamSample::samples`].
#[derive(Clone, Debug)]
pub struct Samples<S> {
    shape: S,
    ix: usize,
    n: usize,
}

impl<S> Samples<S> {
    /// The resolution this iterator was created with.
    #[inline]
    pub fn resolution(&self) -> usize {
        self.n
    }
}

impl<S: ParamSample> Iterator for Samples<S> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.ix >= self.n {
            return None;
        }
        let t = self.ix as f64 / self.n as f64;
        self.ix += 1;
        Some(self.shape.sample_at(t))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.n - self.ix;
        (remaining, Some(remaining))
    }
}

impl<S: ParamSample> ExactSizeIterator for Samples<S> {}

impl<S: ParamSample> FusedIterator for Samples<S> {}
