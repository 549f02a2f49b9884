// Copyright 2026 the Shapegen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed intervals used to draw random shape parameters.

use rand::Rng;

use crate::Error;

/// A closed interval `[lo, hi]` from which scalars are drawn uniformly.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomRange {
    lo: f64,
    hi: f64,
}

impl RandomRange {
    /// Create a range, checking that both bounds are finite and ordered and
    /// that the width `hi - lo` is itself finite.
    ///
    /// A range with `lo == hi` is allowed and always yields `lo`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if either bound is not finite,
    /// `lo > hi`, or `hi - lo` overflows.
    pub fn new(lo: f64, hi: f64) -> Result<Self, Error> {
        let range = RandomRange { lo, hi };
        range.validate()?;
        Ok(range)
    }

    /// Create a range from bounds known to be valid.
    pub(crate) const fn from_bounds(lo: f64, hi: f64) -> Self {
        RandomRange { lo, hi }
    }

    /// The lower bound.
    #[inline]
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// The upper bound.
    #[inline]
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Whether `value` lies within the range, bounds included.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// Re-check the range invariants.
    ///
    /// Ranges built with [`RandomRange::new`] always pass; this exists for
    /// ranges that arrive through deserialization.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] on non-finite or unordered bounds, or
    /// when the width does not fit in an `f64`.
    pub fn validate(&self) -> Result<(), Error> {
        // The uniform sampler scales by `hi - lo`, which must stay finite.
        let width = self.hi - self.lo;
        if self.lo.is_finite() && self.hi.is_finite() && self.lo <= self.hi && width.is_finite() {
            Ok(())
        } else {
            Err(Error::InvalidRange {
                lo: self.lo,
                hi: self.hi,
            })
        }
    }

    /// Draw a value uniformly from the range.
    #[inline]
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.random_range(self.lo..=self.hi)
    }
}
