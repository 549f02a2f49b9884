// Copyright 2026 the Shapegen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by the samplers and the scenario runner.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while configuring or running a scenario.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested scenario name is neither `lines` nor `circles`.
    #[error("Unknown mode: {0}")]
    UnknownMode(String),
    /// A circle radius (or the lower bound of a radius range) is not a
    /// positive finite number.
    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
    /// A sampling range is empty or has non-finite bounds.
    #[error("invalid range [{lo}, {hi}]: bounds must be finite with lo <= hi")]
    InvalidRange {
        /// Lower bound.
        lo: f64,
        /// Upper bound.
        hi: f64,
    },
    /// Writing samples to a sink failed.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// Creating or writing an output file failed.
    #[error("failed to write {}", path.display())]
    Output {
        /// The file being written.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: io::Error,
    },
}
