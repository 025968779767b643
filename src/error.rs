// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors reported by the carving core.
//!
//! Every failure here is a deterministic validation failure: nothing
//! is retried, and no operation that fails has touched the image it
//! was handed.

use crate::axis::Axis;

/// Everything that can go wrong while carving.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CarveError {
    /// The image is empty or its buffer does not match its extent.
    #[error("invalid image: {0}")]
    InvalidImage(&'static str),

    #[error("energy map has no cells ({width}x{height})")]
    EmptyEnergyMap { width: usize, height: usize },

    /// The path does not have one entry per row (or column).
    #[error("seam has {found} entries, image needs {expected}")]
    SeamMismatch { expected: usize, found: usize },

    /// Entry `step` of the path points outside `[0, bound)`.
    #[error("seam entry {step} is {index}, must be below {bound}")]
    SeamOutOfRange {
        step: usize,
        index: usize,
        bound: usize,
    },

    #[error("cannot remove another {0} seam, image is already one pixel across")]
    DimensionExhausted(Axis),

    /// An energy map or seam was derived from an image that has since
    /// been carved.
    #[error("energy map or seam predates the current image")]
    StaleEnergy,

    #[error("cannot upscale {width}x{height} to {target_width}x{target_height}")]
    Upscale {
        width: usize,
        height: usize,
        target_width: usize,
        target_height: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CarveError>;
