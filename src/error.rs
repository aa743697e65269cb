// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The error type shared by the grid, the plane mapper and the
//! renderer.

use failure::Fail;
use std::fmt;

/// One of the two axes of the complex plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    /// The real axis, plotted horizontally.
    Real,
    /// The imaginary axis, plotted vertically.
    Imaginary,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::Real => write!(f, "x"),
            Axis::Imaginary => write!(f, "y"),
        }
    }
}

/// Everything that can go wrong while building or rendering a grid.
#[derive(Debug, Fail, PartialEq)]
pub enum GridError {
    /// An axis range is empty, reversed, or has a non-finite bound.
    #[fail(
        display = "invalid domain: {} range ({}, {}) must be finite with min < max",
        axis, min, max
    )]
    InvalidDomain {
        /// The offending axis.
        axis: Axis,
        /// The lower bound as given.
        min: f64,
        /// The upper bound as given.
        max: f64,
    },

    /// A resolution dimension is zero, or the grid is too large to
    /// address.
    #[fail(
        display = "invalid resolution: {}x{} must be at least 1x1 and addressable",
        width, height
    )]
    InvalidResolution {
        /// Pixels along the real axis.
        width: usize,
        /// Pixels along the imaginary axis.
        height: usize,
    },

    /// A per-pixel buffer does not match the grid it belongs to.  This
    /// is a programming error, not a recoverable condition.
    #[fail(
        display = "shape mismatch: expected {} cells, found {}",
        expected, found
    )]
    ShapeMismatch {
        /// `width * height` of the grid.
        expected: usize,
        /// Length of the buffer actually supplied.
        found: usize,
    },
}
