// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a rectangle on the complex plane bounded by an x-range and a
//! y-range.  Unlike a scaling mapper, the integral plane here is a
//! set of evenly spaced *samples*: the first and last pixel of each
//! axis land exactly on the bounds of the range.
use num::Complex;
use std::mem;

use crate::error::{Axis, GridError};

/// Describes the width and height of an integral plane that starts
/// at 0,0.  Both dimensions must be at least one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolution(pub usize, pub usize);

impl Resolution {
    /// Pixels along the real axis.
    pub fn width(&self) -> usize {
        self.0
    }

    /// Pixels along the imaginary axis.
    pub fn height(&self) -> usize {
        self.1
    }

    /// Total pixel count, or None when `width * height` overflows.
    pub fn cells(&self) -> Option<usize> {
        self.0.checked_mul(self.1)
    }

    // Every per-pixel buffer holds at most one complex value per cell,
    // and no allocation may exceed isize::MAX bytes.
    pub(crate) fn validate(&self) -> Result<(), GridError> {
        let fits = self
            .cells()
            .and_then(|cells| cells.checked_mul(mem::size_of::<Complex<f64>>()))
            .map_or(false, |bytes| bytes <= isize::max_value() as usize);
        if self.0 == 0 || self.1 == 0 || !fits {
            return Err(GridError::InvalidResolution {
                width: self.0,
                height: self.1,
            });
        }
        Ok(())
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution(500, 500)
    }
}

/// The rectangle of the complex plane under consideration, as an
/// (min, max) range along the real axis and another along the
/// imaginary axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Domain {
    /// Range along the real axis.
    pub x: (f64, f64),
    /// Range along the imaginary axis.
    pub y: (f64, f64),
}

impl Domain {
    /// Convenience constructor mirroring `((xmin, xmax), (ymin, ymax))`.
    pub fn new(x: (f64, f64), y: (f64, f64)) -> Self {
        Domain { x, y }
    }

    /// The lower-left corner, `xmin + i*ymin`.
    pub fn leftlower(&self) -> Complex<f64> {
        Complex::new(self.x.0, self.y.0)
    }

    /// The upper-right corner, `xmax + i*ymax`.
    pub fn rightupper(&self) -> Complex<f64> {
        Complex::new(self.x.1, self.y.1)
    }

    fn validate(&self) -> Result<(), GridError> {
        for &(axis, (min, max)) in &[(Axis::Real, self.x), (Axis::Imaginary, self.y)] {
            // NaN fails the comparison as well.
            if !(min.is_finite() && max.is_finite() && min < max) {
                return Err(GridError::InvalidDomain { axis, min, max });
            }
        }
        Ok(())
    }
}

impl Default for Domain {
    fn default() -> Self {
        Domain::new((-2.0, 2.0), (-2.0, 2.0))
    }
}

/// Describes the column, row of a pixel.  Column runs along the real
/// axis, row along the imaginary axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Contains the definitions of two planes: an integral cartesian
/// plane, and a complex cartesian plane.  Maps points from one to the
/// other.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    /// The size of the integral cartesian plane.
    pub resolution: Resolution,
    /// The rectangle of the complex plane being sampled.
    pub domain: Domain,
    // Distance between neighbouring samples along each axis.  Zero
    // for an axis with a single sample.
    spacing: (f64, f64),
}

fn spacing(range: (f64, f64), samples: usize) -> f64 {
    if samples < 2 {
        0.0
    } else {
        (range.1 - range.0) / ((samples - 1) as f64)
    }
}

fn sample(range: (f64, f64), samples: usize, step: f64, index: usize) -> f64 {
    if samples > 1 && index == samples - 1 {
        range.1
    } else {
        range.0 + (index as f64) * step
    }
}

impl PlaneMapper {
    /// Constructor.  Validates both the domain and the resolution.
    pub fn new(domain: Domain, resolution: Resolution) -> Result<PlaneMapper, GridError> {
        domain.validate()?;
        resolution.validate()?;

        Ok(PlaneMapper {
            resolution,
            domain,
            spacing: (
                spacing(domain.x, resolution.0),
                spacing(domain.y, resolution.1),
            ),
        })
    }

    /// The total number of points in the integral grid.
    pub fn len(&self) -> usize {
        self.resolution.0 * self.resolution.1
    }

    /// The real part of every column, left to right.
    pub fn x_samples(&self) -> Vec<f64> {
        (0..self.resolution.0)
            .map(|i| sample(self.domain.x, self.resolution.0, self.spacing.0, i))
            .collect()
    }

    /// The imaginary part of every row, first row first.
    pub fn y_samples(&self) -> Vec<f64> {
        (0..self.resolution.1)
            .map(|j| sample(self.domain.y, self.resolution.1, self.spacing.1, j))
            .collect()
    }

    /// Given a pixel on the integral cartesian plane, return the
    /// complex number sampled there.  Pixels outside the plane map to
    /// None.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Option<Complex<f64>> {
        if pixel.0 >= self.resolution.0 || pixel.1 >= self.resolution.1 {
            return None;
        }
        Some(Complex::new(
            sample(self.domain.x, self.resolution.0, self.spacing.0, pixel.0),
            sample(self.domain.y, self.resolution.1, self.spacing.1, pixel.1),
        ))
    }

    /// The row-major offset of a pixel in a flat buffer.
    pub fn offset(&self, pixel: &Pixel) -> Option<usize> {
        if pixel.0 >= self.resolution.0 || pixel.1 >= self.resolution.1 {
            return None;
        }
        Some(pixel.1 * self.resolution.0 + pixel.0)
    }
}
