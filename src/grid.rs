// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The FractalGrid holds one complex point per pixel, the current
//! iterate of every pixel, and a mask of the pixels that have
//! escaped.  Each call to `iterate()` advances every pixel that is
//! still inside the escape radius by one step of the recurrence;
//! pixels that have escaped are frozen and never touched again.

use itertools::iproduct;
use log::{debug, trace};
use num::Complex;

use crate::error::GridError;
use crate::planes::{Domain, Pixel, PlaneMapper, Resolution};
use crate::recurrence::{Cubic, Recurrence};

/// Magnitude beyond which a pixel is considered to have diverged.
pub const ESCAPE_RADIUS: f64 = 2.0;

// NaN and infinity both count as escaped.
#[inline]
fn has_escaped(z: &Complex<f64>) -> bool {
    !(z.norm() <= ESCAPE_RADIUS)
}

/// Takes a domain on the complex plane and a resolution, and tracks
/// the escape-time iteration of every sampled point.  The buffers are
/// flat and row-major: row `j` is the j-th sample of the imaginary
/// axis, column `i` the i-th sample of the real axis.
#[derive(Clone, Debug)]
pub struct FractalGrid<R = Cubic> {
    plane: PlaneMapper,
    recurrence: R,
    points: Vec<Complex<f64>>,
    iterates: Vec<Complex<f64>>,
    escaped: Vec<bool>,
    steps: usize,
}

impl FractalGrid<Cubic> {
    /// Builds a grid that iterates `z^3 + c`.
    pub fn new(domain: Domain, resolution: Resolution) -> Result<Self, GridError> {
        FractalGrid::with_recurrence(domain, resolution, Cubic)
    }
}

impl<R: Recurrence> FractalGrid<R> {
    /// Builds a grid that iterates the given recurrence.  Fails if
    /// either axis range is degenerate or either dimension is zero.
    pub fn with_recurrence(
        domain: Domain,
        resolution: Resolution,
        recurrence: R,
    ) -> Result<Self, GridError> {
        let plane = PlaneMapper::new(domain, resolution)?;
        let xs = plane.x_samples();
        let ys = plane.y_samples();
        let points: Vec<Complex<f64>> = iproduct!(ys.iter(), xs.iter())
            .map(|(&im, &re)| Complex::new(re, im))
            .collect();

        let cells = plane.len();
        let grid = FractalGrid {
            plane,
            recurrence,
            points,
            iterates: vec![Complex::new(0.0, 0.0); cells],
            escaped: vec![false; cells],
            steps: 0,
        };
        grid.check_shape()?;

        debug!(
            "built {}x{} grid over x={:?} y={:?}",
            resolution.0, resolution.1, domain.x, domain.y
        );
        Ok(grid)
    }

    fn check_shape(&self) -> Result<(), GridError> {
        let expected = self.plane.len();
        for found in &[self.points.len(), self.iterates.len(), self.escaped.len()] {
            if *found != expected {
                return Err(GridError::ShapeMismatch {
                    expected,
                    found: *found,
                });
            }
        }
        Ok(())
    }

    /// Advances every pixel that has not yet escaped by one step, and
    /// marks the ones whose new iterate lies outside the escape
    /// radius.  Returns the number of pixels that escaped on this
    /// step.
    pub fn iterate(&mut self) -> usize {
        let recurrence = &self.recurrence;
        let mut escaped_now = 0;
        for ((z, c), escaped) in self
            .iterates
            .iter_mut()
            .zip(self.points.iter())
            .zip(self.escaped.iter_mut())
        {
            if *escaped {
                continue;
            }
            *z = recurrence.step(*z, *c);
            if has_escaped(z) {
                *escaped = true;
                escaped_now += 1;
            }
        }
        self.steps += 1;
        trace!("step {}: {} pixels escaped", self.steps, escaped_now);
        escaped_now
    }

    /// Calls `iterate()` `steps` times.  Returns the total number of
    /// pixels that escaped along the way.
    pub fn run(&mut self, steps: usize) -> usize {
        let escaped: usize = (0..steps).map(|_| self.iterate()).sum();
        debug!(
            "ran {} steps, {} of {} pixels escaped",
            steps,
            self.escaped_count(),
            self.plane.len()
        );
        escaped
    }

    /// The recurrence this grid iterates.
    pub fn recurrence(&self) -> &R {
        &self.recurrence
    }
}

impl<R> FractalGrid<R> {
    /// The rectangle of the complex plane being sampled.
    pub fn domain(&self) -> Domain {
        self.plane.domain
    }

    /// Pixel counts along each axis.
    pub fn resolution(&self) -> Resolution {
        self.plane.resolution
    }

    /// Pixels along the real axis.
    pub fn width(&self) -> usize {
        self.plane.resolution.width()
    }

    /// Pixels along the imaginary axis.
    pub fn height(&self) -> usize {
        self.plane.resolution.height()
    }

    /// How many times `iterate()` has been called.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The sampled point of every pixel, row-major.
    pub fn grid(&self) -> &[Complex<f64>] {
        &self.points
    }

    /// The current iterate of every pixel, row-major.
    pub fn iterates(&self) -> &[Complex<f64>] {
        &self.iterates
    }

    /// `true` for every pixel that has escaped, row-major.
    pub fn escaped_mask(&self) -> &[bool] {
        &self.escaped
    }

    /// How many pixels have escaped so far.
    pub fn escaped_count(&self) -> usize {
        self.escaped.iter().filter(|&&e| e).count()
    }

    /// The mask as numbers: 1.0 where a pixel is still bounded, 0.0
    /// where it has escaped.
    pub fn renderable(&self) -> Vec<f64> {
        crate::render::renderable(&self.escaped)
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        self.plane.offset(&Pixel(col, row))
    }

    /// The sampled point at `(row, col)`.
    pub fn point(&self, row: usize, col: usize) -> Option<Complex<f64>> {
        self.plane.pixel_to_point(&Pixel(col, row))
    }

    /// The current iterate at `(row, col)`.
    pub fn iterate_at(&self, row: usize, col: usize) -> Option<Complex<f64>> {
        self.offset(row, col).map(|o| self.iterates[o])
    }

    /// Whether the pixel at `(row, col)` has escaped.
    pub fn is_escaped(&self, row: usize, col: usize) -> Option<bool> {
        self.offset(row, col).map(|o| self.escaped[o])
    }
}
