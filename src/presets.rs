// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Named fractals with a known-good domain, resolution and formula.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use crate::grid::FractalGrid;
use crate::planes::{Domain, Resolution};
use crate::recurrence::Formula;

/// A named fractal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Preset {
    /// `z^2 + c` over the unit square around the origin.
    Mandelbrot,
    /// The Burning Ship over `[-2, 2] x [-2, 2]`.
    BurningShip,
}

impl Preset {
    /// Every accepted name.
    pub const NAMES: &'static [&'static str] = &["mandelbrot", "burning-ship"];

    /// The rectangle of the complex plane this preset samples.
    pub fn domain(self) -> Domain {
        match self {
            Preset::Mandelbrot => Domain::new((-1.0, 1.0), (-1.0, 1.0)),
            Preset::BurningShip => Domain::new((-2.0, 2.0), (-2.0, 2.0)),
        }
    }

    /// The pixel size this preset renders at.
    pub fn resolution(self) -> Resolution {
        match self {
            Preset::Mandelbrot => Resolution(100, 100),
            Preset::BurningShip => Resolution(300, 300),
        }
    }

    /// The recurrence this preset iterates.
    pub fn formula(self) -> Formula {
        match self {
            Preset::Mandelbrot => Formula::Quadratic,
            Preset::BurningShip => Formula::BurningShip,
        }
    }

    /// A fresh, un-iterated grid for this preset.
    pub fn build(self) -> Result<FractalGrid<Formula>, GridError> {
        FractalGrid::with_recurrence(self.domain(), self.resolution(), self.formula())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mandelbrot" => Ok(Preset::Mandelbrot),
            "burning-ship" => Ok(Preset::BurningShip),
            _ => Err(format!("Unknown preset '{}'", s)),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Preset::Mandelbrot => write!(f, "mandelbrot"),
            Preset::BurningShip => write!(f, "burning-ship"),
        }
    }
}
