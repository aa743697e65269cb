// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The recurrence relations a grid can iterate.  Every one of them
//! starts from `z = 0` and is fed the pixel's own point as `c`.

use num::Complex;
use std::fmt;
use std::str::FromStr;

/// One step of an escape-time recurrence: given the current iterate
/// and the pixel's point, produce the next iterate.
pub trait Recurrence {
    /// Advance `z` by one step for the point `c`.
    fn step(&self, z: Complex<f64>, c: Complex<f64>) -> Complex<f64>;
}

impl<F> Recurrence for F
where
    F: Fn(Complex<f64>, Complex<f64>) -> Complex<f64>,
{
    fn step(&self, z: Complex<f64>, c: Complex<f64>) -> Complex<f64> {
        self(z, c)
    }
}

/// `z^3 + c`.  The default.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Cubic;

impl Recurrence for Cubic {
    #[inline]
    fn step(&self, z: Complex<f64>, c: Complex<f64>) -> Complex<f64> {
        z * z * z + c
    }
}

/// `z^2 + c`, the classic Mandelbrot map.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Quadratic;

impl Recurrence for Quadratic {
    #[inline]
    fn step(&self, z: Complex<f64>, c: Complex<f64>) -> Complex<f64> {
        z * z + c
    }
}

/// `(|Re z| + i|Im z|)^2 + c`.  The Burning Ship fractal; plotted with
/// increasing imaginary part upward the ship appears upside down.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BurningShip;

impl Recurrence for BurningShip {
    #[inline]
    fn step(&self, z: Complex<f64>, c: Complex<f64>) -> Complex<f64> {
        let folded = Complex::new(z.re.abs(), z.im.abs());
        folded * folded + c
    }
}

/// Picks one of the built-in recurrences at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Formula {
    /// See [`Cubic`].
    Cubic,
    /// See [`Quadratic`].
    Quadratic,
    /// See [`BurningShip`].
    BurningShip,
}

impl Formula {
    /// Every accepted name, in the order `FromStr` recognises them.
    pub const NAMES: &'static [&'static str] = &["cubic", "quadratic", "burning-ship"];
}

impl Default for Formula {
    fn default() -> Self {
        Formula::Cubic
    }
}

impl Recurrence for Formula {
    #[inline]
    fn step(&self, z: Complex<f64>, c: Complex<f64>) -> Complex<f64> {
        match self {
            Formula::Cubic => Cubic.step(z, c),
            Formula::Quadratic => Quadratic.step(z, c),
            Formula::BurningShip => BurningShip.step(z, c),
        }
    }
}

impl FromStr for Formula {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cubic" => Ok(Formula::Cubic),
            "quadratic" => Ok(Formula::Quadratic),
            "burning-ship" => Ok(Formula::BurningShip),
            _ => Err(format!("Unknown formula '{}'", s)),
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Formula::Cubic => "cubic",
            Formula::Quadratic => "quadratic",
            Formula::BurningShip => "burning-ship",
        };
        write!(f, "{}", name)
    }
}
