#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Escape-time fractal generator
//!
//! An escape-time fractal samples a rectangle of the complex plane,
//! one point `c` per pixel, and repeatedly feeds each point through a
//! recurrence starting from zero.  Points whose iterate grows beyond
//! a magnitude of 2.0 are said to have "escaped"; they are sure to go
//! to infinity, and are frozen the moment they cross the line.  What
//! is left after enough steps is the set itself, and the boolean mask
//! of escaped pixels is the picture.
//!
//! The default recurrence is `z^3 + c`; `z^2 + c` (the Mandelbrot
//! set), the Burning Ship and any closure can be used instead.

pub mod error;
pub mod grid;
pub mod planes;
pub mod presets;
pub mod recurrence;
pub mod render;

pub use error::{Axis, GridError};
pub use grid::{FractalGrid, ESCAPE_RADIUS};
pub use planes::{Domain, Pixel, PlaneMapper, Resolution};
pub use presets::Preset;
pub use recurrence::{BurningShip, Cubic, Formula, Quadratic, Recurrence};
