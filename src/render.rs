// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns an escaped mask into a greyscale raster and writes it out.
//!
//! Row 0 of a grid is the *lowest* imaginary sample, while row 0 of an
//! image is the top of the picture, so the rows are emitted in reverse
//! to keep the imaginary axis pointing up.  Each pixel becomes one
//! sample, which keeps the aspect ratio square.

use failure::Error;
use image::png::PNGEncoder;
use image::pnm::{PNMEncoder, PNMSubtype, SampleEncoding};
use image::ColorType;
use log::info;
use std::convert::TryFrom;
use std::fs;
use std::path::Path;

use crate::error::GridError;
use crate::planes::Resolution;

const BOUNDED: u8 = 255;
const ESCAPED: u8 = 0;

/// The mask as numbers: 1.0 for a bounded pixel, 0.0 for an escaped
/// one.
pub fn renderable(mask: &[bool]) -> Vec<f64> {
    mask.iter().map(|&e| if e { 0.0 } else { 1.0 }).collect()
}

/// Converts a row-major mask into 8-bit grey samples, top row first.
/// Bounded pixels are white and escaped ones black, or the other way
/// around when `invert` is set.
pub fn to_luma(mask: &[bool], resolution: Resolution, invert: bool) -> Result<Vec<u8>, GridError> {
    resolution.validate()?;
    let (width, height) = (resolution.width(), resolution.height());
    if mask.len() != width * height {
        return Err(GridError::ShapeMismatch {
            expected: width * height,
            found: mask.len(),
        });
    }

    let (bounded, escaped) = if invert {
        (ESCAPED, BOUNDED)
    } else {
        (BOUNDED, ESCAPED)
    };

    Ok(mask
        .chunks(width)
        .rev()
        .flat_map(|row| row.iter().map(|&e| if e { escaped } else { bounded }))
        .collect())
}

/// The file formats `write_image` knows how to produce.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    /// Portable Network Graphics.
    Png,
    /// Binary PGM (the greyscale member of the PNM family).
    Pnm,
}

impl ImageFormat {
    /// `.png` (any case) selects PNG; everything else is PNM.
    pub fn from_path(path: &Path) -> ImageFormat {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("png") => ImageFormat::Png,
            _ => ImageFormat::Pnm,
        }
    }
}

// Image headers carry 32-bit dimensions.
fn image_dimensions(resolution: Resolution) -> Result<(u32, u32), GridError> {
    resolution.validate()?;
    match (
        u32::try_from(resolution.width()),
        u32::try_from(resolution.height()),
    ) {
        (Ok(width), Ok(height)) => Ok((width, height)),
        _ => Err(GridError::InvalidResolution {
            width: resolution.width(),
            height: resolution.height(),
        }),
    }
}

/// Encodes greyscale samples in the given format.
pub fn encode_image(
    pixels: &[u8],
    resolution: Resolution,
    format: ImageFormat,
) -> Result<Vec<u8>, Error> {
    let (width, height) = image_dimensions(resolution)?;
    let expected = resolution.width() * resolution.height();
    if pixels.len() != expected {
        return Err(GridError::ShapeMismatch {
            expected,
            found: pixels.len(),
        }
        .into());
    }

    let mut encoded = Vec::new();
    match format {
        ImageFormat::Png => {
            PNGEncoder::new(&mut encoded).encode(pixels, width, height, ColorType::Gray(8))?
        }
        ImageFormat::Pnm => {
            let mut encoder = PNMEncoder::new(&mut encoded)
                .with_subtype(PNMSubtype::Graymap(SampleEncoding::Binary));
            encoder.encode(pixels, width, height, ColorType::Gray(8))?
        }
    }
    Ok(encoded)
}

/// Writes greyscale samples to `path`, choosing the encoder from the
/// file extension.  The file is only created once encoding succeeds.
pub fn write_image(path: &Path, pixels: &[u8], resolution: Resolution) -> Result<(), Error> {
    let format = ImageFormat::from_path(path);
    let encoded = encode_image(pixels, resolution, format)?;
    fs::write(path, &encoded)?;
    info!(
        "wrote {}x{} {:?} image to {}",
        resolution.width(),
        resolution.height(),
        format,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn renderable_uses_one_for_bounded() {
        assert_eq!(renderable(&[false, true, false]), vec![1.0, 0.0, 1.0]);
    }

    #[test]
    fn luma_flips_rows() {
        // Two rows: bottom row (row 0) escaped, top row bounded.
        let mask = [true, true, true, false, false, false];
        let pixels = to_luma(&mask, Resolution(3, 2), false).unwrap();
        assert_eq!(pixels, vec![255, 255, 255, 0, 0, 0]);
    }

    #[test]
    fn luma_inverts_on_request() {
        let mask = [true, false];
        let pixels = to_luma(&mask, Resolution(2, 1), true).unwrap();
        assert_eq!(pixels, vec![255, 0]);
    }

    #[test]
    fn luma_rejects_wrong_shape() {
        let mask = [false; 5];
        assert_eq!(
            to_luma(&mask, Resolution(3, 2), false),
            Err(GridError::ShapeMismatch {
                expected: 6,
                found: 5
            })
        );
    }

    #[test]
    fn luma_rejects_zero_width() {
        assert_eq!(
            to_luma(&[], Resolution(0, 3), false),
            Err(GridError::InvalidResolution {
                width: 0,
                height: 3
            })
        );
        assert!(to_luma(&[], Resolution(4, 0), true).is_err());
    }

    #[test]
    fn dimensions_must_fit_in_an_image_header() {
        let too_wide = u32::max_value() as usize + 1;
        assert_eq!(
            image_dimensions(Resolution(too_wide, 1)),
            Err(GridError::InvalidResolution {
                width: too_wide,
                height: 1
            })
        );
        assert_eq!(image_dimensions(Resolution(640, 480)), Ok((640, 480)));
    }

    #[test]
    fn failed_write_leaves_no_file_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("short.pgm");
        assert!(write_image(&path, &[0, 255, 255], Resolution(2, 2)).is_err());
        assert!(!path.exists());
        assert!(write_image(&path, &[], Resolution(0, 2)).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(ImageFormat::from_path(Path::new("a.png")), ImageFormat::Png);
        assert_eq!(ImageFormat::from_path(Path::new("a.PNG")), ImageFormat::Png);
        assert_eq!(ImageFormat::from_path(Path::new("a.pgm")), ImageFormat::Pnm);
        assert_eq!(ImageFormat::from_path(Path::new("fractal")), ImageFormat::Pnm);
    }

    #[test]
    fn writes_a_graymap() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mask.pgm");
        write_image(&path, &[0, 255, 255, 0], Resolution(2, 2)).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P5"));
        assert!(bytes.ends_with(&[0, 255, 255, 0]));
    }

    #[test]
    fn writes_a_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mask.png");
        write_image(&path, &[0, 255, 255, 0], Resolution(2, 2)).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }
}
