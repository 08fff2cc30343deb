// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Band renderer.
//!
//! Paints `n` colour codes as equal-width, full-height, opaque vertical
//! bands. Band `i` covers columns `[i * w / n, (i + 1) * w / n)`, so widths
//! differ by at most one pixel and every column belongs to exactly one band.

use image::{Rgba, RgbaImage};
use log::trace;

use crate::config::validate_dimensions;
use crate::encoder::ColorCodes;
use crate::error::{ColorbarError, Result};
use crate::sampler::OPAQUE;

/// Column range `[start, end)` of band `index` out of `bands` on a canvas
/// `width` pixels wide.
pub fn band_span(index: usize, bands: usize, width: u32) -> (u32, u32) {
    let w = width as u64;
    let n = bands as u64;
    let i = index as u64;
    ((i * w / n) as u32, ((i + 1) * w / n) as u32)
}

/// Render `codes` onto a `width` × `height` canvas.
///
/// An empty code list gives a fully transparent canvas.
///
/// # Errors
/// - [`ColorbarError::InvalidDimensions`] if the canvas is out of bounds.
/// - [`ColorbarError::TooManyBands`] if a band would be narrower than 1px.
pub fn render(codes: &ColorCodes, width: u32, height: u32) -> Result<RgbaImage> {
    validate_dimensions(width, height)?;
    if codes.len() > width as usize {
        return Err(ColorbarError::TooManyBands { width, bands: codes.len() });
    }

    let mut canvas = RgbaImage::new(width, height);
    let n = codes.len();
    for (i, code) in codes.iter().enumerate() {
        let [r, g, b] = code.to_bytes();
        let pixel = Rgba([r, g, b, OPAQUE]);
        let (x0, x1) = band_span(i, n, width);
        for y in 0..height {
            for x in x0..x1 {
                canvas.put_pixel(x, y, pixel);
            }
        }
    }

    trace!("rendered {n} bands on {width}x{height}");
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::HexValue;

    fn codes(values: &[u32]) -> ColorCodes {
        values.iter().map(|&v| HexValue::new(v).unwrap()).collect::<Vec<_>>().into()
    }

    #[test]
    fn spans_cover_canvas() {
        let width = 10;
        let mut next = 0;
        for i in 0..3 {
            let (x0, x1) = band_span(i, 3, width);
            assert_eq!(x0, next);
            assert!(x1 > x0);
            next = x1;
        }
        assert_eq!(next, width);
    }

    #[test]
    fn paints_bands() {
        let img = render(&codes(&[0x20fefe, 0x828440]), 4, 2).unwrap();
        assert_eq!(img.get_pixel(0, 0).0, [0x20, 0xfe, 0xfe, 255]);
        assert_eq!(img.get_pixel(1, 1).0, [0x20, 0xfe, 0xfe, 255]);
        assert_eq!(img.get_pixel(2, 0).0, [0x82, 0x84, 0x40, 255]);
        assert_eq!(img.get_pixel(3, 1).0, [0x82, 0x84, 0x40, 255]);
    }

    #[test]
    fn empty_codes_transparent() {
        let img = render(&ColorCodes::default(), 3, 3).unwrap();
        assert!(img.pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn too_many_bands() {
        match render(&codes(&[1, 2, 3]), 2, 5) {
            Err(ColorbarError::TooManyBands { width: 2, bands: 3 }) => {}
            other => panic!("expected TooManyBands, got {other:?}"),
        }
    }

    #[test]
    fn one_pixel_bands() {
        let img = render(&codes(&[0x000010, 0x000020, 0x000030]), 3, 1).unwrap();
        let blues: Vec<u8> = (0..3).map(|x| img.get_pixel(x, 0).0[2]).collect();
        assert_eq!(blues, vec![0x10, 0x20, 0x30]);
    }

    #[test]
    fn invalid_canvas() {
        assert!(matches!(
            render(&codes(&[1]), 0, 10),
            Err(ColorbarError::InvalidDimensions { .. })
        ));
    }
}
