// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Scanline sampling.
//!
//! Reads row `height / 2` left to right and keeps the colour of every fully
//! opaque pixel. Anything with alpha below 255 is a gap, not data.

use image::{DynamicImage, GenericImageView, RgbaImage};
use log::trace;

use crate::hex::HexValue;

/// Alpha value a pixel needs to be sampled.
pub const OPAQUE: u8 = u8::MAX;

/// Anything that can report RGBA pixels and its dimensions.
pub trait PixelSource {
    /// `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// RGBA at `(x, y)`. Callers stay within [`dimensions`](Self::dimensions).
    fn rgba(&self, x: u32, y: u32) -> [u8; 4];
}

impl PixelSource for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        RgbaImage::dimensions(self)
    }

    fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        self.get_pixel(x, y).0
    }
}

impl PixelSource for DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        GenericImageView::dimensions(self)
    }

    fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        self.get_pixel(x, y).0
    }
}

/// Colour of an opaque pixel, `None` for a gap.
fn opaque_colour([r, g, b, a]: [u8; 4]) -> Option<HexValue> {
    (a == OPAQUE).then(|| HexValue::from_rgb(r, g, b))
}

/// Sample the vertical midline of `image`.
pub fn sample_scanline<P: PixelSource + ?Sized>(image: &P) -> Vec<HexValue> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let y = height / 2;
    let samples: Vec<HexValue> = (0..width).filter_map(|x| opaque_colour(image.rgba(x, y))).collect();
    trace!("sampled {} of {} pixels on row {}", samples.len(), width, y);
    samples
}

/// Apply the opacity filter to an already extracted row of RGBA pixels.
pub fn sample_pixels(row: &[[u8; 4]]) -> Vec<HexValue> {
    row.iter().copied().filter_map(opaque_colour).collect()
}
