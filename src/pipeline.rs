// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! End-to-end helpers: payload to image and image file back to payload.

use std::path::Path;

use image::RgbaImage;
use log::debug;

use crate::config::BarConfig;
use crate::decoder::{decode_image, Decoded};
use crate::encoder::{encode_with, Encoded};
use crate::error::Result;
use crate::png;
use crate::render::render;

/// Encode `payload` and paint it onto a canvas sized by `config`.
///
/// # Errors
/// Encoding errors from [`encode_with`](crate::encoder::encode_with) and
/// canvas errors from [`render`].
pub fn encode_to_image(payload: &[u8], config: &BarConfig) -> Result<(Encoded, RgbaImage)> {
    config.validate()?;
    let encoded = encode_with(payload, &mut config.separator.selector())?;
    let image = render(encoded.codes(), config.width, config.height)?;
    Ok((encoded, image))
}

/// [`encode_to_image`] followed by PNG serialization.
pub fn encode_to_png(payload: &[u8], config: &BarConfig) -> Result<(Encoded, Vec<u8>)> {
    let (encoded, image) = encode_to_image(payload, config)?;
    Ok((encoded, png::encode_png(&image)?))
}

/// [`encode_to_image`] followed by [`png::save`]. Returns the generated file
/// name inside `dir`.
pub fn encode_to_file(payload: &[u8], config: &BarConfig, dir: impl AsRef<Path>) -> Result<(Encoded, String)> {
    let (encoded, image) = encode_to_image(payload, config)?;
    let name = png::save(&image, dir)?;
    Ok((encoded, name))
}

/// Load a `.png` colour bar from disk and decode it.
pub fn decode_file(path: impl AsRef<Path>) -> Result<Decoded> {
    let path = path.as_ref();
    let image = png::load(path)?;
    debug!("decoding {}", path.display());
    Ok(decode_image(&image))
}
