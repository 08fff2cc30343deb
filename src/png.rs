// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! PNG input/output for colour bars.
//!
//! PNG is the only supported container: it is lossless, so the painted
//! colours survive a save/load cycle bit for bit. Anything else is reported
//! as [`ColorbarError::UnsupportedFormat`].

use std::io::Cursor;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use image::{DynamicImage, ImageFormat, RgbaImage};
use log::debug;
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::decoder::{decode_image, Decoded};
use crate::error::{ColorbarError, Result};
use crate::hex::bytes_to_hex;

/// File extension of saved bars.
pub const EXTENSION: &str = "png";

/// Hex digits in a generated name.
const UNIQUE_NAME_LEN: usize = 32;

/// Serialize `image` as PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    image.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}

/// Parse PNG bytes. Content that does not sniff as PNG is rejected before
/// decoding.
pub fn read_png(bytes: &[u8]) -> Result<DynamicImage> {
    match image::guess_format(bytes) {
        Ok(ImageFormat::Png) => {}
        Ok(other) => return Err(ColorbarError::UnsupportedFormat(format!("{other:?}"))),
        Err(_) => return Err(ColorbarError::UnsupportedFormat("unrecognised data".into())),
    }
    Ok(image::load_from_memory_with_format(bytes, ImageFormat::Png)?)
}

/// Parse PNG bytes and decode the colour bar they contain.
pub fn decode_png(bytes: &[u8]) -> Result<Decoded> {
    let image = read_png(bytes)?;
    Ok(decode_image(&image))
}

/// Load a colour bar from disk. The path must end in `.png` (any case).
pub fn load(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    let is_png = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(EXTENSION));
    if !is_png {
        return Err(ColorbarError::UnsupportedFormat(path.display().to_string()));
    }
    read_png(&std::fs::read(path)?)
}

/// Write `image` into `dir` under a generated unique name and return that
/// name (without the directory).
pub fn save(image: &RgbaImage, dir: impl AsRef<Path>) -> Result<String> {
    let name = format!("{}.{EXTENSION}", unique_name());
    let path = dir.as_ref().join(&name);
    std::fs::write(&path, encode_png(image)?)?;
    debug!("saved colour bar to {}", path.display());
    Ok(name)
}

/// 32 hex digits of SHA-256 over the clock, the process id and random bytes.
pub fn unique_name() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let mut salt = [0u8; 8];
    rand::thread_rng().fill_bytes(&mut salt);

    let mut hasher = Sha256::new();
    hasher.update(nanos.to_be_bytes());
    hasher.update(std::process::id().to_be_bytes());
    hasher.update(salt);
    let digest = hasher.finalize();

    let mut name = bytes_to_hex(&digest);
    name.truncate(UNIQUE_NAME_LEN);
    name
}
