// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the colour-bar pipeline.
//!
//! [`ColorbarError`] covers every failure a caller can trigger, from payloads
//! the encoding cannot carry through to PNG and file-system problems. Empty
//! payloads and empty images are not errors.

use core::fmt;

use crate::hex::HexValue;

/// Errors that can occur while encoding, rendering, loading or decoding a
/// colour bar.
#[derive(Debug)]
pub enum ColorbarError {
    /// The input is not a PNG (wrong extension or content).
    UnsupportedFormat(String),
    /// The PNG codec rejected the data.
    Image(image::ImageError),
    /// Reading or writing a file failed.
    Io(std::io::Error),
    /// Hex text has odd length or contains a non-hex digit.
    MalformedHex(&'static str),
    /// A 3-byte chunk is above the shift-safe range (top bit set).
    ChunkOutOfRange { offset: usize, chunk: HexValue },
    /// A 3-byte chunk is equal to a separator colour.
    SeparatorCollision { offset: usize, chunk: HexValue },
    /// Canvas dimensions are zero or above the supported maximum.
    InvalidDimensions { width: u32, height: u32 },
    /// The canvas is narrower than the number of bands to paint.
    TooManyBands { width: u32, bands: usize },
}

impl fmt::Display for ColorbarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFormat(what) => write!(f, "unsupported image format: {what} (only PNG is allowed)"),
            Self::Image(e) => write!(f, "PNG codec error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::MalformedHex(msg) => write!(f, "malformed hex: {msg}"),
            Self::ChunkOutOfRange { offset, chunk } => {
                write!(f, "chunk {chunk} at byte {offset} has its top bit set and cannot be shifted")
            }
            Self::SeparatorCollision { offset, chunk } => {
                write!(f, "chunk {chunk} at byte {offset} collides with a separator colour")
            }
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid canvas dimensions {width}x{height}")
            }
            Self::TooManyBands { width, bands } => {
                write!(f, "canvas width {width} cannot hold {bands} bands")
            }
        }
    }
}

impl std::error::Error for ColorbarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Image(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for ColorbarError {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}

impl From<std::io::Error> for ColorbarError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, ColorbarError>;
