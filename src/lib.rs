// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! # colorbar-core
//!
//! Encodes short byte payloads as a strip of coloured vertical bands and
//! decodes them back from one scanline of the rendered image.
//!
//! Each 3-byte chunk of the payload becomes one colour, shifted left by one
//! bit and preceded by a separator colour from a fixed palette. Decoding
//! samples the image's midline, splits the samples at separator colours and
//! majority-votes each segment, so small blemishes in a band do not change
//! the result.
//!
//! The `encoder`, `shift`, `voter` and `decoder` modules are pure and
//! allocation-local: every call returns a fresh record and keeps no state.
//! `render` and `png` are thin layers over the `image` crate.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use colorbar_core::{encode_to_png, decode_png, BarConfig};
//!
//! let (_, png) = encode_to_png(b"hello", &BarConfig::default()).unwrap();
//! let decoded = decode_png(&png).unwrap();
//! assert_eq!(decoded.bytes(), b"hello");
//! ```
//!
//! # Limits
//!
//! The first byte of every 3-byte chunk must be below `0x80` (so the shifted
//! colour still fits in 24 bits) and no chunk may equal a separator colour.
//! ASCII text always qualifies; other payloads are rejected with a typed
//! error rather than silently corrupted.

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod hex;
pub mod html;
pub mod palette;
mod pipeline;
pub mod png;
pub mod render;
pub mod sampler;
pub mod shift;
pub mod voter;

pub use config::{validate_dimensions, BarConfig, SeparatorMode, MAX_DIMENSION, MAX_PIXELS};
pub use decoder::{decode, decode_image, decode_pixels, DecodeQuality, Decoded};
pub use encoder::{encode, encode_with, ColorCodes, Encoded};
pub use error::{ColorbarError, Result};
pub use hex::{HexValue, Rgb};
pub use html::{colorbar_html, HtmlOptions};
pub use palette::{SeparatorSelector, SEPARATOR_PALETTE};
pub use pipeline::{decode_file, encode_to_file, encode_to_image, encode_to_png};
pub use png::decode_png;
pub use render::render;
pub use sampler::{sample_scanline, PixelSource};
pub use shift::{shift_left, shift_right, SHIFT_SAFE_MAX};
