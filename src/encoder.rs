// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Payload to colour-code encoding.
//!
//! ```text
//! bytes -> hex -> pad -> [c0, c1, ...]           (6-digit chunks)
//!       -> [sep<<1, c0<<1, sep<<1, c1<<1, ...]   (ColorCodes)
//! ```

use log::debug;

use crate::error::{ColorbarError, Result};
use crate::hex::{self, HexValue, Rgb, HEX_SIZE};
use crate::palette::{is_separator, SeparatorSelector};
use crate::shift::{is_shift_safe, shift_left};

/// Ordered colour sequence alternating separator and data, already shifted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorCodes(Vec<HexValue>);

impl ColorCodes {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = HexValue> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[HexValue] {
        &self.0
    }

    /// Six-digit lowercase strings, e.g. `"20fefe"`.
    pub fn hex_strings(&self) -> Vec<String> {
        self.0.iter().map(|c| c.to_string()).collect()
    }

    /// `#rrggbb` strings.
    pub fn css_colors(&self) -> Vec<String> {
        self.0.iter().map(|c| c.css()).collect()
    }

    pub fn rgb(&self) -> Vec<Rgb> {
        self.0.iter().map(|c| c.rgb()).collect()
    }
}

impl From<Vec<HexValue>> for ColorCodes {
    fn from(codes: Vec<HexValue>) -> Self {
        Self(codes)
    }
}

/// Result of one [`encode`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    hex_text: String,
    codes: ColorCodes,
}

impl Encoded {
    /// Padded payload hex text.
    pub fn hex_text(&self) -> &str {
        &self.hex_text
    }

    pub fn codes(&self) -> &ColorCodes {
        &self.codes
    }

    pub fn into_codes(self) -> ColorCodes {
        self.codes
    }
}

/// Encode `bytes` with randomly chosen separators.
///
/// # Errors
/// See [`encode_with`].
pub fn encode(bytes: &[u8]) -> Result<Encoded> {
    encode_with(bytes, &mut SeparatorSelector::from_entropy())
}

/// Encode `bytes`, drawing separators from `selector`.
///
/// # Errors
/// - [`ColorbarError::ChunkOutOfRange`] if a chunk's first byte is `>= 0x80`.
/// - [`ColorbarError::SeparatorCollision`] if a chunk equals a palette colour.
pub fn encode_with(bytes: &[u8], selector: &mut SeparatorSelector) -> Result<Encoded> {
    let hex_text = hex::pad(&hex::bytes_to_hex(bytes));
    let chunk_count = hex_text.len() / HEX_SIZE;
    let mut codes = Vec::with_capacity(chunk_count * 2);

    for (i, start) in (0..hex_text.len()).step_by(HEX_SIZE).enumerate() {
        let chunk: HexValue = hex_text[start..start + HEX_SIZE].parse()?;
        let offset = i * 3;
        if !is_shift_safe(chunk) {
            return Err(ColorbarError::ChunkOutOfRange { offset, chunk });
        }
        if is_separator(chunk) {
            return Err(ColorbarError::SeparatorCollision { offset, chunk });
        }
        codes.push(shift_left(selector.pick())?);
        codes.push(shift_left(chunk)?);
    }

    debug!("encoded {} bytes into {} chunks ({} colours)", bytes.len(), chunk_count, codes.len());

    Ok(Encoded { hex_text, codes: ColorCodes(codes) })
}
