// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Sample to payload decoding.
//!
//! Decoding is best effort: noise and ties never fail, they only lower the
//! [`DecodeQuality`] reported next to the bytes.

use log::{debug, warn};

use crate::hex::{self, HexValue};
use crate::sampler::{sample_pixels, sample_scanline, PixelSource};
use crate::voter::{vote_segments, SegmentVote};

/// How cleanly the samples resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeQuality {
    /// Segments found (one per decoded 3-byte chunk).
    pub segments: usize,
    /// Segments where more than one colour was observed.
    pub contested_segments: usize,
    /// Segments whose winner was decided by scan order.
    pub tied_segments: usize,
    /// Share of data samples that agreed with their segment's winner,
    /// 100 = pristine. An empty decode counts as pristine.
    pub integrity_percent: u8,
}

impl DecodeQuality {
    fn from_votes(votes: &[SegmentVote]) -> Self {
        let agreeing: u64 = votes.iter().map(|v| v.votes as u64).sum();
        let total: u64 = votes.iter().map(|v| v.total as u64).sum();
        let integrity_percent = if total == 0 { 100 } else { (agreeing * 100 / total) as u8 };
        Self {
            segments: votes.len(),
            contested_segments: votes.iter().filter(|v| v.is_contested()).count(),
            tied_segments: votes.iter().filter(|v| v.tied).count(),
            integrity_percent,
        }
    }

    /// No segment saw more than one colour.
    pub fn is_pristine(&self) -> bool {
        self.contested_segments == 0
    }
}

/// Result of one decode call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    hex_text: String,
    bytes: Vec<u8>,
    quality: DecodeQuality,
}

impl Decoded {
    /// Concatenated segment winners, before trimming.
    pub fn hex_text(&self) -> &str {
        &self.hex_text
    }

    /// Recovered payload with padding trimmed.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn quality(&self) -> DecodeQuality {
        self.quality
    }

    /// Payload as text, replacing invalid UTF-8.
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// Decode raw (still shifted) samples in scan order.
pub fn decode(samples: &[HexValue]) -> Decoded {
    let votes = vote_segments(samples);
    let quality = DecodeQuality::from_votes(&votes);

    let mut hex_text = String::with_capacity(votes.len() * hex::HEX_SIZE);
    let mut raw = Vec::with_capacity(votes.len() * 3);
    for vote in &votes {
        hex_text.push_str(&vote.value.to_string());
        raw.extend_from_slice(&vote.value.to_bytes());
    }
    let bytes = hex::trim(raw);

    if quality.tied_segments > 0 {
        warn!("{} of {} segments resolved by tie-break", quality.tied_segments, quality.segments);
    }
    debug!(
        "decoded {} samples into {} segments, {} bytes, integrity {}%",
        samples.len(),
        quality.segments,
        bytes.len(),
        quality.integrity_percent
    );

    Decoded { hex_text, bytes, quality }
}

/// Filter a row of RGBA pixels by opacity, then decode.
pub fn decode_pixels(row: &[[u8; 4]]) -> Decoded {
    decode(&sample_pixels(row))
}

/// Sample the midline of `image`, then decode.
pub fn decode_image<P: PixelSource + ?Sized>(image: &P) -> Decoded {
    decode(&sample_scanline(image))
}
