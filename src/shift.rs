// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! One-bit shift obfuscation over 24-bit colours.
//!
//! Every painted colour is the payload chunk shifted left by [`SHIFT_BITS`];
//! decoding shifts right again. A left shift of a value with bit 23 set would
//! need a 25th bit, so [`shift_left`] rejects anything above
//! [`SHIFT_SAFE_MAX`] instead of masking. Inside that range the pair is an
//! exact inverse.

use crate::error::{ColorbarError, Result};
use crate::hex::{HexValue, HEX_MAX};

/// Number of bits shifted.
pub const SHIFT_BITS: u32 = 1;

/// Largest value whose left shift still fits in six hex digits.
pub const SHIFT_SAFE_MAX: u32 = HEX_MAX >> SHIFT_BITS; // 0x7FFFFF

/// Returns `true` if `value` survives a left shift unchanged.
pub const fn is_shift_safe(value: HexValue) -> bool {
    value.value() <= SHIFT_SAFE_MAX
}

/// Shift left by one bit.
///
/// # Errors
/// [`ColorbarError::ChunkOutOfRange`] (offset 0) if `value > 0x7FFFFF`.
/// The encoder reports the real byte offset itself.
pub fn shift_left(value: HexValue) -> Result<HexValue> {
    if !is_shift_safe(value) {
        return Err(ColorbarError::ChunkOutOfRange { offset: 0, chunk: value });
    }
    HexValue::new(value.value() << SHIFT_BITS)
}

/// Shift right by one bit. Total: the low bit of a sampled colour is dropped.
pub const fn shift_right(value: HexValue) -> HexValue {
    HexValue::from_u24(value.value() >> SHIFT_BITS)
}
