// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Hex text codec and the 24-bit [`HexValue`] colour type.
//!
//! The payload travels as lowercase hex text padded to whole 3-byte chunks:
//!
//! ```text
//! "AB"  -> 4142        (bytes_to_hex)
//!       -> 414220      (pad: filler "20" until len % 6 == 0)
//!       -> [0x414220]  (one chunk per 6 digits)
//! ```
//!
//! The filler digits `"20"` decode to the byte `0x20` (ASCII space), which
//! [`trim`] strips again on the way back.

use core::fmt;
use core::str::FromStr;

use crate::error::{ColorbarError, Result};

/// Number of hex digits in one colour (one 3-byte chunk).
pub const HEX_SIZE: usize = 6;

/// Largest value representable in six hex digits.
pub const HEX_MAX: u32 = 0x00FF_FFFF;

/// Filler digits appended by [`pad`].
pub const PAD_DIGITS: &str = "20";

/// The byte the filler digits decode to.
pub const PAD_BYTE: u8 = 0x20;

/// Padding never adds more than two bytes to a 3-byte chunk.
pub const MAX_PAD_BYTES: usize = 2;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// A 24-bit RGB triple, displayed as exactly six lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexValue(u32);

/// Integer channels of a [`HexValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexValue {
    /// Wrap a raw integer. Fails if it does not fit in 24 bits.
    pub fn new(value: u32) -> Result<Self> {
        if value > HEX_MAX {
            return Err(ColorbarError::MalformedHex("value exceeds 24 bits"));
        }
        Ok(Self(value))
    }

    /// Used for values already known to fit, e.g. the separator palette.
    pub(crate) const fn from_u24(value: u32) -> Self {
        Self(value & HEX_MAX)
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn rgb(self) -> Rgb {
        Rgb {
            r: (self.0 >> 16) as u8,
            g: (self.0 >> 8) as u8,
            b: self.0 as u8,
        }
    }

    /// The three payload bytes this colour carries, most significant first.
    pub const fn to_bytes(self) -> [u8; 3] {
        let Rgb { r, g, b } = self.rgb();
        [r, g, b]
    }

    /// `#rrggbb` form for CSS and HTML.
    pub fn css(self) -> String {
        format!("#{self}")
    }
}

impl fmt::Display for HexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06x}", self.0)
    }
}

impl FromStr for HexValue {
    type Err = ColorbarError;

    /// Parse exactly six hex digits (either case, no `#` prefix).
    fn from_str(s: &str) -> Result<Self> {
        if s.len() != HEX_SIZE {
            return Err(ColorbarError::MalformedHex("colour must have exactly 6 digits"));
        }
        let mut value = 0u32;
        for &c in s.as_bytes() {
            value = (value << 4) | nibble(c)? as u32;
        }
        Ok(Self(value))
    }
}

/// Two lowercase hex digits per byte.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(DIGITS[(b >> 4) as usize] as char);
        out.push(DIGITS[(b & 0x0F) as usize] as char);
    }
    out
}

/// Append [`PAD_DIGITS`] until the length is a multiple of [`HEX_SIZE`].
///
/// Input must come from [`bytes_to_hex`] (even length).
pub fn pad(hex: &str) -> String {
    debug_assert_eq!(hex.len() % 2, 0, "hex text must have an even length");
    let missing = (HEX_SIZE - hex.len() % HEX_SIZE) % HEX_SIZE;
    let mut padded = String::with_capacity(hex.len() + missing);
    padded.push_str(hex);
    for _ in 0..missing / PAD_DIGITS.len() {
        padded.push_str(PAD_DIGITS);
    }
    padded
}

/// Inverse of [`bytes_to_hex`]. Accepts either case.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return Err(ColorbarError::MalformedHex("odd number of hex digits"));
    }
    hex.as_bytes()
        .chunks_exact(2)
        .map(|pair| -> Result<u8> { Ok((nibble(pair[0])? << 4) | nibble(pair[1])?) })
        .collect()
}

/// Strip the filler bytes [`pad`] may have added.
///
/// At most [`MAX_PAD_BYTES`] trailing [`PAD_BYTE`]s are removed, so a payload
/// that itself ends in spaces can lose up to two of them.
pub fn trim(mut bytes: Vec<u8>) -> Vec<u8> {
    for _ in 0..MAX_PAD_BYTES {
        if bytes.last() != Some(&PAD_BYTE) {
            break;
        }
        bytes.pop();
    }
    bytes
}

fn nibble(c: u8) -> Result<u8> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(ColorbarError::MalformedHex("non-hex digit")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_to_hex_lowercase() {
        assert_eq!(bytes_to_hex(b"AB"), "4142");
        assert_eq!(bytes_to_hex(&[0x00, 0x0f, 0xff]), "000fff");
        assert_eq!(bytes_to_hex(&[]), "");
    }

    #[test]
    fn pad_uses_space_filler() {
        assert_eq!(pad("4142"), "414220");
        assert_eq!(pad("41"), "412020");
        assert_eq!(pad("414243"), "414243");
        assert_eq!(pad(""), "");
    }

    #[test]
    fn pad_filler_is_space_not_dc4() {
        // "20" read as hex is 0x20, not the control code 0x14 (decimal 20).
        let bytes = hex_to_bytes(&pad("41")).unwrap();
        assert_eq!(bytes, vec![0x41, 0x20, 0x20]);
        assert!(!bytes.contains(&0x14));
    }

    #[test]
    fn padded_length_aligned() {
        for len in 0..20 {
            let data = vec![0x41u8; len];
            assert_eq!(pad(&bytes_to_hex(&data)).len() % HEX_SIZE, 0, "len {len}");
        }
    }

    #[test]
    fn hex_to_bytes_inverse() {
        assert_eq!(hex_to_bytes("4142").unwrap(), b"AB");
        assert_eq!(hex_to_bytes("FFfe").unwrap(), vec![0xff, 0xfe]);
        assert!(hex_to_bytes("").unwrap().is_empty());
    }

    #[test]
    fn hex_to_bytes_rejects_malformed() {
        assert!(matches!(hex_to_bytes("414"), Err(ColorbarError::MalformedHex(_))));
        assert!(matches!(hex_to_bytes("zz"), Err(ColorbarError::MalformedHex(_))));
    }

    #[test]
    fn trim_removes_at_most_two_spaces() {
        assert_eq!(trim(b"AB ".to_vec()), b"AB");
        assert_eq!(trim(b"A  ".to_vec()), b"A");
        assert_eq!(trim(b"   ".to_vec()), b" ");
        assert_eq!(trim(b"ABC".to_vec()), b"ABC");
        assert!(trim(Vec::new()).is_empty());
    }

    #[test]
    fn trim_keeps_leading_space() {
        assert_eq!(trim(b" AB".to_vec()), b" AB");
    }

    #[test]
    fn hex_value_display_zero_padded() {
        assert_eq!(HexValue::new(0x0000ab).unwrap().to_string(), "0000ab");
        assert_eq!(HexValue::from_rgb(1, 2, 3).to_string(), "010203");
        assert_eq!(HexValue::from_rgb(0x10, 0x7f, 0x7f).css(), "#107f7f");
    }

    #[test]
    fn hex_value_parse() {
        let v: HexValue = "7F1f11".parse().unwrap();
        assert_eq!(v.value(), 0x7f1f11);
        assert_eq!(v.rgb(), Rgb { r: 0x7f, g: 0x1f, b: 0x11 });
        assert_eq!(v.to_bytes(), [0x7f, 0x1f, 0x11]);
        assert!("12345".parse::<HexValue>().is_err());
        assert!("1234567".parse::<HexValue>().is_err());
        assert!("12345g".parse::<HexValue>().is_err());
    }

    #[test]
    fn hex_value_rejects_over_24_bits() {
        assert!(HexValue::new(0x0100_0000).is_err());
        assert!(HexValue::new(HEX_MAX).is_ok());
    }
}
