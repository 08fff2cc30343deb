// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Separator palette and separator selection.
//!
//! A separator colour is painted before every data band. Decoding only asks
//! "is this a separator?", so which member is painted carries no information.
//! The selector exists so tests and reproducible renders can pin the choice:
//! [`SeparatorSelector::fixed`] always paints the same member,
//! [`SeparatorSelector::seeded`] draws from a ChaCha20 stream.

use rand::Rng;
use rand::RngCore;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::hex::HexValue;

/// The six reserved separator colours (unshifted).
pub const SEPARATOR_PALETTE: [HexValue; 6] = [
    HexValue::from_u24(0x107f7f),
    HexValue::from_u24(0x107f1f),
    HexValue::from_u24(0x7f1f7f),
    HexValue::from_u24(0x7f1f11),
    HexValue::from_u24(0x7f7f1d),
    HexValue::from_u24(0x7f7f7f),
];

/// Returns `true` if `value` (unshifted) is a palette member.
pub fn is_separator(value: HexValue) -> bool {
    SEPARATOR_PALETTE.contains(&value)
}

/// Chooses which palette member precedes each data band.
#[derive(Debug, Clone)]
pub enum SeparatorSelector {
    /// Always the member at this index (taken modulo the palette size).
    Fixed(usize),
    /// Uniform draw from a ChaCha20 stream.
    Random(ChaCha20Rng),
}

impl SeparatorSelector {
    pub fn fixed(index: usize) -> Self {
        Self::Fixed(index % SEPARATOR_PALETTE.len())
    }

    /// Reproducible random selection.
    pub fn seeded(seed: u64) -> Self {
        Self::Random(ChaCha20Rng::seed_from_u64(seed))
    }

    /// Random selection seeded from the thread RNG.
    pub fn from_entropy() -> Self {
        let mut seed = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut seed);
        Self::Random(ChaCha20Rng::from_seed(seed))
    }

    /// Next separator. Always a genuine palette member.
    pub fn pick(&mut self) -> HexValue {
        let idx = match self {
            Self::Fixed(i) => *i % SEPARATOR_PALETTE.len(),
            Self::Random(rng) => rng.gen_range(0..SEPARATOR_PALETTE.len() as u32) as usize,
        };
        SEPARATOR_PALETTE[idx]
    }
}

impl Default for SeparatorSelector {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shift::{is_shift_safe, shift_left};

    #[test]
    fn palette_is_shift_safe() {
        for sep in SEPARATOR_PALETTE {
            assert!(is_shift_safe(sep), "{sep} would overflow");
            assert!(shift_left(sep).is_ok());
        }
    }

    #[test]
    fn palette_members_distinct() {
        for (i, a) in SEPARATOR_PALETTE.iter().enumerate() {
            for b in &SEPARATOR_PALETTE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn fixed_wraps_index() {
        let mut sel = SeparatorSelector::fixed(7);
        assert_eq!(sel.pick(), SEPARATOR_PALETTE[1]);
        assert_eq!(sel.pick(), SEPARATOR_PALETTE[1]);
    }

    #[test]
    fn seeded_deterministic() {
        let mut a = SeparatorSelector::seeded(42);
        let mut b = SeparatorSelector::seeded(42);
        let xs: Vec<_> = (0..32).map(|_| a.pick()).collect();
        let ys: Vec<_> = (0..32).map(|_| b.pick()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn random_picks_are_members() {
        let mut sel = SeparatorSelector::from_entropy();
        for _ in 0..100 {
            assert!(is_separator(sel.pick()));
        }
    }

    #[test]
    fn seeded_covers_palette() {
        let mut sel = SeparatorSelector::seeded(7);
        let mut seen = [false; 6];
        for _ in 0..500 {
            let v = sel.pick();
            let i = SEPARATOR_PALETTE.iter().position(|&s| s == v).unwrap();
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
