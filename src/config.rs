// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Canvas configuration and limits.

use crate::error::{ColorbarError, Result};
use crate::palette::SeparatorSelector;

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: u32 = 500;

/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: u32 = 500;

/// Maximum pixel dimension (width or height) of a rendered bar.
pub const MAX_DIMENSION: u32 = 8192;

/// Maximum total pixel count of a rendered bar (width × height).
pub const MAX_PIXELS: u32 = 16_000_000;

/// How separators are chosen when encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeparatorMode {
    /// Fresh entropy per encode.
    #[default]
    Random,
    /// Reproducible draw from this seed.
    Seeded(u64),
    /// Always the palette member at this index.
    Fixed(usize),
}

impl SeparatorMode {
    pub fn selector(self) -> SeparatorSelector {
        match self {
            Self::Random => SeparatorSelector::from_entropy(),
            Self::Seeded(seed) => SeparatorSelector::seeded(seed),
            Self::Fixed(index) => SeparatorSelector::fixed(index),
        }
    }
}

/// Settings for producing a colour-bar image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarConfig {
    pub width: u32,
    pub height: u32,
    pub separator: SeparatorMode,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            separator: SeparatorMode::default(),
        }
    }
}

impl BarConfig {
    /// Check the canvas against [`validate_dimensions`].
    pub fn validate(&self) -> Result<()> {
        validate_dimensions(self.width, self.height)
    }
}

/// Validate canvas dimensions.
///
/// # Errors
/// [`ColorbarError::InvalidDimensions`] if either side is 0 or above
/// [`MAX_DIMENSION`], or the area exceeds [`MAX_PIXELS`].
pub fn validate_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0
        || height == 0
        || width > MAX_DIMENSION
        || height > MAX_DIMENSION
        || width.checked_mul(height).map_or(true, |p| p > MAX_PIXELS)
    {
        return Err(ColorbarError::InvalidDimensions { width, height });
    }
    Ok(())
}
