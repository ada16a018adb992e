// Copyright 2025 the Linechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series colors.
//!
//! Series are colored by their insertion index. The default palette is d3's `category10`.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use peniko::Color;

/// The ten `category10` colors, in order.
pub const CATEGORY10: [Color; 10] = [
    Color::new([0.121_569, 0.466_667, 0.705_882, 1.0]),
    Color::new([1.0, 0.498_039, 0.054_902, 1.0]),
    Color::new([0.172_549, 0.627_451, 0.172_549, 1.0]),
    Color::new([0.839_216, 0.152_941, 0.156_863, 1.0]),
    Color::new([0.580_392, 0.403_922, 0.741_176, 1.0]),
    Color::new([0.549_02, 0.337_255, 0.294_118, 1.0]),
    Color::new([0.890_196, 0.466_667, 0.760_784, 1.0]),
    Color::new([0.498_039, 0.498_039, 0.498_039, 1.0]),
    Color::new([0.737_255, 0.741_176, 0.133_333, 1.0]),
    Color::new([0.090_196_1, 0.745_098, 0.811_765, 1.0]),
];

/// Errors returned by palette lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaletteError {
    /// The palette has no colors.
    Empty,
    /// A strict lookup past the end of the palette.
    OutOfRange {
        /// The requested series index.
        index: usize,
        /// Number of colors in the palette.
        len: usize,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("palette has no colors"),
            Self::OutOfRange { index, len } => {
                write!(f, "series {index} has no color in a palette of {len}")
            }
        }
    }
}

impl core::error::Error for PaletteError {}

/// An ordered list of series colors.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(CATEGORY10)
    }
}

impl Palette {
    /// Creates a palette from the given colors.
    pub fn new(colors: impl Into<Vec<Color>>) -> Self {
        Self {
            colors: colors.into(),
        }
    }

    /// Returns the number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if the palette has no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the color at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Returns the color at `index`, failing past the end of the palette.
    pub fn color(&self, index: usize) -> Result<Color, PaletteError> {
        self.get(index).ok_or(PaletteError::OutOfRange {
            index,
            len: self.colors.len(),
        })
    }

    /// Returns the color at `index`, wrapping around past the end of the palette.
    pub fn cycled(&self, index: usize) -> Result<Color, PaletteError> {
        if self.colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(self.colors[index % self.colors.len()])
    }
}

/// Brightens `color` the way HSB brightness × 1.5 would, keeping hue, saturation and alpha.
///
/// Brightness saturates at 1.
pub fn lighten(color: Color) -> Color {
    let [r, g, b, a] = color.components;
    let v = r.max(g).max(b);
    if v <= 0.0 {
        return color;
    }
    let k = (1.0 / v).min(1.5);
    Color::new([r * k, g * k, b * k, a])
}
