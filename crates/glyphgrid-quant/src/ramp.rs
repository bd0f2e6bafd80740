//! Glyph sets
//!
//! - [`LuminanceRamp`]: ten glyphs ordered from sparse to dense
//! - [`EdgeGlyphs`]: one glyph per edge direction

use crate::{QuantError, QuantResult};
use glyphgrid_core::EdgeDirection;
use std::str::FromStr;

/// Default luminance ramp, darkest first.
pub const DEFAULT_RAMP: &str = " .:-=+*#%@";

/// Ten glyphs ordered from sparse (dark) to dense (bright)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuminanceRamp {
    glyphs: [char; 10],
}

impl LuminanceRamp {
    pub const LEN: usize = 10;

    pub fn new(glyphs: [char; 10]) -> Self {
        Self { glyphs }
    }

    pub fn glyphs(&self) -> &[char; 10] {
        &self.glyphs
    }

    /// Glyph for a luminance level in 0..=10.
    ///
    /// Levels 1 to 10 map to indices 0 to 9; level 0 shares index 0.
    /// Out-of-range levels clamp to the densest glyph.
    pub fn glyph_for_level(&self, level: u8) -> char {
        let index = level.saturating_sub(1) as usize;
        self.glyphs[index.min(Self::LEN - 1)]
    }
}

impl Default for LuminanceRamp {
    fn default() -> Self {
        Self {
            glyphs: [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'],
        }
    }
}

impl FromStr for LuminanceRamp {
    type Err = QuantError;

    /// Parse a ramp from exactly ten characters.
    fn from_str(s: &str) -> QuantResult<Self> {
        let chars: Vec<char> = s.chars().collect();
        let glyphs: [char; 10] = chars.as_slice().try_into().map_err(|_| {
            QuantError::InvalidParameters(format!(
                "luminance ramp needs exactly {} glyphs, got {}",
                Self::LEN,
                chars.len()
            ))
        })?;
        Ok(Self { glyphs })
    }
}

/// Glyphs drawn for each edge direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeGlyphs {
    pub vertical: char,
    pub horizontal: char,
    pub diagonal_forward: char,
    pub diagonal_backward: char,
}

impl Default for EdgeGlyphs {
    fn default() -> Self {
        Self {
            vertical: '|',
            horizontal: '_',
            diagonal_forward: '\\',
            diagonal_backward: '/',
        }
    }
}

impl EdgeGlyphs {
    /// Glyph for a direction; `None` has no glyph.
    pub fn glyph(&self, dir: EdgeDirection) -> Option<char> {
        match dir {
            EdgeDirection::Vertical => Some(self.vertical),
            EdgeDirection::Horizontal => Some(self.horizontal),
            EdgeDirection::DiagonalForward => Some(self.diagonal_forward),
            EdgeDirection::DiagonalBackward => Some(self.diagonal_backward),
            EdgeDirection::None => None,
        }
    }
}
