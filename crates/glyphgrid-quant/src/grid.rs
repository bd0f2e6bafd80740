//! Glyph grid
//!
//! A row-major grid of [`GlyphCell`]s. Every row ends with one
//! [`GlyphCell::RowEnd`] column, so flattening the grid yields the final
//! text blob without further processing.

use std::fmt;

/// One cell of a [`GlyphGrid`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphCell {
    /// Glyph chosen from a dominant edge direction
    Directional(char),
    /// Glyph chosen from the luminance ramp
    Luminance(char),
    /// Row terminator
    RowEnd,
    /// Glyph wrapped with an RGB color
    Colored { glyph: char, r: u8, g: u8, b: u8 },
}

impl GlyphCell {
    /// The glyph character, or `None` for a row terminator.
    pub fn glyph(&self) -> Option<char> {
        match *self {
            GlyphCell::Directional(c) | GlyphCell::Luminance(c) => Some(c),
            GlyphCell::Colored { glyph, .. } => Some(glyph),
            GlyphCell::RowEnd => None,
        }
    }

    #[inline]
    pub fn is_row_end(&self) -> bool {
        matches!(self, GlyphCell::RowEnd)
    }
}

impl fmt::Display for GlyphCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GlyphCell::Directional(c) | GlyphCell::Luminance(c) => write!(f, "{c}"),
            GlyphCell::RowEnd => f.write_str("\n"),
            GlyphCell::Colored { glyph, r, g, b } => {
                write!(f, "<span style='color: rgb({r}, {g}, {b});'>{glyph}</span>")
            }
        }
    }
}

/// Row-major grid of glyph cells, terminator column included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphGrid {
    rows: u32,
    cols: u32,
    cells: Vec<GlyphCell>,
}

impl GlyphGrid {
    /// Create a grid of `rows` rows with `glyph_cols` glyph columns each.
    ///
    /// Glyph cells start as blank luminance glyphs; the last column of every
    /// row is the terminator.
    pub fn new(rows: u32, glyph_cols: u32) -> Self {
        let cols = glyph_cols + 1;
        let mut cells = vec![GlyphCell::Luminance(' '); rows as usize * cols as usize];
        for row in cells.chunks_exact_mut(cols as usize) {
            row[glyph_cols as usize] = GlyphCell::RowEnd;
        }
        Self { rows, cols, cells }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns, terminator column included.
    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of glyph columns (terminator excluded).
    #[inline]
    pub fn glyph_cols(&self) -> u32 {
        self.cols - 1
    }

    pub fn get(&self, row: u32, col: u32) -> Option<GlyphCell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[(row * self.cols + col) as usize])
    }

    /// Cells of one row, terminator included.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    pub fn row(&self, row: u32) -> &[GlyphCell] {
        let start = (row * self.cols) as usize;
        &self.cells[start..start + self.cols as usize]
    }

    pub fn cells(&self) -> &[GlyphCell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [GlyphCell] {
        &mut self.cells
    }

    /// Concatenate every cell in row-major order.
    pub fn flatten(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GlyphGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}
