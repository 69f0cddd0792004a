//! Sub-cell dot canvas packed into Braille Patterns (U+2800..U+28FF).
//!
//! Each terminal cell holds a 2×4 dot matrix:
//!
//! ```text
//!   col 0  col 1
//!   0x01   0x08    row 0
//!   0x02   0x10    row 1
//!   0x04   0x20    row 2
//!   0x40   0x80    row 3   <- the two "extra" dots 7 and 8
//! ```
//!
//! Dots are OR-ed straight into a per-cell mask as they are set, so packing
//! a cell is just `U+2800 + mask`. Colour is tracked per cell, not per dot:
//! the last series to light any of a cell's eight dots owns its colour.
//! Overlapping series therefore composite last-writer-wins, never blended.

use crate::{
    core::{
        color::AnsiCode,
        constants::{BRAILLE_HORIZONTAL_RESOLUTION as HR, BRAILLE_VERTICAL_RESOLUTION as VR},
    },
    render::grid::Grid,
};

const BRAILLE_BASE: u32 = 0x2800;
pub const BRAILLE_BLANK: char = '\u{2800}';

/// Bit for the dot at `[row][col]` inside one cell.
const DOT_BITS: [[u8; HR]; VR] = [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

/// Braille code point for `mask`.
///
/// Every scalar in the block encodes to UTF-8 as
/// `E2  A0|((mask>>6)&3)  80|(mask&0x3F)`, so any `u8` mask is valid.
#[inline]
#[must_use]
pub fn braille_char(mask: u8) -> char {
    char::from_u32(BRAILLE_BASE + u32::from(mask)).unwrap_or(BRAILLE_BLANK)
}

#[inline]
#[must_use]
pub fn is_braille(c: char) -> bool {
    (BRAILLE_BASE..=BRAILLE_BASE + 0xFF).contains(&u32::from(c))
}

/// Dot-resolution drawing surface over a `cols × rows` cell area.
pub struct BrailleCanvas {
    cols: usize,
    rows: usize,
    masks: Vec<u8>,
    colors: Vec<Option<AnsiCode>>,
}

impl BrailleCanvas {
    #[must_use]
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            masks: vec![0; cols * rows],
            colors: vec![None; cols * rows],
        }
    }

    /// Width in dots.
    #[inline]
    #[must_use]
    pub fn dot_cols(&self) -> usize {
        self.cols * HR
    }
    /// Height in dots.
    #[inline]
    #[must_use]
    pub fn dot_rows(&self) -> usize {
        self.rows * VR
    }

    /// Light the dot at `(x, y)`; off-canvas dots are ignored.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Option<AnsiCode>) {
        if x >= self.dot_cols() || y >= self.dot_rows() {
            return;
        }
        let cell = (y / VR) * self.cols + x / HR;
        self.masks[cell] |= DOT_BITS[y % VR][x % HR];
        self.colors[cell] = color;
    }

    #[cfg(test)]
    fn is_set(&self, x: usize, y: usize) -> bool {
        if x >= self.dot_cols() || y >= self.dot_rows() {
            return false;
        }
        self.masks[(y / VR) * self.cols + x / HR] & DOT_BITS[y % VR][x % HR] != 0
    }

    /// Pack every cell into its Braille glyph.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        let mut grid = Grid::new(self.cols, self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let i = row * self.cols + col;
                let color = if self.masks[i] == 0 { None } else { self.colors[i] };
                grid.set(col, row, braille_char(self.masks[i]), color);
            }
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn every_mask_is_a_braille_scalar() {
        for m in 0..=u8::MAX {
            let c = braille_char(m);
            assert!(is_braille(c));
            // E2 A0|((m>>6)&3) 80|(m&0x3F)
            let mut b = [0u8; 4];
            let enc = c.encode_utf8(&mut b).as_bytes();
            assert_eq!(enc, &[0xE2, 0xA0 | ((m >> 6) & 0x03), 0x80 | (m & 0x3F)][..]);
        }
    }

    #[test_log::test]
    fn dots_land_on_standard_bits() {
        let mut c = BrailleCanvas::new(1, 1);
        c.set(0, 0, None);
        c.set(1, 3, None);
        let g = c.into_grid();
        assert_eq!(g.glyph(0, 0), braille_char(0x01 | 0x80));
    }

    #[test_log::test]
    fn last_series_to_touch_a_cell_owns_its_color() {
        let mut c = BrailleCanvas::new(2, 1);
        c.set(0, 0, Some(AnsiCode::red()));
        c.set(1, 2, Some(AnsiCode::blue()));
        c.set(2, 0, Some(AnsiCode::green()));
        assert!(c.is_set(1, 2));
        let g = c.into_grid();
        assert_eq!(g.get(0, 0).and_then(|x| x.color), Some(AnsiCode::blue()));
        assert_eq!(g.get(1, 0).and_then(|x| x.color), Some(AnsiCode::green()));
    }

    #[test_log::test]
    fn off_canvas_dots_are_dropped() {
        let mut c = BrailleCanvas::new(1, 1);
        c.set(2, 0, None);
        c.set(0, 4, None);
        assert_eq!(c.into_grid().glyph(0, 0), BRAILLE_BLANK);
    }
}
