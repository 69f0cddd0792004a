//! Transient character grid filled by the rasterizers.
//!
//! A grid lives for exactly one render call. Serialization merges runs of
//! equally coloured cells into one ANSI span, and every opened span is closed
//! with a reset before the row ends.

use crate::core::color::AnsiCode;

pub const BLANK: char = ' ';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub color: Option<AnsiCode>,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        glyph: BLANK,
        color: None,
    };
}

/// Row-major `cols × rows` cell buffer.
#[derive(Clone, Debug)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    #[must_use]
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::EMPTY; cols * rows],
        }
    }

    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub fn get(&self, col: usize, row: usize) -> Option<&Cell> {
        if col < self.cols && row < self.rows {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Glyph at `(col, row)`, blank when out of range.
    #[inline]
    #[must_use]
    pub fn glyph(&self, col: usize, row: usize) -> char {
        self.get(col, row).map_or(BLANK, |c| c.glyph)
    }

    /// Out-of-range writes are dropped.
    #[inline]
    pub fn set(&mut self, col: usize, row: usize, glyph: char, color: Option<AnsiCode>) {
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = Cell { glyph, color };
        }
    }

    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        if row >= self.rows {
            return &[];
        }
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Append row `row` to `buf`, colouring spans when `color` is on.
    pub fn push_row(&self, buf: &mut String, row: usize, color: bool) {
        let mut open: Option<AnsiCode> = None;
        for cell in self.row(row) {
            let want = if color { cell.color } else { None };
            if want != open {
                if open.is_some() {
                    buf.push_str(AnsiCode::reset().as_str());
                }
                if let Some(c) = &want {
                    buf.push_str(c.as_str());
                }
                open = want;
            }
            buf.push(cell.glyph);
        }
        if open.is_some() {
            buf.push_str(AnsiCode::reset().as_str());
        }
    }

    #[cfg(test)]
    fn row_string(&self, row: usize, color: bool) -> String {
        let mut s = String::with_capacity(self.cols * 4);
        self.push_row(&mut s, row, color);
        s
    }
}
