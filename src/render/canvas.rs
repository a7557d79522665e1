//! Per-call character grid for the line chart.
//!
//! Row-major flat buffer: cell `(col, row)` lives at `row * width + col`.
//! Row 0 is the top of the chart.

use crate::core::constants::{BLANK, POINT, TRACE};

pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![BLANK; width * height],
        }
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, col: usize, row: usize) -> usize {
        debug_assert!(col < self.width && row < self.height, "cell out of range");
        row * self.width + col
    }

    #[inline]
    #[must_use]
    pub fn get(&self, col: usize, row: usize) -> char {
        self.cells[self.index(col, row)]
    }

    /// Mark a data point.  Overwrites whatever was there.
    #[inline]
    pub fn point(&mut self, col: usize, row: usize) {
        let i = self.index(col, row);
        self.cells[i] = POINT;
    }

    /// Mark an interpolated cell, only if nothing has been drawn there yet.
    #[inline]
    pub fn trace(&mut self, col: usize, row: usize) {
        let i = self.index(col, row);
        if self.cells[i] == BLANK {
            self.cells[i] = TRACE;
        }
    }

    /// Rows top to bottom as strings.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.width.max(1))
            .take(self.height)
            .map(|row| row.iter().collect())
    }
}
