//! Row-major integer grid with boundary row and column.
//!
//! The kernels operate on `(m, n, &mut [i32])`; [`Grid`] owns such a buffer
//! and guarantees `data.len() == rows * cols` by construction.

use crate::error::WavefrontError;

/// Row-major `rows x cols` grid of `i32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    data: Vec<i32>,
}

impl Grid {
    /// Zero-filled grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Wrap an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`WavefrontError::DimensionMismatch`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<i32>) -> Result<Self, WavefrontError> {
        if data.len() != rows * cols {
            return Err(WavefrontError::DimensionMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Grid whose row 0 is `first_row` and column 0 is `first_col`; the
    /// interior is zero.
    ///
    /// # Errors
    ///
    /// Returns [`WavefrontError::Boundary`] if either slice is empty or the
    /// two disagree on the shared corner cell.
    pub fn with_boundary(first_row: &[i32], first_col: &[i32]) -> Result<Self, WavefrontError> {
        let (Some(&corner_r), Some(&corner_c)) = (first_row.first(), first_col.first()) else {
            return Err(WavefrontError::Boundary(
                "boundary row and column must be non-empty".to_string(),
            ));
        };
        if corner_r != corner_c {
            return Err(WavefrontError::Boundary(format!(
                "corner cell differs: row starts with {corner_r}, column starts with {corner_c}"
            )));
        }
        let mut grid = Self::new(first_col.len(), first_row.len());
        grid.data[..first_row.len()].copy_from_slice(first_row);
        for (i, &v) in first_col.iter().enumerate() {
            grid.data[i * grid.cols] = v;
        }
        Ok(grid)
    }

    /// Grid with boundary cell `(i, j)` set to its linear index `i * cols + j`.
    pub fn seeded(rows: usize, cols: usize) -> Self {
        let mut grid = Self::new(rows, cols);
        if rows == 0 || cols == 0 {
            return grid;
        }
        for j in 0..cols {
            grid.data[j] = linear_seed(0, j, cols);
        }
        for i in 0..rows {
            grid.data[i * cols] = linear_seed(i, 0, cols);
        }
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<i32> {
        self.data
    }

    /// Bounds-checked element read.
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        (row < self.rows && col < self.cols).then(|| self.data[row * self.cols + col])
    }

    /// Bounds-checked element write. Returns `false` if out of range.
    pub fn set(&mut self, row: usize, col: usize, value: i32) -> bool {
        if row < self.rows && col < self.cols {
            self.data[row * self.cols + col] = value;
            true
        } else {
            false
        }
    }

    pub fn first_row(&self) -> &[i32] {
        &self.data[..self.cols.min(self.data.len())]
    }

    pub fn first_column(&self) -> Vec<i32> {
        if self.cols == 0 {
            return Vec::new();
        }
        (0..self.rows).map(|i| self.data[i * self.cols]).collect()
    }

    /// Apply an in-place kernel with the `(m, n, a)` calling convention.
    pub fn apply<F>(&mut self, kernel: F)
    where
        F: FnOnce(usize, usize, &mut [i32]),
    {
        kernel(self.rows, self.cols, &mut self.data);
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn linear_seed(i: usize, j: usize, cols: usize) -> i32 {
    (i * cols + j) as i32
}
