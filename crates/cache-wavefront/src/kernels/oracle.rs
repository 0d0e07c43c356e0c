//! Recurrence oracle.
//!
//! Checks `A[i][j] == A[i-1][j-1] + A[i-1][j] + A[i][j-1]` (wrapping) over
//! the interior or a sub-region of it.

use std::ops::Range;

use serde::Serialize;

/// Half-open rectangle of grid cells, `rows x cols`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    pub rows: Range<usize>,
    pub cols: Range<usize>,
}

impl Region {
    pub fn new(rows: Range<usize>, cols: Range<usize>) -> Self {
        Self { rows, cols }
    }

    /// All cells with row >= 1 and column >= 1.
    pub fn interior(m: usize, n: usize) -> Self {
        Self::new(1..m.max(1), 1..n.max(1))
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.rows.contains(&row) && self.cols.contains(&col)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols.is_empty()
    }

    pub fn cell_count(&self) -> usize {
        self.rows.len() * self.cols.len()
    }

    /// Intersection with the interior of an `m x n` grid.
    fn clamp_to_interior(&self, m: usize, n: usize) -> Self {
        Self::new(
            self.rows.start.max(1)..self.rows.end.min(m),
            self.cols.start.max(1)..self.cols.end.min(n),
        )
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}) x [{}, {})",
            self.rows.start, self.rows.end, self.cols.start, self.cols.end
        )
    }
}

/// A cell that does not satisfy the recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecurrenceViolation {
    pub row: usize,
    pub col: usize,
    pub expected: i32,
    pub actual: i32,
}

impl std::fmt::Display for RecurrenceViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A[{}][{}] = {}, expected {}",
            self.row, self.col, self.actual, self.expected
        )
    }
}

#[inline]
fn expected_at(a: &[i32], n: usize, i: usize, j: usize) -> i32 {
    let up = (i - 1) * n + j;
    a[up - 1].wrapping_add(a[up]).wrapping_add(a[i * n + j - 1])
}

/// Whether every interior cell satisfies the recurrence.
///
/// Walks columns outer, rows inner and stops at the first violation.
///
/// # Panics
/// Panics if `a.len() != m * n`.
pub fn is_wavefront(m: usize, n: usize, a: &[i32]) -> bool {
    is_wavefront_in(m, n, a, &Region::interior(m, n))
}

/// [`is_wavefront`] restricted to `region` (clamped to the interior).
///
/// # Panics
/// Panics if `a.len() != m * n`.
pub fn is_wavefront_in(m: usize, n: usize, a: &[i32], region: &Region) -> bool {
    assert_eq!(a.len(), m * n, "grid dimension mismatch: expected {} got {}", m * n, a.len());
    let region = region.clamp_to_interior(m, n);
    for j in region.cols.clone() {
        for i in region.rows.clone() {
            if a[i * n + j] != expected_at(a, n, i, j) {
                return false;
            }
        }
    }
    true
}

/// Up to `limit` violations inside `region`, in row-major order.
///
/// # Panics
/// Panics if `a.len() != m * n`.
pub fn find_violations(
    m: usize,
    n: usize,
    a: &[i32],
    region: &Region,
    limit: usize,
) -> Vec<RecurrenceViolation> {
    assert_eq!(a.len(), m * n, "grid dimension mismatch: expected {} got {}", m * n, a.len());
    let region = region.clamp_to_interior(m, n);
    let mut out = Vec::new();
    for i in region.rows.clone() {
        for j in region.cols.clone() {
            if out.len() >= limit {
                return out;
            }
            let expected = expected_at(a, n, i, j);
            let actual = a[i * n + j];
            if actual != expected {
                out.push(RecurrenceViolation {
                    row: i,
                    col: j,
                    expected,
                    actual,
                });
            }
        }
    }
    out
}
