//! Wavefront recurrence kernel.
//!
//! A\[i,j\] = A\[i-1,j-1\] + A\[i-1,j\] + A\[i,j-1\]   for i >= 1, j >= 1
//!
//! Row 0 and column 0 are inputs and are never written. Additions wrap
//! (two's complement), the values grow exponentially along the diagonal.
//!
//! Two variants:
//! - `fn wavefront_baseline(...)` -- column-major single pass (ground truth)
//! - `fn wavefront_blocked(...)` -- square tiles sized from the cache geometry

use serde::{Deserialize, Serialize};

use super::oracle::Region;
use super::tile::select_tile_size;
use crate::geometry::CacheGeometry;

/// Treatment of rows/columns past the last full tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Compute the remainder strips after the tiles. Full interior coverage.
    #[default]
    Remainder,
    /// Leave the remainder untouched. Only the tiled region is guaranteed.
    TiledOnly,
}

impl std::fmt::Display for EdgePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remainder => write!(f, "remainder"),
            Self::TiledOnly => write!(f, "tiled-only"),
        }
    }
}

impl std::str::FromStr for EdgePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "remainder" => Ok(Self::Remainder),
            "tiled-only" | "tiled_only" => Ok(Self::TiledOnly),
            other => Err(format!(
                "unknown edge policy '{other}' (expected remainder or tiled-only)"
            )),
        }
    }
}

#[inline]
fn step(a: &mut [i32], n: usize, i: usize, j: usize) {
    let here = i * n + j;
    let up = here - n;
    a[here] = a[up - 1].wrapping_add(a[up]).wrapping_add(a[here - 1]);
}

// ────────────────────────────────────────────────────────────────────────────
// Baseline
// ────────────────────────────────────────────────────────────────────────────

/// Column-major wavefront: `j` outer, `i` inner.
///
/// `geometry` is unused; it keeps the signature interchangeable with
/// [`wavefront_blocked`].
///
/// # Panics
/// Panics if `a.len() != m * n`.
pub fn wavefront_baseline(m: usize, n: usize, a: &mut [i32], _geometry: &CacheGeometry) {
    assert_eq!(a.len(), m * n, "grid dimension mismatch: expected {} got {}", m * n, a.len());
    for j in 1..n {
        for i in 1..m {
            step(a, n, i, j);
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Blocked
// ────────────────────────────────────────────────────────────────────────────

/// Number of interior rows and columns covered by full tiles of side `tile`.
///
/// The interior spans `[1, m)`, so this is `tile * floor((m - 1) / tile)`.
///
/// # Panics
/// Panics if `tile == 0`.
pub fn blocked_extents(m: usize, n: usize, tile: usize) -> (usize, usize) {
    assert!(tile > 0, "tile size must be positive");
    let me = tile * (m.saturating_sub(1) / tile);
    let ne = tile * (n.saturating_sub(1) / tile);
    (me, ne)
}

/// Interior cells guaranteed to satisfy the recurrence after
/// [`wavefront_blocked_with`] returns.
pub fn blocked_coverage(m: usize, n: usize, tile: usize, edge: EdgePolicy) -> Region {
    match edge {
        EdgePolicy::Remainder => Region::interior(m, n),
        EdgePolicy::TiledOnly => {
            let (me, ne) = blocked_extents(m, n, tile);
            Region::new(1..me + 1, 1..ne + 1)
        }
    }
}

/// Tiled wavefront with the tile side chosen from `geometry` and full
/// interior coverage.
///
/// Produces output identical to [`wavefront_baseline`].
///
/// # Panics
/// Panics if `a.len() != m * n`.
pub fn wavefront_blocked(m: usize, n: usize, a: &mut [i32], geometry: &CacheGeometry) {
    let tile = select_tile_size(geometry);
    wavefront_blocked_with(m, n, a, tile, EdgePolicy::Remainder);
}

/// Like [`wavefront_blocked`] but leaves the remainder strips untouched.
///
/// # Panics
/// Panics if `a.len() != m * n`.
pub fn wavefront_blocked_tiled_only(m: usize, n: usize, a: &mut [i32], geometry: &CacheGeometry) {
    let tile = select_tile_size(geometry);
    wavefront_blocked_with(m, n, a, tile, EdgePolicy::TiledOnly);
}

/// Tiled wavefront with an explicit tile side and edge policy.
///
/// Tiles are visited row-blocks outer, column-blocks inner, both
/// increasing, so the tiles above and to the left are complete before a
/// tile starts. With [`EdgePolicy::Remainder`] the columns right of the last
/// full tile are finished after each block row, and the rows below the last
/// full tile are finished row by row at the end.
///
/// # Panics
/// Panics if `a.len() != m * n` or `tile == 0`.
pub fn wavefront_blocked_with(m: usize, n: usize, a: &mut [i32], tile: usize, edge: EdgePolicy) {
    assert_eq!(a.len(), m * n, "grid dimension mismatch: expected {} got {}", m * n, a.len());
    let (me, ne) = blocked_extents(m, n, tile);
    tracing::debug!(m, n, tile, me, ne, %edge, "blocked wavefront");

    for ii in (1..=me).step_by(tile) {
        for jj in (1..=ne).step_by(tile) {
            for i in ii..ii + tile {
                for j in jj..jj + tile {
                    step(a, n, i, j);
                }
            }
        }
        if edge == EdgePolicy::Remainder {
            for i in ii..ii + tile {
                for j in ne + 1..n {
                    step(a, n, i, j);
                }
            }
        }
    }

    if edge == EdgePolicy::Remainder {
        for i in me + 1..m {
            for j in 1..n {
                step(a, n, i, j);
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::super::oracle::{find_violations, is_wavefront, is_wavefront_in};
    use super::*;
    use crate::grid::Grid;
    use proptest::prelude::*;

    fn small() -> CacheGeometry {
        CacheGeometry::direct_mapped(5, 5).unwrap()
    }

    fn large() -> CacheGeometry {
        CacheGeometry::direct_mapped(8, 5).unwrap()
    }

    fn boundary_of(a: &[i32], m: usize, n: usize) -> (Vec<i32>, Vec<i32>) {
        let row = a[..n].to_vec();
        let col = (0..m).map(|i| a[i * n]).collect();
        (row, col)
    }

    // ── Known 4x4 result ────────────────────────────────────────────────

    #[test]
    fn test_baseline_4x4_known() {
        let mut g = Grid::seeded(4, 4);
        g.apply(|m, n, a| wavefront_baseline(m, n, a, &small()));
        // Row 1 is 4 + j^2, A[2][1] = 4 + 5 + 8
        assert_eq!(g.get(1, 1), Some(5));
        assert_eq!(g.get(1, 2), Some(8));
        assert_eq!(g.get(1, 3), Some(13));
        assert_eq!(g.get(2, 1), Some(17));
        assert!(is_wavefront(4, 4, g.as_slice()));
    }

    #[test]
    fn test_blocked_4x4_matches_baseline() {
        let mut base = Grid::seeded(4, 4);
        let mut blocked = base.clone();
        base.apply(|m, n, a| wavefront_baseline(m, n, a, &small()));
        blocked.apply(|m, n, a| wavefront_blocked(m, n, a, &small()));
        assert_eq!(base, blocked);
    }

    // ── 64x64 with tile 51 ──────────────────────────────────────────────

    #[test]
    fn test_64x64_extents_with_tile_51() {
        assert_eq!(select_tile_size(&small()), 51);
        assert_eq!(blocked_extents(64, 64, 51), (51, 51));
    }

    #[test]
    fn test_64x64_remainder_covers_rows_52_to_63() {
        let mut base = Grid::seeded(64, 64);
        let mut blocked = base.clone();
        base.apply(|m, n, a| wavefront_baseline(m, n, a, &small()));
        blocked.apply(|m, n, a| wavefront_blocked(m, n, a, &small()));
        assert_eq!(base, blocked);
        assert!(is_wavefront(64, 64, blocked.as_slice()));
    }

    #[test]
    fn test_64x64_tiled_only_leaves_remainder() {
        let input = Grid::seeded(64, 64);
        let mut base = input.clone();
        let mut tiled = input.clone();
        base.apply(|m, n, a| wavefront_baseline(m, n, a, &small()));
        tiled.apply(|m, n, a| wavefront_blocked_with(m, n, a, 51, EdgePolicy::TiledOnly));

        let region = blocked_coverage(64, 64, 51, EdgePolicy::TiledOnly);
        assert_eq!(region, Region::new(1..52, 1..52));
        for i in 0..64 {
            for j in 0..64 {
                if region.contains(i, j) {
                    assert_eq!(tiled.get(i, j), base.get(i, j), "cell ({i},{j})");
                } else {
                    assert_eq!(tiled.get(i, j), input.get(i, j), "cell ({i},{j})");
                }
            }
        }
        assert!(is_wavefront_in(64, 64, tiled.as_slice(), &region));
        assert!(!is_wavefront(64, 64, tiled.as_slice()));

        // First row-major violation is the first remainder column of row 1.
        let v = find_violations(64, 64, tiled.as_slice(), &Region::interior(64, 64), 1);
        assert_eq!(v.len(), 1);
        assert_eq!((v[0].row, v[0].col), (1, 52));
        assert_eq!(v[0].expected, 51 + 52 + (64 + 51 * 51));
        assert_eq!(v[0].actual, 0);
    }

    #[test]
    fn test_exact_multiple_stays_in_bounds() {
        // m = n = 51 = tile: the last interior index is 50, one full tile
        // does not fit, so everything is remainder.
        assert_eq!(blocked_extents(51, 51, 51), (0, 0));
        assert_eq!(blocked_extents(52, 52, 51), (51, 51));
        let mut base = Grid::seeded(52, 52);
        let mut blocked = base.clone();
        base.apply(|m, n, a| wavefront_baseline(m, n, a, &small()));
        blocked.apply(|m, n, a| wavefront_blocked_with(m, n, a, 51, EdgePolicy::Remainder));
        assert_eq!(base, blocked);
    }

    #[test]
    fn test_large_cache_grid_smaller_than_tile() {
        let mut base = Grid::seeded(32, 40);
        let mut blocked = base.clone();
        base.apply(|m, n, a| wavefront_baseline(m, n, a, &large()));
        blocked.apply(|m, n, a| wavefront_blocked(m, n, a, &large()));
        assert_eq!(base, blocked);
    }

    #[test]
    fn test_degenerate_shapes_are_noops() {
        for (m, n) in [(1, 5), (5, 1), (1, 1), (0, 0)] {
            let input = Grid::seeded(m, n);
            let mut a = input.clone();
            a.apply(|m, n, a| wavefront_baseline(m, n, a, &small()));
            assert_eq!(a, input);
            let mut b = input.clone();
            b.apply(|m, n, a| wavefront_blocked_with(m, n, a, 3, EdgePolicy::Remainder));
            assert_eq!(b, input);
        }
    }

    #[test]
    fn test_wrapping_does_not_panic() {
        let mut g = Grid::with_boundary(&[i32::MAX; 8], &[i32::MAX; 8]).unwrap();
        g.apply(|m, n, a| wavefront_blocked_with(m, n, a, 2, EdgePolicy::Remainder));
        assert!(is_wavefront(8, 8, g.as_slice()));
    }

    #[test]
    fn test_edge_policy_parse_and_display() {
        assert_eq!("remainder".parse::<EdgePolicy>(), Ok(EdgePolicy::Remainder));
        assert_eq!("tiled-only".parse::<EdgePolicy>(), Ok(EdgePolicy::TiledOnly));
        assert_eq!("tiled_only".parse::<EdgePolicy>(), Ok(EdgePolicy::TiledOnly));
        assert!("diagonal".parse::<EdgePolicy>().is_err());
        assert_eq!(EdgePolicy::TiledOnly.to_string(), "tiled-only");
        assert_eq!(EdgePolicy::default(), EdgePolicy::Remainder);
    }

    // ── Assertion failure tests ─────────────────────────────────────────

    #[test]
    #[should_panic(expected = "grid dimension mismatch")]
    fn test_baseline_mismatched_extents() {
        let mut a = vec![0i32; 10 * 10];
        wavefront_baseline(20, 10, &mut a, &small());
    }

    #[test]
    #[should_panic(expected = "grid dimension mismatch")]
    fn test_blocked_mismatched_extents() {
        let mut a = vec![0i32; 10 * 10];
        wavefront_blocked(20, 10, &mut a, &small());
    }

    #[test]
    #[should_panic(expected = "tile size must be positive")]
    fn test_blocked_zero_tile() {
        let mut a = vec![0i32; 16];
        wavefront_blocked_with(4, 4, &mut a, 0, EdgePolicy::Remainder);
    }

    // ── Property-based tests ────────────────────────────────────────────

    fn grid_strategy() -> impl Strategy<Value = (usize, usize, Vec<i32>)> {
        (1usize..40, 1usize..40).prop_flat_map(|(m, n)| {
            (Just(m), Just(n), proptest::collection::vec(any::<i32>(), m * n))
        })
    }

    proptest! {
        #[test]
        fn prop_blocked_equals_baseline(
            (m, n, input) in grid_strategy(),
            tile in 1usize..12,
        ) {
            let mut base = input.clone();
            let mut blocked = input;
            wavefront_baseline(m, n, &mut base, &small());
            wavefront_blocked_with(m, n, &mut blocked, tile, EdgePolicy::Remainder);
            prop_assert_eq!(base, blocked);
        }

        #[test]
        fn prop_geometry_driven_blocked_equals_baseline(
            (m, n, input) in grid_strategy(),
            s in 0u32..9,
            e in 1u32..4,
            b in 0u32..7,
        ) {
            let g = CacheGeometry::new(s, e, b).unwrap();
            let mut base = input.clone();
            let mut blocked = input;
            wavefront_baseline(m, n, &mut base, &g);
            wavefront_blocked(m, n, &mut blocked, &g);
            prop_assert_eq!(base, blocked);
        }

        #[test]
        fn prop_tiled_only_matches_inside_and_preserves_outside(
            (m, n, input) in grid_strategy(),
            tile in 1usize..12,
        ) {
            let mut base = input.clone();
            let mut tiled = input.clone();
            wavefront_baseline(m, n, &mut base, &small());
            wavefront_blocked_with(m, n, &mut tiled, tile, EdgePolicy::TiledOnly);
            let region = blocked_coverage(m, n, tile, EdgePolicy::TiledOnly);
            for i in 0..m {
                for j in 0..n {
                    let k = i * n + j;
                    if region.contains(i, j) {
                        prop_assert_eq!(tiled[k], base[k]);
                    } else {
                        prop_assert_eq!(tiled[k], input[k]);
                    }
                }
            }
            prop_assert!(is_wavefront_in(m, n, &tiled, &region));
        }

        #[test]
        fn prop_recurrence_holds_after_either_kernel(
            (m, n, input) in grid_strategy(),
            tile in 1usize..12,
        ) {
            let mut base = input.clone();
            let mut blocked = input;
            wavefront_baseline(m, n, &mut base, &small());
            wavefront_blocked_with(m, n, &mut blocked, tile, EdgePolicy::Remainder);
            prop_assert!(is_wavefront(m, n, &base));
            prop_assert!(is_wavefront(m, n, &blocked));
        }

        #[test]
        fn prop_boundary_never_written(
            (m, n, input) in grid_strategy(),
            tile in 1usize..12,
            tiled_only in any::<bool>(),
        ) {
            let edge = if tiled_only { EdgePolicy::TiledOnly } else { EdgePolicy::Remainder };
            let before = boundary_of(&input, m, n);
            let mut base = input.clone();
            let mut blocked = input;
            wavefront_baseline(m, n, &mut base, &small());
            wavefront_blocked_with(m, n, &mut blocked, tile, edge);
            prop_assert_eq!(&boundary_of(&base, m, n), &before);
            prop_assert_eq!(&boundary_of(&blocked, m, n), &before);
        }
    }
}
