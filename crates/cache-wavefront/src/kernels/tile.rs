//! Tile-size selection from cache geometry.
//!
//! The tile side is bounded by
//! - `2 * lines`
//! - `capacity / (2 * element_size)`: two tile rows fit in the cache
//!
//! and then rounded down to a divisor of `reference_dim`. With the default
//! policy `(s=5, E=1, b=5)` selects 51 and `(s=8, E=1, b=5)` selects 255.

use serde::{Deserialize, Serialize};

use crate::geometry::CacheGeometry;

/// Size in bytes of one grid element.
pub const ELEMENT_SIZE: usize = std::mem::size_of::<i32>();

/// Dimension whose divisors are the candidate tile sides.
pub const DEFAULT_REFERENCE_DIM: usize = 255;

/// Parameters for [`TilePolicy::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePolicy {
    pub element_size: usize,
    pub reference_dim: usize,
}

impl Default for TilePolicy {
    fn default() -> Self {
        Self {
            element_size: ELEMENT_SIZE,
            reference_dim: DEFAULT_REFERENCE_DIM,
        }
    }
}

/// Outcome of a tile-size selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileSelection {
    pub tile: usize,
    pub row_limit: usize,
    pub capacity_bytes: usize,
    /// `2 * tile * element_size <= capacity_bytes`.
    pub fits: bool,
}

impl TilePolicy {
    /// Upper bound on the tile side for `geometry`.
    ///
    /// # Panics
    ///
    /// Panics if `element_size` is zero.
    pub fn row_limit(&self, geometry: &CacheGeometry) -> usize {
        assert!(self.element_size > 0, "element size must be positive");
        let by_lines = 2 * geometry.lines();
        let by_capacity = self
            .element_size
            .checked_mul(2)
            .map_or(0, |pair| geometry.capacity_bytes() / pair);
        by_lines.min(by_capacity)
    }

    /// Whether two rows of `tile` elements fit in the cache.
    pub fn fits(&self, tile: usize, geometry: &CacheGeometry) -> bool {
        tile.checked_mul(self.element_size)
            .and_then(|row| row.checked_mul(2))
            .is_some_and(|bytes| bytes <= geometry.capacity_bytes())
    }

    /// Select the tile side for `geometry`.
    ///
    /// # Panics
    ///
    /// Panics if `element_size` or `reference_dim` is zero.
    pub fn select(&self, geometry: &CacheGeometry) -> TileSelection {
        assert!(self.reference_dim > 0, "reference dimension must be positive");
        let row_limit = self.row_limit(geometry);
        let tile = largest_divisor_at_most(self.reference_dim, row_limit);
        let fits = self.fits(tile, geometry);
        if fits {
            tracing::debug!(tile, row_limit, %geometry, "selected tile size");
        } else {
            tracing::warn!(tile, row_limit, %geometry, "no tile fits the cache, using 1");
        }
        TileSelection {
            tile,
            row_limit,
            capacity_bytes: geometry.capacity_bytes(),
            fits,
        }
    }
}

/// Tile side for `geometry` under the default policy.
pub fn select_tile_size(geometry: &CacheGeometry) -> usize {
    TilePolicy::default().select(geometry).tile
}

/// Largest divisor of `n` that is `<= limit`, or 1 when `limit` is 0.
pub fn largest_divisor_at_most(n: usize, limit: usize) -> usize {
    let cap = limit.min(n);
    (1..=cap).rev().find(|d| n % d == 0).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn small() -> CacheGeometry {
        CacheGeometry::direct_mapped(5, 5).unwrap()
    }

    fn large() -> CacheGeometry {
        CacheGeometry::direct_mapped(8, 5).unwrap()
    }

    #[test]
    fn calibrated_small_cache() {
        let sel = TilePolicy::default().select(&small());
        assert_eq!(sel.row_limit, 64);
        assert_eq!(sel.tile, 51);
        assert_eq!(sel.capacity_bytes, 1024);
        assert!(sel.fits);
    }

    #[test]
    fn calibrated_large_cache() {
        let sel = TilePolicy::default().select(&large());
        assert_eq!(sel.row_limit, 512);
        assert_eq!(sel.tile, 255);
        assert!(sel.fits);
    }

    #[test]
    fn calibrated_values_fit_algebraically() {
        // 2 * 51 * 4 = 408 <= 1024, 2 * 255 * 4 = 2040 <= 8192
        assert!(2 * 51 * ELEMENT_SIZE <= small().capacity_bytes());
        assert!(2 * 255 * ELEMENT_SIZE <= large().capacity_bytes());
    }

    #[test]
    fn larger_cache_never_selects_smaller_tile() {
        assert!(select_tile_size(&large()) > select_tile_size(&small()));
    }

    #[test]
    fn tiny_cache_falls_back_to_one() {
        let g = CacheGeometry::direct_mapped(0, 0).unwrap();
        let sel = TilePolicy::default().select(&g);
        assert_eq!(sel.row_limit, 0);
        assert_eq!(sel.tile, 1);
        assert!(!sel.fits);
    }

    #[test]
    fn associativity_raises_limit() {
        let two_way = CacheGeometry::new(5, 2, 5).unwrap();
        assert_eq!(TilePolicy::default().row_limit(&two_way), 128);
        assert_eq!(select_tile_size(&two_way), 85);
    }

    #[test]
    fn custom_reference_dim() {
        let policy = TilePolicy {
            element_size: 4,
            reference_dim: 64,
        };
        assert_eq!(policy.select(&small()).tile, 64);
    }

    #[test]
    fn largest_divisor_cases() {
        assert_eq!(largest_divisor_at_most(255, 64), 51);
        assert_eq!(largest_divisor_at_most(255, 512), 255);
        assert_eq!(largest_divisor_at_most(255, 4), 3);
        assert_eq!(largest_divisor_at_most(17, 16), 1);
        assert_eq!(largest_divisor_at_most(12, 0), 1);
    }

    #[test]
    #[should_panic(expected = "element size must be positive")]
    fn zero_element_size_panics() {
        let policy = TilePolicy {
            element_size: 0,
            reference_dim: 255,
        };
        let _ = policy.row_limit(&small());
    }

    #[test]
    fn oversized_element_size_fits_nothing() {
        let policy = TilePolicy {
            element_size: usize::MAX,
            reference_dim: 255,
        };
        let sel = policy.select(&small());
        assert_eq!(sel.row_limit, 0);
        assert_eq!(sel.tile, 1);
        assert!(!sel.fits);
        assert!(!policy.fits(usize::MAX, &large()));
    }

    proptest! {
        #[test]
        fn prop_selected_tile_fits(s in 0u32..12, e in 1u32..8, b in 0u32..8) {
            let g = CacheGeometry::new(s, e, b).unwrap();
            let policy = TilePolicy::default();
            let sel = policy.select(&g);
            prop_assert_eq!(DEFAULT_REFERENCE_DIM % sel.tile, 0);
            if sel.row_limit >= 1 {
                prop_assert!(sel.fits, "tile {} does not fit {}", sel.tile, g);
                prop_assert!(sel.tile <= sel.row_limit);
            }
        }

        #[test]
        fn prop_tile_monotone_in_set_bits(s in 0u32..11, e in 1u32..4, b in 2u32..7) {
            let lo = CacheGeometry::new(s, e, b).unwrap();
            let hi = CacheGeometry::new(s + 1, e, b).unwrap();
            prop_assert!(select_tile_size(&hi) >= select_tile_size(&lo));
        }
    }
}
