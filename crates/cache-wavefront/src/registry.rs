//! Variant registry: named wavefront kernels for an evaluation harness.
//!
//! A [`Registry`] is a plain list owned by whoever builds it. The harness
//! enumerates it, runs each kernel against its cache simulator and checks
//! the result with the oracle over [`Variant::covered_region`].

use crate::geometry::CacheGeometry;
use crate::kernels::oracle::Region;
use crate::kernels::tile::select_tile_size;
use crate::kernels::wavefront::{self, EdgePolicy, blocked_coverage};

/// `(rows, cols, grid, geometry)` kernel signature.
pub type KernelFn = fn(usize, usize, &mut [i32], &CacheGeometry);

/// Which interior cells a variant guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// Every cell with row >= 1 and column >= 1.
    Full,
    /// Only cells inside full tiles of the geometry-selected side.
    FullTiles,
}

/// A registered kernel.
#[derive(Debug, Clone, Copy)]
pub struct Variant {
    pub name: &'static str,
    pub description: &'static str,
    pub kernel: KernelFn,
    pub coverage: Coverage,
}

impl Variant {
    /// Run the kernel in place.
    ///
    /// # Panics
    ///
    /// Panics if `a.len() != m * n`.
    pub fn run(&self, m: usize, n: usize, a: &mut [i32], geometry: &CacheGeometry) {
        (self.kernel)(m, n, a, geometry);
    }

    /// Region the oracle must hold over after [`Variant::run`].
    pub fn covered_region(&self, m: usize, n: usize, geometry: &CacheGeometry) -> Region {
        match self.coverage {
            Coverage::Full => Region::interior(m, n),
            Coverage::FullTiles => {
                blocked_coverage(m, n, select_tile_size(geometry), EdgePolicy::TiledOnly)
            }
        }
    }
}

/// Ordered list of variants.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    variants: Vec<Variant>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the crate's kernels: `blocked`, `blocked-tiled`, `baseline`.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Variant {
            name: "blocked",
            description: "Cache-blocked wavefront, tile size from cache geometry",
            kernel: wavefront::wavefront_blocked,
            coverage: Coverage::Full,
        });
        registry.register(Variant {
            name: "blocked-tiled",
            description: "Cache-blocked wavefront over full tiles only",
            kernel: wavefront::wavefront_blocked_tiled_only,
            coverage: Coverage::FullTiles,
        });
        registry.register(Variant {
            name: "baseline",
            description: "Simple column-wise wavefront",
            kernel: wavefront::wavefront_baseline,
            coverage: Coverage::Full,
        });
        registry
    }

    /// Append a variant. Names are not deduplicated; [`Registry::get`]
    /// returns the first match.
    pub fn register(&mut self, variant: Variant) {
        self.variants.push(variant);
    }

    pub fn get(&self, name: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variant> {
        self.variants.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.variants.iter().map(|v| v.name).collect()
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
