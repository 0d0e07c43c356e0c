//! # cache-wavefront
//!
//! Cache-blocked wavefront kernels with a recurrence oracle.
//!
//! The wavefront transform fills the interior of an integer grid in place:
//!
//! ```text
//! A[i][j] = A[i-1][j-1] + A[i-1][j] + A[i][j-1]     (i >= 1, j >= 1)
//! ```
//!
//! Row 0 and column 0 are caller-supplied boundaries. The blocked kernel
//! computes the same result as the baseline in square tiles whose side is
//! derived from a `(s, E, b)` cache geometry.
//!
//! ## Modules
//!
//! - [`kernels`] — Baseline and blocked transforms, tile selection, oracle
//! - [`geometry`] — `(s, E, b)` cache geometry
//! - [`grid`] — Row-major grid with boundary helpers
//! - [`registry`] — Named variants for an evaluation harness
//! - [`config`] — Parse and validate YAML run configurations
//! - [`run`] — Run one variant over a seeded grid and verify it
//!
//! ```
//! use cache_wavefront::geometry::CacheGeometry;
//! use cache_wavefront::grid::Grid;
//! use cache_wavefront::kernels::{is_wavefront, wavefront_blocked};
//!
//! let geometry = CacheGeometry::direct_mapped(5, 5).unwrap();
//! let mut grid = Grid::seeded(4, 4);
//! grid.apply(|m, n, a| wavefront_blocked(m, n, a, &geometry));
//! assert_eq!(grid.get(1, 1), Some(5));
//! assert!(is_wavefront(4, 4, grid.as_slice()));
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod kernels;
pub mod registry;
pub mod run;
