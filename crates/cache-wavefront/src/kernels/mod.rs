//! Wavefront kernels, tile selection and the recurrence oracle.
//!
//! - [`wavefront`] — baseline and cache-blocked transforms
//! - [`tile`] — tile side from `(2^s, E, 2^b, element size)`
//! - [`oracle`] — recurrence check and violation localisation

// Kernel code uses single-character index names (m, n, i, j) and
// index-based loops mirroring the recurrence.
#![allow(
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::needless_range_loop,
    clippy::missing_panics_doc
)]

pub mod oracle;
pub mod tile;
pub mod wavefront;

#[cfg(kani)]
mod kani_proofs;

pub use oracle::{RecurrenceViolation, Region, find_violations, is_wavefront, is_wavefront_in};
pub use tile::{ELEMENT_SIZE, TilePolicy, TileSelection, select_tile_size};
pub use wavefront::{
    EdgePolicy, blocked_coverage, blocked_extents, wavefront_baseline, wavefront_blocked,
    wavefront_blocked_tiled_only, wavefront_blocked_with,
};
