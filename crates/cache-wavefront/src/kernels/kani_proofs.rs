//! Kani bounded proof harnesses for the wavefront kernels.
//!
//! Promote the proptest equivalence and boundary properties to a bounded
//! proof over all 4x4 inputs and every tile side up to 4.
//!
//! All code here is behind `#[cfg(kani)]` and invisible to normal builds.

use super::oracle;
use super::wavefront::{self, EdgePolicy};
use crate::geometry::CacheGeometry;

const M: usize = 4;
const N: usize = 4;

/// Blocked with remainder equals baseline for any tile side in 1..=4.
#[kani::proof]
#[kani::unwind(6)]
fn verify_blocked_equals_baseline() {
    let input: [i32; M * N] = kani::any();
    let tile: usize = kani::any();
    kani::assume(tile >= 1 && tile <= 4);

    let mut base = input;
    let mut blocked = input;
    wavefront::wavefront_baseline(M, N, &mut base, &CacheGeometry::default());
    wavefront::wavefront_blocked_with(M, N, &mut blocked, tile, EdgePolicy::Remainder);

    assert!(base == blocked);
}

/// Row 0 and column 0 are never written.
#[kani::proof]
#[kani::unwind(6)]
fn verify_boundary_preserved() {
    let input: [i32; M * N] = kani::any();
    let tile: usize = kani::any();
    kani::assume(tile >= 1 && tile <= 4);

    let mut out = input;
    wavefront::wavefront_blocked_with(M, N, &mut out, tile, EdgePolicy::TiledOnly);

    for j in 0..N {
        assert!(out[j] == input[j]);
    }
    for i in 0..M {
        assert!(out[i * N] == input[i * N]);
    }
}

/// The oracle accepts every baseline output.
#[kani::proof]
#[kani::unwind(6)]
fn verify_oracle_accepts_baseline() {
    let mut a: [i32; M * N] = kani::any();
    wavefront::wavefront_baseline(M, N, &mut a, &CacheGeometry::default());
    assert!(oracle::is_wavefront(M, N, &a));
}
