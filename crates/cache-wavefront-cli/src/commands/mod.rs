pub mod list;
pub mod run;
pub mod tile;
pub mod validate;

use cache_wavefront::error::WavefrontError;
use cache_wavefront::geometry::CacheGeometry;

use crate::GeometryArgs;

/// Apply `--set-bits/--associativity/--block-bits` on top of `base`.
pub fn resolve_geometry(
    args: &GeometryArgs,
    base: CacheGeometry,
) -> Result<CacheGeometry, WavefrontError> {
    CacheGeometry::new(
        args.set_bits.unwrap_or(base.set_bits),
        args.associativity.unwrap_or(base.associativity),
        args.block_bits.unwrap_or(base.block_bits),
    )
}
