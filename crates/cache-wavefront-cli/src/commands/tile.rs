use cache_wavefront::geometry::CacheGeometry;
use cache_wavefront::kernels::TilePolicy;

use super::resolve_geometry;
use crate::GeometryArgs;

pub fn run(
    args: &GeometryArgs,
    element_size: usize,
    reference_dim: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    if element_size == 0 || reference_dim == 0 {
        return Err("--element-size and --reference-dim must be positive".into());
    }
    let geometry = resolve_geometry(args, CacheGeometry::default())?;
    let policy = TilePolicy {
        element_size,
        reference_dim,
    };
    let selection = policy.select(&geometry);

    println!("Geometry: {geometry}");
    println!("Row limit: {}", selection.row_limit);
    println!("Tile size: {}", selection.tile);
    let working_set = selection
        .tile
        .checked_mul(element_size)
        .and_then(|row| row.checked_mul(2))
        .map_or_else(|| "overflow".to_string(), |bytes| format!("{bytes} B"));
    println!(
        "Working set: 2 x {} x {element_size} B = {working_set} of {} B",
        selection.tile, selection.capacity_bytes
    );
    if selection.fits {
        println!("Tile fits the cache.");
    } else {
        println!("Tile does NOT fit the cache.");
    }

    Ok(())
}
