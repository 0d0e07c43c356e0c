//! Drive one registered variant over a seeded grid and verify the result.

use serde::Serialize;

use crate::config::{MAX_CELLS, RunConfig};
use crate::error::WavefrontError;
use crate::geometry::CacheGeometry;
use crate::grid::Grid;
use crate::kernels::oracle::{RecurrenceViolation, Region, find_violations, is_wavefront_in};
use crate::kernels::tile::{TilePolicy, TileSelection};
use crate::registry::Registry;

/// Number of violations kept in a failing [`RunReport`].
pub const MAX_REPORTED_VIOLATIONS: usize = 8;

/// Outcome of [`run_variant`].
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub variant: String,
    pub rows: usize,
    pub cols: usize,
    pub geometry: CacheGeometry,
    pub tile: TileSelection,
    pub coverage: Region,
    pub boundary_intact: bool,
    pub verified: bool,
    pub violations: Vec<RecurrenceViolation>,
}

impl RunReport {
    pub fn passed(&self) -> bool {
        self.boundary_intact && self.verified
    }
}

/// Seed a `rows x cols` grid, run `config.variant` on it and check the
/// boundary and the recurrence over the variant's coverage.
///
/// # Errors
///
/// Returns [`WavefrontError::InvalidGeometry`] for an out-of-range geometry,
/// [`WavefrontError::Config`] for zero extents or a grid larger than
/// [`MAX_CELLS`], or
/// [`WavefrontError::UnknownVariant`] if the registry has no such name.
pub fn run_variant(registry: &Registry, config: &RunConfig) -> Result<RunReport, WavefrontError> {
    config.geometry.validate()?;
    let (rows, cols) = (config.grid.rows, config.grid.cols);
    if rows == 0 || cols == 0 {
        return Err(WavefrontError::Config(format!(
            "grid extents must be at least 1x1, got {rows}x{cols}"
        )));
    }
    if rows.checked_mul(cols).is_none_or(|cells| cells > MAX_CELLS) {
        return Err(WavefrontError::Config(format!(
            "grid {rows}x{cols} exceeds {MAX_CELLS} cells"
        )));
    }
    let variant = registry
        .get(&config.variant)
        .ok_or_else(|| WavefrontError::UnknownVariant(config.variant.clone()))?;

    let geometry = config.geometry;
    let tile = TilePolicy::default().select(&geometry);
    let coverage = variant.covered_region(rows, cols, &geometry);

    let mut grid = Grid::seeded(rows, cols);
    let first_row = grid.first_row().to_vec();
    let first_col = grid.first_column();

    tracing::info!(variant = variant.name, rows, cols, %geometry, "running variant");
    variant.run(rows, cols, grid.as_mut_slice(), &geometry);

    let boundary_intact = grid.first_row() == first_row.as_slice() && grid.first_column() == first_col;
    let verified = is_wavefront_in(rows, cols, grid.as_slice(), &coverage);
    let violations = if verified {
        Vec::new()
    } else {
        find_violations(rows, cols, grid.as_slice(), &coverage, MAX_REPORTED_VIOLATIONS)
    };
    if !boundary_intact {
        tracing::warn!(variant = variant.name, "boundary row or column was modified");
    }
    tracing::debug!(variant = variant.name, verified, %coverage, "oracle finished");

    Ok(RunReport {
        variant: variant.name.to_string(),
        rows,
        cols,
        geometry,
        tile,
        coverage,
        boundary_intact,
        verified,
        violations,
    })
}
