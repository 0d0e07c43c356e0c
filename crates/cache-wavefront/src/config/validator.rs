use crate::config::types::RunConfig;
use crate::error::{Severity, Violation};
use crate::kernels::tile::TilePolicy;
use crate::kernels::wavefront::blocked_extents;
use crate::registry::Registry;

/// Largest grid a run configuration may request.
pub const MAX_CELLS: usize = 1 << 28;

/// Validate a parsed run configuration against a registry.
///
/// Returns a list of violations. If any violation has
/// [`Severity::Error`], the configuration cannot be run.
pub fn validate_config(config: &RunConfig, registry: &Registry) -> Vec<Violation> {
    let mut violations = Vec::new();

    validate_grid(config, &mut violations);
    let geometry_ok = validate_geometry(config, &mut violations);
    validate_variant(config, registry, &mut violations);
    if geometry_ok {
        validate_tiling(config, &mut violations);
    }

    violations
}

fn validate_grid(config: &RunConfig, violations: &mut Vec<Violation>) {
    let grid = config.grid;
    if grid.rows == 0 {
        violations.push(Violation {
            severity: Severity::Error,
            rule: "CFG-001".to_string(),
            message: "grid.rows must be at least 1".to_string(),
            location: Some("grid.rows".to_string()),
        });
    }
    if grid.cols == 0 {
        violations.push(Violation {
            severity: Severity::Error,
            rule: "CFG-002".to_string(),
            message: "grid.cols must be at least 1".to_string(),
            location: Some("grid.cols".to_string()),
        });
    }
    match grid.rows.checked_mul(grid.cols) {
        Some(cells) if cells <= MAX_CELLS => {}
        _ => violations.push(Violation {
            severity: Severity::Error,
            rule: "CFG-003".to_string(),
            message: format!(
                "grid {}x{} exceeds {MAX_CELLS} cells",
                grid.rows, grid.cols
            ),
            location: Some("grid".to_string()),
        }),
    }
}

fn validate_geometry(config: &RunConfig, violations: &mut Vec<Violation>) -> bool {
    match config.geometry.validate() {
        Ok(()) => true,
        Err(e) => {
            violations.push(Violation {
                severity: Severity::Error,
                rule: "CFG-004".to_string(),
                message: e.to_string(),
                location: Some("geometry".to_string()),
            });
            false
        }
    }
}

fn validate_variant(config: &RunConfig, registry: &Registry, violations: &mut Vec<Violation>) {
    if registry.get(&config.variant).is_none() {
        violations.push(Violation {
            severity: Severity::Error,
            rule: "CFG-005".to_string(),
            message: format!(
                "unknown variant '{}' (registered: {})",
                config.variant,
                registry.names().join(", ")
            ),
            location: Some("variant".to_string()),
        });
    }
}

fn validate_tiling(config: &RunConfig, violations: &mut Vec<Violation>) {
    let selection = TilePolicy::default().select(&config.geometry);
    if !selection.fits {
        violations.push(Violation {
            severity: Severity::Warning,
            rule: "CFG-006".to_string(),
            message: format!(
                "tile {} does not fit a {} B cache (2 * tile * element size exceeds capacity)",
                selection.tile, selection.capacity_bytes
            ),
            location: Some("geometry".to_string()),
        });
    }

    let (me, ne) = blocked_extents(config.grid.rows, config.grid.cols, selection.tile);
    if config.grid.rows > 1 && config.grid.cols > 1 && (me == 0 || ne == 0) {
        violations.push(Violation {
            severity: Severity::Warning,
            rule: "CFG-007".to_string(),
            message: format!(
                "tile {} exceeds the {}x{} interior; blocked variants run no full tile",
                selection.tile,
                config.grid.rows - 1,
                config.grid.cols - 1
            ),
            location: Some("grid".to_string()),
        });
    }
}
