use serde::{Deserialize, Serialize};

use crate::geometry::CacheGeometry;

/// Default grid side for a run.
pub const DEFAULT_GRID_SIDE: usize = 64;

/// Default variant name for a run.
pub const DEFAULT_VARIANT: &str = "blocked";

/// A run configuration: which variant to drive over which grid and cache.
///
/// Every section is optional in YAML; missing sections take the defaults
/// (`s=5 E=1 b=5`, 64x64, `blocked`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub geometry: CacheGeometry,
    #[serde(default)]
    pub grid: GridSpec,
    #[serde(default = "default_variant")]
    pub variant: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            geometry: CacheGeometry::default(),
            grid: GridSpec::default(),
            variant: default_variant(),
        }
    }
}

/// Grid extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_SIDE,
            cols: DEFAULT_GRID_SIDE,
        }
    }
}

fn default_variant() -> String {
    DEFAULT_VARIANT.to_string()
}
