use std::path::Path;

use cache_wavefront::config::{RunConfig, parse_config};
use cache_wavefront::registry::Registry;
use cache_wavefront::run::{RunReport, run_variant};

use super::resolve_geometry;
use crate::GeometryArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}', expected 'text' or 'json'")),
        }
    }
}

/// Command-line values that take precedence over the config file.
pub struct Overrides {
    pub variant: Option<String>,
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub geometry: GeometryArgs,
}

pub fn run(
    config_path: Option<&Path>,
    overrides: &Overrides,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match config_path {
        Some(p) => {
            let config = parse_config(p)?;
            tracing::debug!(path = %p.display(), "loaded run config");
            config
        }
        None => RunConfig::default(),
    };
    if let Some(ref v) = overrides.variant {
        config.variant.clone_from(v);
    }
    if let Some(rows) = overrides.rows {
        config.grid.rows = rows;
    }
    if let Some(cols) = overrides.cols {
        config.grid.cols = cols;
    }
    config.geometry = resolve_geometry(&overrides.geometry, config.geometry)?;

    let report = run_variant(&Registry::builtin(), &config)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", format_text(&report)),
    }

    if report.passed() {
        Ok(())
    } else {
        Err(format!("variant '{}' failed verification", report.variant).into())
    }
}

fn format_text(report: &RunReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Variant: {} ({}x{})\n",
        report.variant, report.rows, report.cols
    ));
    out.push_str(&format!("Geometry: {}\n", report.geometry));
    out.push_str(&format!(
        "Tile: {} (limit {}, {})\n",
        report.tile.tile,
        report.tile.row_limit,
        if report.tile.fits { "fits" } else { "does not fit" }
    ));
    out.push_str(&format!(
        "Coverage: {} ({} cells)\n",
        report.coverage,
        report.coverage.cell_count()
    ));
    out.push_str(&format!(
        "Boundary: {}\n",
        if report.boundary_intact { "intact" } else { "MODIFIED" }
    ));
    out.push_str(&format!(
        "Recurrence: {}\n",
        if report.verified { "verified" } else { "VIOLATED" }
    ));
    for v in &report.violations {
        out.push_str(&format!("  {v}\n"));
    }
    out
}
