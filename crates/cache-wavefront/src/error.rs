use thiserror::Error;

#[derive(Debug, Error)]
pub enum WavefrontError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid cache geometry: {field} = {value} ({reason})")]
    InvalidGeometry {
        field: &'static str,
        value: u32,
        reason: &'static str,
    },

    #[error("Grid dimension mismatch: {rows}x{cols} needs {} cells, buffer has {len}", .rows * .cols)]
    DimensionMismatch { rows: usize, cols: usize, len: usize },

    #[error("Inconsistent boundary: {0}")]
    Boundary(String),

    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

#[derive(Debug, Clone)]
pub struct Violation {
    pub severity: Severity,
    pub rule: String,
    pub message: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
            Severity::Info => "INFO",
        };
        write!(f, "[{prefix}] {}: {}", self.rule, self.message)
    }
}
