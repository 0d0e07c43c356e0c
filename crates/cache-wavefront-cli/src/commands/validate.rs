use std::path::Path;

use cache_wavefront::config::{parse_config, validate_config};
use cache_wavefront::error::Severity;
use cache_wavefront::registry::Registry;

pub fn run(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_config(path)?;
    let violations = validate_config(&config, &Registry::builtin());

    let errors = violations
        .iter()
        .filter(|v| v.severity == Severity::Error)
        .count();
    let warnings = violations
        .iter()
        .filter(|v| v.severity == Severity::Warning)
        .count();

    for v in &violations {
        println!("{v}");
    }

    println!("\n{errors} error(s), {warnings} warning(s)");

    if errors == 0 {
        println!("Config is valid.");
        Ok(())
    } else {
        Err(format!("Config has {errors} validation error(s)").into())
    }
}
