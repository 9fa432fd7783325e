//! # Cfg Command
//!
//! Prints the resolved configuration as pretty JSON, with each value
//! annotated by where it came from (default, file, or env).

use crate::config;
use crate::error::CliError;
use serde_json::json;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;

    let doc = json!({
        "seed": {
            "value": resolved.config.seed,
            "source": resolved.sources.seed,
        },
        "log_dir": {
            "value": resolved.config.log_dir,
            "source": resolved.sources.log_dir,
        },
    });
    let rendered = serde_json::to_string_pretty(&doc)
        .map_err(|e| CliError::Config(format!("Failed to render config: {}", e)))?;
    writeln!(out, "{}", rendered)?;
    Ok(())
}
