//! UI helper functions for terminal output formatting.
//!
//! This module provides utility functions for consistent user interface
//! output across CLI commands.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}
