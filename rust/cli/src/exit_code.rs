//! Process exit codes shared across command handlers.

/// Command completed successfully.
pub const SUCCESS: i32 = 0;

/// Command failed (bad arguments, I/O failure, engine error).
pub const ERROR: i32 = 2;
