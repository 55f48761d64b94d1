//! Exit code constants for the CLI application.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// Usage, configuration, I/O and conversion failures.
pub const ERROR: i32 = 2;
