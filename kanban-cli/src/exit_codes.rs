//! Process exit codes

/// Command completed
pub const EXIT_SUCCESS: i32 = 0;

/// Command failed
pub const EXIT_ERROR: i32 = 1;

/// Bad arguments; clap exits with the same code for its own parse errors
pub const EXIT_USAGE: i32 = 2;

/// Interrupted with Ctrl-C
pub const EXIT_INTERRUPTED: i32 = 130;
