//! Exit codes the launcher uses for its own failures.
//!
//! When the child runs to completion, the launcher exits with the child's
//! code instead. The sentinels follow the shell conventions for "command not
//! found" (127) and "found but not executable" (126).

/// Nothing went wrong (used by `--esplaunch-dry-run`).
pub const SUCCESS: i32 = 0;

/// Configuration or command-line problem; nothing was launched.
pub const USAGE_ERROR: i32 = 2;

/// The child was started but relaying its output or waiting on it failed.
pub const RELAY_FAILED: i32 = 125;

/// The target exists but the OS could not start it.
pub const SPAWN_FAILED: i32 = 126;

/// The target executable does not exist at the configured path.
pub const EXECUTABLE_NOT_FOUND: i32 = 127;
