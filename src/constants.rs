//! App-wide constants.
//!
//! Centralises the tool name, environment variable names and exit codes
//! so the binary and the tests agree on them.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "ordinal";

/// Crate version, as reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ── Environment variable names ──────────────────────────────────────

/// Log filter directive (`tracing_subscriber::EnvFilter` syntax).
pub const ENV_LOG: &str = "ORDINAL_LOG";

// ── Exit codes ──────────────────────────────────────────────────────

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
/// Malformed input: wrong argument count or not an integer.
pub const EXIT_USAGE: i32 = 2;
