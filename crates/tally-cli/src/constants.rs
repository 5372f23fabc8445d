//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// A category filter matched nothing.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input (bad amount, bad or out-of-range index).
    pub const INVALID_INPUT: i32 = 4;

    /// The expenses file could not be read or written.
    pub const STORAGE: i32 = 5;
}
