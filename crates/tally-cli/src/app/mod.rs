//! Application-level utilities for the Tally CLI.
//!
//! This module provides:
//! - Path resolution for config and expenses files
//! - The per-invocation application context

mod context;
mod resolver;

pub use context::AppContext;
