//! Path resolution for config and expenses files.

use std::path::PathBuf;

use tally_core::storage::DEFAULT_FILE_NAME;

use crate::config::{default_config_path, TallyConfig};

/// Resolve the config file path, checking TALLY_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("TALLY_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the expenses file.
///
/// Precedence: `--file` / `TALLY_FILE`, then `[ledger] path` from the
/// config, then `expenses.json` in the working directory.
pub fn resolve_ledger_path(file_flag: Option<&str>, config: &TallyConfig) -> PathBuf {
    if let Some(path) = file_flag.filter(|p| !p.trim().is_empty()) {
        return PathBuf::from(path);
    }
    if let Some(path) = config.ledger.path.as_deref().filter(|p| !p.trim().is_empty()) {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_FILE_NAME)
}
