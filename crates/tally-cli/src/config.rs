use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default currency symbol prefixed to amounts.
pub const DEFAULT_CURRENCY: &str = "\u{00A3}";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TallyConfig {
    #[serde(default)]
    pub ledger: LedgerSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LedgerSection {
    pub path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UiSection {
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<TallyConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Read the config at `path`, falling back to defaults when it does not exist.
pub fn read_config_or_default(path: &Path) -> anyhow::Result<TallyConfig> {
    if !path.exists() {
        log::debug!("No config at {}; using defaults", path.display());
        return Ok(TallyConfig::default());
    }
    read_config(path)
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("tally"));
        }
    }
    Ok(home_dir()?.join(".config").join("tally"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: TallyConfig = toml::from_str("").unwrap();
        assert!(config.ledger.path.is_none());
        assert_eq!(config.ui.currency, DEFAULT_CURRENCY);
    }

    #[test]
    fn test_full_config() {
        let config: TallyConfig =
            toml::from_str("[ledger]\npath = \"/tmp/x.json\"\n\n[ui]\ncurrency = \"$\"\n").unwrap();
        assert_eq!(config.ledger.path.as_deref(), Some("/tmp/x.json"));
        assert_eq!(config.ui.currency, "$");
    }

    #[test]
    fn test_missing_config_file_is_default() {
        let dir = tempdir().unwrap();
        let config = read_config_or_default(&dir.path().join("nope.toml")).unwrap();
        assert!(config.ledger.path.is_none());
    }

    #[test]
    fn test_malformed_config_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ledger\npath = ").unwrap();
        assert!(read_config_or_default(&path).is_err());
    }
}
