//! Application context for the Tally CLI.
//!
//! Bundles CLI arguments with the lazily-loaded config file.

use once_cell::unsync::OnceCell;

use tally_core::{JsonFileStorage, Ledger, LedgerStorage, TallyError};

use crate::cli::{Cli, OutputArgs};
use crate::config::{read_config_or_default, TallyConfig};
use crate::ui::UiContext;

use super::resolver::{resolve_config_path, resolve_ledger_path};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<TallyConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&TallyConfig> {
        self.config
            .get_or_try_init(|| read_config_or_default(&resolve_config_path()?))
    }

    /// Currency symbol from config, or the default when config is unusable.
    pub fn currency(&self) -> String {
        self.config()
            .map(|c| c.ui.currency.clone())
            .unwrap_or_else(|_| crate::config::DEFAULT_CURRENCY.to_string())
    }

    /// UI context for this invocation.
    pub fn ui_context(&self, output: &OutputArgs) -> UiContext {
        UiContext::from_env(
            output.json,
            output.format.as_deref(),
            self.cli.no_color,
            self.cli.ascii,
        )
        .with_currency(self.currency())
    }

    /// Storage for the resolved expenses file.
    pub fn storage(&self) -> anyhow::Result<JsonFileStorage> {
        let path = resolve_ledger_path(self.cli.file.as_deref(), self.config()?);
        log::debug!("Using expenses file {}", path.display());
        Ok(JsonFileStorage::new(path))
    }

    /// Load the ledger for a one-shot command.
    ///
    /// A malformed file is an error here; the interactive session instead
    /// warns and continues with an empty ledger.
    pub fn load_ledger(&self) -> anyhow::Result<(JsonFileStorage, Ledger)> {
        let storage = self.storage()?;
        let ledger = storage.load()?;
        Ok((storage, ledger))
    }

    /// Save after a mutating command.
    pub fn save_ledger(&self, storage: &JsonFileStorage, ledger: &Ledger) -> anyhow::Result<()> {
        storage.save(ledger).map_err(|err: TallyError| {
            anyhow::Error::new(err).context("Could not save expenses")
        })
    }
}
