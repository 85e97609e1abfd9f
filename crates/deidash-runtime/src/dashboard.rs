use crate::{Config, Result};
use deidash_ingest::{AgencyCatalog, load_table};
use deidash_types::ContractTable;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// Application context for one process: configuration plus the contract
/// table, which is read from disk at most once and never mutated after.
pub struct Dashboard {
    config: Config,
    dataset: PathBuf,
    catalog: AgencyCatalog,
    table: OnceCell<ContractTable>,
}

impl Dashboard {
    /// `dataset` overrides the configured path when given.
    pub fn new(config: Config, dataset: Option<PathBuf>) -> Result<Self> {
        let catalog = config.catalog()?;
        let dataset = dataset.unwrap_or_else(|| config.dataset.clone());

        Ok(Self {
            config,
            dataset,
            catalog,
            table: OnceCell::new(),
        })
    }

    /// Read `config.toml` from the data dir (defaults when absent).
    pub fn open(data_dir: &Path, dataset: Option<PathBuf>) -> Result<Self> {
        let config = Config::load_from(&Config::path_in(data_dir))?;
        Self::new(config, dataset)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dataset(&self) -> &Path {
        &self.dataset
    }

    pub fn catalog(&self) -> &AgencyCatalog {
        &self.catalog
    }

    pub fn is_loaded(&self) -> bool {
        self.table.get().is_some()
    }

    /// The normalized table. The first call loads the dataset; later calls
    /// return the same table without touching the file. A failed load is
    /// not cached, so the error is reported again on the next call.
    pub fn table(&self) -> Result<&ContractTable> {
        self.table.get_or_try_init(|| {
            tracing::debug!(path = %self.dataset.display(), "loading dataset");
            let table = load_table(&self.dataset, &self.catalog)?;
            Ok(table)
        })
    }
}
