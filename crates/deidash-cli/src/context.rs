use anyhow::Result;
use deidash_ingest::AgencyCatalog;
use deidash_runtime::{Config, Dashboard};
use deidash_types::ContractTable;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

use crate::types::OutputFormat;

pub struct ExecutionContext {
    data_dir: PathBuf,
    dataset: Option<PathBuf>,
    pub format: OutputFormat,
    dashboard: OnceCell<Dashboard>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, dataset: Option<PathBuf>, format: OutputFormat) -> Self {
        Self {
            data_dir,
            dataset,
            format,
            dashboard: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    /// Dataset given on the command line, if any
    pub fn dataset_override(&self) -> Option<&Path> {
        self.dataset.as_deref()
    }

    pub fn json_mode(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn dashboard(&self) -> Result<&Dashboard> {
        self.dashboard.get_or_try_init(|| {
            let dashboard = Dashboard::open(&self.data_dir, self.dataset.clone())?;
            Ok(dashboard)
        })
    }

    pub fn config(&self) -> Result<&Config> {
        Ok(self.dashboard()?.config())
    }

    pub fn catalog(&self) -> Result<&AgencyCatalog> {
        Ok(self.dashboard()?.catalog())
    }

    /// Loaded contract table; a load failure is returned as-is so the
    /// caller prints nothing but the error.
    pub fn table(&self) -> Result<&ContractTable> {
        Ok(self.dashboard()?.table()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_dataset_override_wins_over_config() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config {
            dataset: PathBuf::from("from-config.csv"),
            ..Config::default()
        };
        config.save_to(&Config::path_in(temp_dir.path()))?;

        let ctx = ExecutionContext::new(
            temp_dir.path().to_path_buf(),
            Some(PathBuf::from("override.csv")),
            OutputFormat::Plain,
        );
        assert_eq!(ctx.dashboard()?.dataset(), Path::new("override.csv"));
        assert_eq!(ctx.config()?.dataset, PathBuf::from("from-config.csv"));
        Ok(())
    }

    #[test]
    fn test_missing_dataset_reports_load_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        fs::create_dir_all(temp_dir.path())?;

        let ctx = ExecutionContext::new(
            temp_dir.path().to_path_buf(),
            Some(temp_dir.path().join("missing.csv")),
            OutputFormat::Json,
        );

        let err = ctx.table().unwrap_err();
        assert!(err.to_string().starts_with("Unable to load data:"));
        assert!(ctx.json_mode());
        Ok(())
    }
}
