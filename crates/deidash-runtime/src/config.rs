use crate::{Error, Result};
use deidash_ingest::AgencyCatalog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATASET: &str = "dei_contracts_master.csv";
pub const CONFIG_FILE: &str = "config.toml";

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. DEIDASH_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.deidash (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("DEIDASH_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("deidash"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".deidash"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Cards in the featured awards feed
    pub sample_size: usize,
    pub description_word_limit: usize,
    pub top_agency_limit: usize,
    pub page_size: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            sample_size: 5,
            description_word_limit: 500,
            top_agency_limit: 10,
            page_size: 25,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset CSV; relative paths resolve against the working directory
    pub dataset: PathBuf,
    pub display: DisplayConfig,
    /// Extra raw -> canonical agency names merged over the built-in table
    pub agency_aliases: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from(DEFAULT_DATASET),
            display: DisplayConfig::default(),
            agency_aliases: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE)
    }

    /// Built-in synonyms plus the configured aliases
    pub fn catalog(&self) -> Result<AgencyCatalog> {
        let catalog = AgencyCatalog::builtin().with_aliases(
            self.agency_aliases
                .iter()
                .map(|(raw, canonical)| (raw.as_str(), canonical.as_str())),
        )?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.dataset, PathBuf::from(DEFAULT_DATASET));
        assert_eq!(config.display.sample_size, 5);
        assert_eq!(config.display.description_word_limit, 500);
        assert_eq!(config.display.top_agency_limit, 10);
        assert!(config.agency_aliases.is_empty());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(&temp_dir.path().join("nested"));

        let mut config = Config {
            dataset: PathBuf::from("/data/contracts.csv"),
            ..Config::default()
        };
        config.display.page_size = 50;
        config
            .agency_aliases
            .insert("Dept X (X)".to_string(), "Dept X".to_string());

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&config_path, "[display]\nsample_size = 3\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.display.sample_size, 3);
        assert_eq!(config.display.page_size, 25);
        assert_eq!(config.dataset, PathBuf::from(DEFAULT_DATASET));
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&config_path, "display = 3")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        Ok(())
    }

    #[test]
    fn test_catalog_merges_aliases() -> Result<()> {
        let mut config = Config::default();
        config
            .agency_aliases
            .insert("Dept X (X)".to_string(), "Dept X".to_string());

        let catalog = config.catalog()?;
        assert_eq!(catalog.canonicalize("Dept X (X)"), "Dept X");
        assert_eq!(catalog.canonicalize("Department of Justice (DOJ)"), "Department of Justice");
        Ok(())
    }

    #[test]
    fn test_catalog_rejects_non_idempotent_aliases() {
        let mut config = Config::default();
        config.agency_aliases.insert(
            "DOJ".to_string(),
            "Department of Justice (DOJ)".to_string(),
        );

        assert!(matches!(config.catalog(), Err(Error::Alias(_))));
    }

    #[test]
    fn test_explicit_workspace_path_wins() -> Result<()> {
        let path = resolve_workspace_path(Some("/tmp/deidash-explicit"))?;
        assert_eq!(path, PathBuf::from("/tmp/deidash-explicit"));
        Ok(())
    }
}
