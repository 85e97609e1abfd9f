//! TestWorld pattern for declarative integration test setup.
//!
//! Each world owns a temp directory holding the data dir (`.deidash`) and
//! serves as the working directory for CLI runs, so relative dataset paths
//! resolve inside it.

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::CsvFixture;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use deidash_testing::{CsvFixture, TestWorld};
///
/// let world = TestWorld::new().with_dataset(&CsvFixture::standard());
///
/// let result = world.run(&["summary"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    cwd: PathBuf,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path().to_path_buf();
        let data_dir = base_path.join(".deidash");

        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            cwd: base_path,
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write `fixture` as the default dataset file in the working directory.
    pub fn with_dataset(self, fixture: &CsvFixture) -> Self {
        self.write_file("dei_contracts_master.csv", &fixture.to_csv())
            .expect("Failed to write dataset");
        self
    }

    /// Write a file relative to the working directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.cwd.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// Adds `--data-dir`, runs in the world's working directory and clears
    /// environment that would leak the developer's setup into the test.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());

        cmd.current_dir(&self.cwd);
        cmd.env_remove("DEIDASH_PATH").env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the `deidash` binary. Output is plain text unless `args` pick a
    /// `--format`.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("deidash")
            .map_err(|e| anyhow::anyhow!("Failed to find deidash binary: {}", e))?;

        self.configure_command(&mut cmd);
        if !args.contains(&"--format") {
            cmd.arg("--format").arg("plain");
        }
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Run with `--format json` and parse stdout.
    pub fn run_json(&self, args: &[&str]) -> Result<serde_json::Value> {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);

        let result = self.run(&full)?;
        if !result.success() {
            anyhow::bail!("deidash {:?} failed: {}", args, result.stderr);
        }
        result.json()
    }
}

#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
