mod commands;
mod common;

pub use commands::*;
pub use common::*;

use clap::Parser;
use std::path::PathBuf;

use crate::types::{LogLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "deidash")]
#[command(about = "Explore federal contract awards tagged with DEI themes", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Workspace directory holding config.toml [env: DEIDASH_PATH]"
    )]
    pub data_dir: Option<String>,

    #[arg(long, global = true, help = "Contract CSV to load (overrides config)")]
    pub dataset: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
