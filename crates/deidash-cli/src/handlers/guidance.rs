use anyhow::Result;
use deidash_runtime::{Config, DEFAULT_DATASET};
use std::path::PathBuf;

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};

/// Shown when no subcommand is given; never loads the dataset.
pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let config_path = ctx.config_path();

    let dataset = match ctx.dataset_override() {
        Some(path) => path.to_path_buf(),
        None if config_path.exists() => Config::load_from(&config_path)?.dataset,
        None => PathBuf::from(DEFAULT_DATASET),
    };

    let view_model = presenters::present_guidance(&config_path, &dataset);
    ConsoleRenderer::new(ctx.json_mode()).render(view_model)
}
