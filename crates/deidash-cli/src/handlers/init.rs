use anyhow::Result;
use deidash_runtime::Config;

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};

/// Write `config.toml` with defaults, taking `--dataset` when given.
/// An existing file is left alone unless `force` is set.
pub fn handle(ctx: &ExecutionContext, force: bool) -> Result<()> {
    let config_path = ctx.config_path();
    let exists = config_path.exists();
    let written = !exists || force;

    let config = if written {
        let mut config = Config::default();
        if let Some(dataset) = ctx.dataset_override() {
            config.dataset = dataset.to_path_buf();
        }
        config.save_to(&config_path)?;
        tracing::info!(path = %config_path.display(), "wrote configuration");
        config
    } else {
        Config::load_from(&config_path)?
    };

    let view_model = presenters::present_init(&config_path, &config.dataset, written);
    ConsoleRenderer::new(ctx.json_mode()).render(view_model)
}
