use anyhow::Result;
use deidash_engine::sample_rows;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::resolve_selection;
use crate::args::FilterArgs;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};

/// Seeded when asked for, otherwise fresh entropy per run
pub fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn handle(
    ctx: &ExecutionContext,
    filter: &FilterArgs,
    count: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    let table = ctx.table()?;
    let selection = resolve_selection(filter, table, ctx.catalog()?)?;
    let view = selection.apply(table);
    let display = &ctx.config()?.display;

    let requested = count.unwrap_or(display.sample_size);
    let sample = sample_rows(&view, requested, &mut rng(seed));

    let view_model = presenters::present_feed(
        &sample,
        requested,
        view.len(),
        display.description_word_limit,
    );
    ConsoleRenderer::new(ctx.json_mode()).render(view_model)
}
