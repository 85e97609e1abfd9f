use anyhow::{Context, Result};
use deidash_ingest::write_csv;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use super::resolve_selection;
use crate::args::FilterArgs;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(ctx: &ExecutionContext, filter: &FilterArgs, output: &Path) -> Result<()> {
    let table = ctx.table()?;
    let selection = resolve_selection(filter, table, ctx.catalog()?)?;
    let view = selection.apply(table);

    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let rows_written = write_csv(BufWriter::new(file), table.schema(), view.iter())
        .with_context(|| format!("Failed to write {}", output.display()))?;
    tracing::info!(rows = rows_written, path = %output.display(), "exported contracts");

    let view_model = presenters::present_export(output, rows_written);
    ConsoleRenderer::new(ctx.json_mode()).render(view_model)
}
