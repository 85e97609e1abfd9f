use anyhow::Result;
use deidash_engine::{SnapshotOptions, build_snapshot};

use super::resolve_selection;
use crate::args::FilterArgs;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(ctx: &ExecutionContext, filter: &FilterArgs, top: Option<usize>) -> Result<()> {
    let table = ctx.table()?;
    let selection = resolve_selection(filter, table, ctx.catalog()?)?;

    let options = SnapshotOptions {
        top_agency_limit: top.unwrap_or(ctx.config()?.display.top_agency_limit),
    };
    let snapshot = build_snapshot(table, &selection, options);
    tracing::debug!(
        contracts = snapshot.metrics.contract_count,
        months = snapshot.timeline.len(),
        "built summary"
    );

    let filters = presenters::present_filters(&selection, table.schema());
    let view_model = presenters::present_summary(&snapshot, filters, table.len());

    ConsoleRenderer::new(ctx.json_mode()).render(view_model)
}
