use anyhow::Result;

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let table = ctx.table()?;
    let dashboard = ctx.dashboard()?;

    let view_model = presenters::present_options(table, dashboard.dataset());
    ConsoleRenderer::new(ctx.json_mode()).render(view_model)
}
