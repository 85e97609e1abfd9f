use anyhow::Result;
use deidash_engine::{SortDirection, TableQuery, query_table};

use super::resolve_selection;
use crate::args::FilterArgs;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::SortColumn;

pub struct TableOptions {
    pub sort: SortColumn,
    pub ascending: bool,
    pub page: usize,
    pub page_size: Option<usize>,
}

pub fn handle(ctx: &ExecutionContext, filter: &FilterArgs, options: TableOptions) -> Result<()> {
    let table = ctx.table()?;
    let selection = resolve_selection(filter, table, ctx.catalog()?)?;
    let view = selection.apply(table);

    let query = TableQuery {
        sort: options.sort.into(),
        direction: if options.ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        },
        page: options.page,
        page_size: options
            .page_size
            .unwrap_or(ctx.config()?.display.page_size),
    };
    let page = query_table(&view, &query);

    let view_model = presenters::present_table(&page, &query);
    ConsoleRenderer::new(ctx.json_mode()).render(view_model)
}
