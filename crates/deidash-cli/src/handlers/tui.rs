//! Interactive dashboard handler
//!
//! Owns the loaded table and the filter state. Every action re-runs the
//! whole filter, aggregate and present pass and swaps in a new screen.

use anyhow::{Result, bail};
use deidash_engine::{
    FilterSelection, SnapshotOptions, TableQuery, build_snapshot, query_table, sample_rows,
};
use deidash_runtime::DisplayConfig;
use deidash_types::ContractTable;
use is_terminal::IsTerminal;
use rand::rngs::StdRng;

use super::{FilterState, feed, resolve_selection};
use crate::args::FilterArgs;
use crate::context::ExecutionContext;
use crate::presentation::presenters::{
    feed_content, present_filter_panel, present_filters, present_screen, summary_content,
    table_content,
};
use crate::presentation::renderers::{ScreenSource, TuiRenderer};
use crate::presentation::view_models::DashboardScreenViewModel;
use crate::presentation::views::tui::DashboardAction;

pub struct DashboardApp<'a> {
    table: &'a ContractTable,
    filters: FilterState,
    query: TableQuery,
    display: DisplayConfig,
    rng: StdRng,
    screen: DashboardScreenViewModel,
}

impl<'a> DashboardApp<'a> {
    pub fn new(
        table: &'a ContractTable,
        selection: &FilterSelection,
        display: DisplayConfig,
        mut rng: StdRng,
    ) -> Self {
        let filters = FilterState::new(table, selection);
        // One scrollable page holding every filtered row
        let query = TableQuery {
            page_size: table.len().max(1),
            ..TableQuery::default()
        };
        let screen = build_screen(table, &filters, &query, &display, &mut rng);

        Self {
            table,
            filters,
            query,
            display,
            rng,
            screen,
        }
    }

    fn refresh(&mut self) {
        self.screen = build_screen(
            self.table,
            &self.filters,
            &self.query,
            &self.display,
            &mut self.rng,
        );
    }
}

impl ScreenSource for DashboardApp<'_> {
    fn screen(&self) -> &DashboardScreenViewModel {
        &self.screen
    }

    fn apply(&mut self, action: DashboardAction) {
        tracing::debug!(?action, "dashboard action");
        match action {
            DashboardAction::NextAgency => self.filters.next_agency(),
            DashboardAction::PrevAgency => self.filters.prev_agency(),
            DashboardAction::NextSize => self.filters.next_size(),
            DashboardAction::PrevSize => self.filters.prev_size(),
            DashboardAction::ToggleTheme(index) => {
                if let Some(id) = self.table.schema().ids().nth(index) {
                    self.filters.toggle_theme(id);
                }
            }
            DashboardAction::ShiftFrom(months) => self.filters.shift_from(months),
            DashboardAction::ShiftTo(months) => self.filters.shift_to(months),
            DashboardAction::CycleSort => self.query.sort = self.query.sort.next(),
            DashboardAction::FlipSort => self.query.direction = self.query.direction.flip(),
            DashboardAction::Resample => {}
            DashboardAction::Reset => self.filters.reset(),
        }
        self.refresh();
    }
}

fn build_screen(
    table: &ContractTable,
    filters: &FilterState,
    query: &TableQuery,
    display: &DisplayConfig,
    rng: &mut StdRng,
) -> DashboardScreenViewModel {
    let selection = filters.selection();
    let schema = table.schema();

    let snapshot = build_snapshot(
        table,
        &selection,
        SnapshotOptions {
            top_agency_limit: display.top_agency_limit,
        },
    );
    let view = selection.apply(table);
    let page = query_table(&view, query);
    let sample = sample_rows(&view, display.sample_size, rng);

    present_screen(
        present_filter_panel(&selection, schema, filters.agency_position()),
        summary_content(&snapshot, present_filters(&selection, schema), table.len()),
        table_content(&page, query),
        feed_content(
            &sample,
            display.sample_size,
            view.len(),
            display.description_word_limit,
        ),
    )
}

pub fn handle(ctx: &ExecutionContext, filter: &FilterArgs, seed: Option<u64>) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("The interactive dashboard needs a terminal; try `deidash summary` instead");
    }

    let table = ctx.table()?;
    let selection = resolve_selection(filter, table, ctx.catalog()?)?;
    let display = ctx.config()?.display.clone();

    let mut app = DashboardApp::new(table, &selection, display, feed::rng(seed));
    TuiRenderer::new().run(&mut app)
}
