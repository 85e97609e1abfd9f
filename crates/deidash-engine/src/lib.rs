// Derives every dashboard view from an immutable ContractTable and a
// FilterSelection. Nothing here mutates the table or performs I/O.

pub mod analysis;
pub mod filter;
pub mod sample;
pub mod snapshot;
pub mod table;

pub use analysis::{
    AgencyTotal, DEFAULT_TOP_AGENCIES, MonthlyPoint, SummaryMetrics, ThemeCount,
    compute_metrics, monthly_timeline, theme_distribution, top_agencies,
};
pub use filter::{DateRange, FilterSelection, FilteredView, Selection};
pub use sample::{DEFAULT_SAMPLE_SIZE, DEFAULT_WORD_LIMIT, sample_rows, truncate_words};
pub use snapshot::{DashboardSnapshot, SnapshotOptions, build_snapshot};
pub use table::{
    DEFAULT_PAGE_SIZE, SortDirection, SortKey, TablePage, TableQuery, query_table, sort_rows,
};
