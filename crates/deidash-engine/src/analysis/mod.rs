// Aggregations over a filtered view. Every function is total: an empty view
// produces zero metrics and empty series.

pub mod agencies;
pub mod metrics;
pub mod themes;
pub mod timeline;

pub use agencies::{AgencyTotal, DEFAULT_TOP_AGENCIES, top_agencies};
pub use metrics::{SummaryMetrics, compute_metrics};
pub use themes::{ThemeCount, theme_distribution};
pub use timeline::{MonthlyPoint, monthly_timeline};
