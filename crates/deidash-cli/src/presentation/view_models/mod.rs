pub mod common;
pub mod feed;
pub mod options;
pub mod result;
pub mod summary;
pub mod system;
pub mod table;
pub mod tui;

use std::fmt;

pub use common::{Guidance, StatusBadge, StatusLevel};
pub use feed::{AwardCardViewModel, FeedViewModel};
pub use options::{ALL_OPTION, DateBoundsViewModel, OptionsViewModel, ThemeOptionViewModel};
pub use result::CommandResultViewModel;
pub use summary::{
    AgencyBarViewModel, FilterSummaryViewModel, MetricsViewModel, MonthlyPointViewModel,
    SummaryViewModel, ThemeBarViewModel,
};
pub use system::{ExportViewModel, GuidanceViewModel, InitViewModel};
pub use table::{ContractRowViewModel, TableViewModel};
pub use tui::{
    DashboardScreenViewModel, FilterPanelViewModel, StatusBarViewModel, ThemeToggleViewModel,
};

/// Bridge from a view model to its text view
pub trait CreateView {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a>;
}
