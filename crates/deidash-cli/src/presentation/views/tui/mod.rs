//! Ratatui widgets for the interactive dashboard.
//!
//! Views borrow a view model and only map it onto widgets; cursor and
//! scroll state live in `components`.

pub mod components;
pub mod contracts;
pub mod feed;
pub mod filter_panel;
pub mod header;
pub mod overview;
pub mod status_bar;

pub use components::{ContractsComponent, DashboardAction, FeedComponent, FilterPanelComponent};
pub use contracts::ContractTableView;
pub use feed::FeedPanelView;
pub use filter_panel::FilterPanelView;
pub use header::PageTabsView;
pub use overview::OverviewView;
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Overview,
    Table,
    Feed,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Overview, Page::Table, Page::Feed];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::Table => "Contracts",
            Page::Feed => "Featured Awards",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Page::Overview => 0,
            Page::Table => 1,
            Page::Feed => 2,
        }
    }

    pub fn next(&self) -> Page {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Page {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
    }
}

pub(crate) fn key_hint(key: &str) -> ratatui::text::Span<'static> {
    ratatui::text::Span::styled(
        format!("[{}]", key),
        ratatui::style::Style::default().fg(Color::Yellow),
    )
}
