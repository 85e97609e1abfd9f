use chrono::NaiveDate;
use serde::Serialize;

use super::common::StatusLevel;
use super::feed::FeedViewModel;
use super::summary::SummaryViewModel;
use super::table::TableViewModel;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeToggleViewModel {
    pub label: String,
    pub selected: bool,
}

/// Current value of every filter control plus the choices behind it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterPanelViewModel {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub agency: String,
    pub agency_position: usize,
    pub agency_choices: usize,
    pub size: String,
    pub themes: Vec<ThemeToggleViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusBarViewModel {
    pub level: StatusLevel,
    pub message: String,
}

/// Everything one frame of the interactive dashboard shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardScreenViewModel {
    pub filters: FilterPanelViewModel,
    pub summary: SummaryViewModel,
    pub table: TableViewModel,
    pub feed: FeedViewModel,
    pub status: StatusBarViewModel,
}
