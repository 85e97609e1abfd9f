use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::CreateView;

/// The active filters as the user would read them back
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterSummaryViewModel {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    /// `None` means every agency
    pub agency: Option<String>,
    /// Bucket label; `None` means every size
    pub size: Option<String>,
    /// Selected theme labels; empty means no theme restriction
    pub themes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsViewModel {
    pub contract_count: usize,
    pub total_award_amount: f64,
    pub unique_recipients: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeBarViewModel {
    pub label: String,
    pub column: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgencyBarViewModel {
    pub agency: String,
    pub total_award_amount: f64,
    pub contract_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPointViewModel {
    /// `YYYY-MM`
    pub month: String,
    pub total_award_amount: f64,
    pub contract_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryViewModel {
    pub filters: FilterSummaryViewModel,
    /// Rows in the whole dataset, before filtering
    pub dataset_rows: usize,
    pub metrics: MetricsViewModel,
    pub themes: Vec<ThemeBarViewModel>,
    /// Ascending by total, largest last
    pub top_agencies: Vec<AgencyBarViewModel>,
    pub timeline: Vec<MonthlyPointViewModel>,
}

impl CreateView for SummaryViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::summary::SummaryView;
        Box::new(SummaryView::new(self))
    }
}
