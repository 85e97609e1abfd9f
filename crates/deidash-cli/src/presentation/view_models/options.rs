use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::CreateView;

pub const ALL_OPTION: &str = "All";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateBoundsViewModel {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeOptionViewModel {
    pub label: String,
    pub column: String,
}

/// Values offered by each filter control
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionsViewModel {
    pub dataset: String,
    pub total_rows: usize,
    pub date_bounds: Option<DateBoundsViewModel>,
    /// `All` followed by canonical agency names, sorted
    pub agencies: Vec<String>,
    /// `All` followed by the size labels present, sorted
    pub size_categories: Vec<String>,
    pub themes: Vec<ThemeOptionViewModel>,
}

impl CreateView for OptionsViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::options::OptionsView;
        Box::new(OptionsView::new(self))
    }
}
