use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::CreateView;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractRowViewModel {
    pub award_id: String,
    pub recipient_name: String,
    pub awarding_agency_name: String,
    pub award_amount: f64,
    pub action_date: NaiveDate,
    pub award_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableViewModel {
    /// Column the rows are sorted by
    pub sort: String,
    pub descending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_rows: usize,
    pub rows: Vec<ContractRowViewModel>,
}

impl CreateView for TableViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::table::TableView;
        Box::new(TableView::new(self))
    }
}
