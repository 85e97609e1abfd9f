use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::CreateView;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AwardCardViewModel {
    pub award_id: String,
    pub recipient_name: String,
    pub awarding_agency_name: String,
    pub award_amount: f64,
    pub action_date: NaiveDate,
    /// Word-limited description
    pub description: String,
    pub truncated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedViewModel {
    pub requested: usize,
    /// Rows the sample was drawn from
    pub population: usize,
    pub cards: Vec<AwardCardViewModel>,
}

impl CreateView for FeedViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::feed::FeedView;
        Box::new(FeedView::new(self))
    }
}
