use std::fmt;

use crate::presentation::formatters::{format_currency, format_long_date};
use crate::presentation::view_models::FeedViewModel;

pub struct FeedView<'a> {
    data: &'a FeedViewModel,
}

impl<'a> FeedView<'a> {
    pub fn new(data: &'a FeedViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for FeedView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Featured Awards")?;

        if self.data.cards.is_empty() {
            writeln!(f, "\nNo contracts match the current filters.")?;
            return Ok(());
        }

        for card in &self.data.cards {
            writeln!(f)?;
            writeln!(
                f,
                "💰 {} · {}",
                format_currency(card.award_amount),
                card.recipient_name
            )?;
            writeln!(
                f,
                "   {} · {} · {}",
                card.award_id,
                card.awarding_agency_name,
                format_long_date(card.action_date)
            )?;
            writeln!(f, "   {}", card.description)?;
        }

        Ok(())
    }
}
