use std::fmt;

use crate::presentation::formatters::{
    format_count, format_currency, format_iso_date, single_line, truncate,
};
use crate::presentation::view_models::TableViewModel;

const ID_WIDTH: usize = 14;
const RECIPIENT_WIDTH: usize = 28;
const AGENCY_WIDTH: usize = 32;
const AMOUNT_WIDTH: usize = 18;
const DESCRIPTION_WIDTH: usize = 48;

pub struct TableView<'a> {
    data: &'a TableViewModel,
}

impl<'a> TableView<'a> {
    pub fn new(data: &'a TableViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for TableView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;

        writeln!(
            f,
            "Page {} of {} ({} contracts, sorted by {} {})",
            data.page,
            data.total_pages.max(1),
            format_count(data.total_rows),
            data.sort,
            if data.descending { "descending" } else { "ascending" }
        )?;
        writeln!(f)?;

        if data.rows.is_empty() {
            writeln!(f, "No contracts on this page.")?;
            return Ok(());
        }

        writeln!(
            f,
            "{:<ID_WIDTH$} {:<RECIPIENT_WIDTH$} {:<AGENCY_WIDTH$} {:>AMOUNT_WIDTH$} {:<10} DESCRIPTION",
            "AWARD ID", "RECIPIENT", "AGENCY", "AMOUNT", "DATE"
        )?;
        writeln!(
            f,
            "{}",
            "-".repeat(ID_WIDTH + RECIPIENT_WIDTH + AGENCY_WIDTH + AMOUNT_WIDTH + DESCRIPTION_WIDTH + 16)
        )?;

        for row in &data.rows {
            writeln!(
                f,
                "{:<ID_WIDTH$} {:<RECIPIENT_WIDTH$} {:<AGENCY_WIDTH$} {:>AMOUNT_WIDTH$} {:<10} {}",
                truncate(&row.award_id, ID_WIDTH),
                truncate(&row.recipient_name, RECIPIENT_WIDTH),
                truncate(&row.awarding_agency_name, AGENCY_WIDTH),
                format_currency(row.award_amount),
                format_iso_date(row.action_date),
                truncate(&single_line(&row.award_description), DESCRIPTION_WIDTH),
            )?;
        }

        Ok(())
    }
}
