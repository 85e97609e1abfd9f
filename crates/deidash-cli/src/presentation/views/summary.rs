use std::fmt;

use crate::presentation::formatters::{
    bar, format_count, format_currency, format_iso_date, terminal_width,
};
use crate::presentation::view_models::{FilterSummaryViewModel, SummaryViewModel};

const MAX_BAR_WIDTH: usize = 40;

pub struct SummaryView<'a> {
    data: &'a SummaryViewModel,
}

impl<'a> SummaryView<'a> {
    pub fn new(data: &'a SummaryViewModel) -> Self {
        Self { data }
    }

    fn bar_width(&self, label_width: usize) -> usize {
        // label + gap + bar + gap + value ("$999,999,999.99")
        terminal_width()
            .saturating_sub(label_width + 24)
            .clamp(10, MAX_BAR_WIDTH)
    }
}

impl<'a> fmt::Display for SummaryView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;

        writeln!(f, "DEI Contract Dashboard")?;
        writeln!(f, "{}", FilterLine::new(&data.filters))?;
        writeln!(f)?;

        writeln!(
            f,
            "  {:<20} {} of {}",
            "Contracts",
            format_count(data.metrics.contract_count),
            format_count(data.dataset_rows)
        )?;
        writeln!(
            f,
            "  {:<20} {}",
            "Total Award Amount",
            format_currency(data.metrics.total_award_amount)
        )?;
        writeln!(
            f,
            "  {:<20} {}",
            "Unique Recipients",
            format_count(data.metrics.unique_recipients)
        )?;

        writeln!(f, "\nContracts by Theme")?;
        if data.themes.is_empty() {
            writeln!(f, "  (no theme columns)")?;
        } else {
            let label_width = data.themes.iter().map(|t| t.label.chars().count()).max().unwrap_or(0);
            let max = data.themes.iter().map(|t| t.count).max().unwrap_or(0) as f64;
            let width = self.bar_width(label_width);
            for theme in &data.themes {
                writeln!(
                    f,
                    "  {:<label_width$}  {:<width$}  {}",
                    theme.label,
                    bar(theme.count as f64, max, width),
                    format_count(theme.count),
                )?;
            }
        }

        writeln!(f, "\nTop Agencies by Award Amount")?;
        if data.top_agencies.is_empty() {
            writeln!(f, "  (no data)")?;
        } else {
            let label_width = data
                .top_agencies
                .iter()
                .map(|a| a.agency.chars().count())
                .max()
                .unwrap_or(0);
            let max = data
                .top_agencies
                .iter()
                .map(|a| a.total_award_amount)
                .fold(0.0, f64::max);
            let width = self.bar_width(label_width);
            for agency in &data.top_agencies {
                writeln!(
                    f,
                    "  {:<label_width$}  {:<width$}  {}",
                    agency.agency,
                    bar(agency.total_award_amount, max, width),
                    format_currency(agency.total_award_amount),
                )?;
            }
        }

        writeln!(f, "\nMonthly Award Timeline")?;
        if data.timeline.is_empty() {
            writeln!(f, "  (no data)")?;
        } else {
            for point in &data.timeline {
                writeln!(
                    f,
                    "  {}  {:>18}  {:>6} {}",
                    point.month,
                    format_currency(point.total_award_amount),
                    format_count(point.contract_count),
                    if point.contract_count == 1 { "award" } else { "awards" },
                )?;
            }
        }

        Ok(())
    }
}

/// `Filters: 2023-01-01 to 2023-12-31 | Agency: All | Size: All | Themes: Any`
pub struct FilterLine<'a> {
    data: &'a FilterSummaryViewModel,
}

impl<'a> FilterLine<'a> {
    pub fn new(data: &'a FilterSummaryViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for FilterLine<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let date = |d: Option<chrono::NaiveDate>| d.map(format_iso_date).unwrap_or_else(|| "-".to_string());

        write!(
            f,
            "Filters: {} to {} | Agency: {} | Size: {} | Themes: {}",
            date(self.data.date_from),
            date(self.data.date_to),
            self.data.agency.as_deref().unwrap_or("All"),
            self.data.size.as_deref().unwrap_or("All"),
            if self.data.themes.is_empty() {
                "Any".to_string()
            } else {
                self.data.themes.join(", ")
            }
        )
    }
}
