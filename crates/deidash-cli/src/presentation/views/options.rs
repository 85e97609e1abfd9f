use std::fmt;

use crate::presentation::formatters::{format_count, format_iso_date};
use crate::presentation::view_models::OptionsViewModel;

pub struct OptionsView<'a> {
    data: &'a OptionsViewModel,
}

impl<'a> OptionsView<'a> {
    pub fn new(data: &'a OptionsViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for OptionsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Dataset: {} ({} contracts)",
            self.data.dataset,
            format_count(self.data.total_rows)
        )?;

        match &self.data.date_bounds {
            Some(bounds) => writeln!(
                f,
                "Date range: {} to {}",
                format_iso_date(bounds.min),
                format_iso_date(bounds.max)
            )?,
            None => writeln!(f, "Date range: (no dates)")?,
        }

        writeln!(f, "\nAgencies:")?;
        for agency in &self.data.agencies {
            writeln!(f, "  {}", agency)?;
        }

        writeln!(f, "\nAward sizes:")?;
        for size in &self.data.size_categories {
            writeln!(f, "  {}", size)?;
        }

        writeln!(f, "\nThemes:")?;
        if self.data.themes.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for theme in &self.data.themes {
            writeln!(f, "  {:<24} {}", theme.label, theme.column)?;
        }

        Ok(())
    }
}
