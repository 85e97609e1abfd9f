use std::fmt;

use crate::presentation::formatters::format_count;
use crate::presentation::view_models::{ExportViewModel, GuidanceViewModel, InitViewModel};

pub struct InitView<'a> {
    data: &'a InitViewModel,
}

impl<'a> InitView<'a> {
    pub fn new(data: &'a InitViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for InitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Config:  {}", self.data.config_path)?;
        writeln!(
            f,
            "Dataset: {}{}",
            self.data.dataset,
            if self.data.dataset_exists { "" } else { " (not found)" }
        )?;
        Ok(())
    }
}

pub struct ExportView<'a> {
    data: &'a ExportViewModel,
}

impl<'a> ExportView<'a> {
    pub fn new(data: &'a ExportViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ExportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Wrote {} contracts to {}",
            format_count(self.data.rows_written),
            self.data.output
        )
    }
}

pub struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
}

impl<'a> GuidanceView<'a> {
    pub fn new(data: &'a GuidanceViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "deidash - DEI contract award dashboard\n")?;

        if !self.data.config_exists {
            writeln!(f, "Get started:")?;
            writeln!(f, "  deidash init --dataset <CSV>\n")?;
        }

        writeln!(
            f,
            "Dataset: {}{}",
            self.data.dataset,
            if self.data.dataset_exists { "" } else { " (not found)" }
        )?;
        writeln!(f, "\nQuick commands:")?;
        writeln!(f, "  deidash summary                   # Metrics and charts")?;
        writeln!(f, "  deidash table --sort amount       # Browse contracts")?;
        writeln!(f, "  deidash feed                      # Sample award narratives")?;
        writeln!(f, "  deidash tui                       # Interactive dashboard")?;
        writeln!(f, "\nFor more commands:")?;
        writeln!(f, "  deidash --help")?;
        Ok(())
    }
}
