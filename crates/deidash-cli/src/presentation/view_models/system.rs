use serde::Serialize;
use std::fmt;

use super::CreateView;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InitViewModel {
    pub config_path: String,
    pub dataset: String,
    pub dataset_exists: bool,
    /// False when an existing config was left untouched
    pub written: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportViewModel {
    pub output: String,
    pub rows_written: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuidanceViewModel {
    pub config_path: String,
    pub config_exists: bool,
    pub dataset: String,
    pub dataset_exists: bool,
}

impl CreateView for InitViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::InitView;
        Box::new(InitView::new(self))
    }
}

impl CreateView for ExportViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::ExportView;
        Box::new(ExportView::new(self))
    }
}

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::GuidanceView;
        Box::new(GuidanceView::new(self))
    }
}
