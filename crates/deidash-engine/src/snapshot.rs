use deidash_types::ContractTable;
use serde::Serialize;

use crate::analysis::{
    AgencyTotal, DEFAULT_TOP_AGENCIES, MonthlyPoint, SummaryMetrics, ThemeCount,
    compute_metrics, monthly_timeline, theme_distribution, top_agencies,
};
use crate::filter::FilterSelection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotOptions {
    pub top_agency_limit: usize,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            top_agency_limit: DEFAULT_TOP_AGENCIES,
        }
    }
}

/// Every aggregate the overview shows, computed from one filter pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub metrics: SummaryMetrics,
    pub themes: Vec<ThemeCount>,
    pub top_agencies: Vec<AgencyTotal>,
    pub timeline: Vec<MonthlyPoint>,
}

impl DashboardSnapshot {
    pub fn is_empty(&self) -> bool {
        self.metrics.contract_count == 0
    }
}

pub fn build_snapshot(
    table: &ContractTable,
    selection: &FilterSelection,
    options: SnapshotOptions,
) -> DashboardSnapshot {
    let view = selection.apply(table);

    DashboardSnapshot {
        metrics: compute_metrics(&view),
        themes: theme_distribution(&view),
        top_agencies: top_agencies(&view, options.top_agency_limit),
        timeline: monthly_timeline(&view),
    }
}
