use deidash_engine::{DashboardSnapshot, FilterSelection, Selection};
use deidash_types::ThemeSchema;

use crate::presentation::view_models::{
    AgencyBarViewModel, CommandResultViewModel, FilterSummaryViewModel, Guidance,
    MetricsViewModel, MonthlyPointViewModel, StatusBadge, SummaryViewModel, ThemeBarViewModel,
};

pub fn present_filters(selection: &FilterSelection, schema: &ThemeSchema) -> FilterSummaryViewModel {
    FilterSummaryViewModel {
        date_from: selection.date_range.map(|r| r.from),
        date_to: selection.date_range.map(|r| r.to),
        agency: match &selection.agency {
            Selection::All => None,
            Selection::Only(name) => Some(name.clone()),
        },
        size: match selection.size {
            Selection::All => None,
            Selection::Only(size) => Some(size.label().to_string()),
        },
        themes: selection
            .themes
            .iter()
            .map(|id| schema.label(*id).to_string())
            .collect(),
    }
}

pub fn summary_content(
    snapshot: &DashboardSnapshot,
    filters: FilterSummaryViewModel,
    dataset_rows: usize,
) -> SummaryViewModel {
    SummaryViewModel {
        filters,
        dataset_rows,
        metrics: MetricsViewModel {
            contract_count: snapshot.metrics.contract_count,
            total_award_amount: snapshot.metrics.total_award_amount,
            unique_recipients: snapshot.metrics.unique_recipients,
        },
        themes: snapshot
            .themes
            .iter()
            .map(|t| ThemeBarViewModel {
                label: t.label.clone(),
                column: t.column.clone(),
                count: t.count,
            })
            .collect(),
        top_agencies: snapshot
            .top_agencies
            .iter()
            .map(|a| AgencyBarViewModel {
                agency: a.agency.clone(),
                total_award_amount: a.total_award_amount,
                contract_count: a.contract_count,
            })
            .collect(),
        timeline: snapshot
            .timeline
            .iter()
            .map(|p| MonthlyPointViewModel {
                month: p.month.clone(),
                total_award_amount: p.total_award_amount,
                contract_count: p.contract_count,
            })
            .collect(),
    }
}

pub fn present_summary(
    snapshot: &DashboardSnapshot,
    filters: FilterSummaryViewModel,
    dataset_rows: usize,
) -> CommandResultViewModel<SummaryViewModel> {
    let content = summary_content(snapshot, filters, dataset_rows);
    let result = CommandResultViewModel::new(content);

    if dataset_rows == 0 {
        return result.with_badge(StatusBadge::warning("The dataset contains no contracts"));
    }

    if snapshot.is_empty() {
        return result
            .with_badge(StatusBadge::warning("No contracts match the current filters"))
            .with_suggestion(
                Guidance::new("See which dates, agencies and themes exist")
                    .with_command("deidash options"),
            );
    }

    result
}
