use deidash_engine::{FilterSelection, Selection};
use deidash_types::ThemeSchema;

use crate::presentation::view_models::{
    ALL_OPTION, DashboardScreenViewModel, FeedViewModel, FilterPanelViewModel,
    StatusBarViewModel, StatusLevel, SummaryViewModel, TableViewModel, ThemeToggleViewModel,
};

pub fn present_filter_panel(
    selection: &FilterSelection,
    schema: &ThemeSchema,
    (agency_position, agency_choices): (usize, usize),
) -> FilterPanelViewModel {
    FilterPanelViewModel {
        date_from: selection.date_range.map(|r| r.from),
        date_to: selection.date_range.map(|r| r.to),
        agency: match &selection.agency {
            Selection::All => ALL_OPTION.to_string(),
            Selection::Only(name) => name.clone(),
        },
        agency_position,
        agency_choices,
        size: match selection.size {
            Selection::All => ALL_OPTION.to_string(),
            Selection::Only(size) => size.label().to_string(),
        },
        themes: schema
            .fields()
            .iter()
            .map(|field| ThemeToggleViewModel {
                label: field.label.clone(),
                selected: selection.themes.contains(&field.id),
            })
            .collect(),
    }
}

fn status(summary: &SummaryViewModel) -> StatusBarViewModel {
    if summary.dataset_rows == 0 {
        return StatusBarViewModel {
            level: StatusLevel::Warning,
            message: "The dataset contains no contracts".to_string(),
        };
    }

    if summary.metrics.contract_count == 0 {
        return StatusBarViewModel {
            level: StatusLevel::Warning,
            message: "No contracts match the current filters (r resets)".to_string(),
        };
    }

    StatusBarViewModel {
        level: StatusLevel::Info,
        message: format!(
            "{} of {} contracts match",
            summary.metrics.contract_count, summary.dataset_rows
        ),
    }
}

pub fn present_screen(
    filters: FilterPanelViewModel,
    summary: SummaryViewModel,
    table: TableViewModel,
    feed: FeedViewModel,
) -> DashboardScreenViewModel {
    DashboardScreenViewModel {
        status: status(&summary),
        filters,
        summary,
        table,
        feed,
    }
}
