use deidash_engine::{SortDirection, TablePage, TableQuery};
use deidash_types::ContractRecord;

use crate::presentation::view_models::{
    CommandResultViewModel, ContractRowViewModel, Guidance, StatusBadge, TableViewModel,
};

fn row(record: &ContractRecord) -> ContractRowViewModel {
    ContractRowViewModel {
        award_id: record.award_id.clone(),
        recipient_name: record.recipient_name.clone(),
        awarding_agency_name: record.awarding_agency_name.clone(),
        award_amount: record.award_amount,
        action_date: record.action_day(),
        award_description: record.award_description.clone(),
    }
}

pub fn table_content(page: &TablePage<'_>, query: &TableQuery) -> TableViewModel {
    TableViewModel {
        sort: query.sort.column().to_string(),
        descending: query.direction == SortDirection::Descending,
        page: page.page,
        page_size: page.page_size,
        total_pages: page.total_pages,
        total_rows: page.total_rows,
        rows: page.rows.iter().map(|r| row(r)).collect(),
    }
}

pub fn present_table(page: &TablePage<'_>, query: &TableQuery) -> CommandResultViewModel<TableViewModel> {
    let content = table_content(page, query);
    let past_end = content.rows.is_empty() && content.total_rows > 0;
    let last_page = content.total_pages;
    let result = CommandResultViewModel::new(content);

    if past_end {
        return result
            .with_badge(StatusBadge::warning(format!(
                "Page {} is past the last page",
                page.page
            )))
            .with_suggestion(
                Guidance::new("Jump to the last page")
                    .with_command(format!("deidash table --page {}", last_page)),
            );
    }

    result
}
