use csv::StringRecord;
use deidash_types::{ContractRecord, LoadError, LoadResult, SizeCategory, ThemeFlags};

use crate::agency::AgencyCatalog;
use crate::columns::{ColumnLayout, REQUIRED_COLUMNS};
use crate::parse::{days_between, parse_amount, parse_datetime, parse_days, parse_flag};

/// Turn one CSV row into a normalized record. `row` is the 1-based data row.
pub(crate) fn normalize_row(
    row: usize,
    record: &StringRecord,
    layout: &ColumnLayout,
    catalog: &AgencyCatalog,
) -> LoadResult<ContractRecord> {
    let cell = |index: usize| record.get(index).unwrap_or("");

    let date = |index: usize, column: &str| {
        let value = cell(index);
        parse_datetime(value).ok_or_else(|| LoadError::InvalidDate {
            row,
            column: column.to_string(),
            value: value.to_string(),
        })
    };

    let action_date = date(layout.action_date, REQUIRED_COLUMNS[4])?;
    let contract_start_date = date(layout.contract_start_date, REQUIRED_COLUMNS[5])?;
    let contract_end_date = date(layout.contract_end_date, REQUIRED_COLUMNS[6])?;

    let raw_amount = cell(layout.award_amount);
    let award_amount = parse_amount(raw_amount).ok_or_else(|| LoadError::InvalidAmount {
        row,
        value: raw_amount.to_string(),
    })?;

    let contract_duration_days = match layout.contract_duration_days.map(cell) {
        Some(value) if !value.trim().is_empty() => {
            parse_days(value).ok_or_else(|| LoadError::InvalidDuration {
                row,
                value: value.to_string(),
            })?
        }
        _ => days_between(contract_start_date, contract_end_date),
    };

    let award_size_category = match layout.award_size_category.map(cell) {
        Some(value) if !value.trim().is_empty() => {
            SizeCategory::parse(value).ok_or_else(|| LoadError::InvalidSizeCategory {
                row,
                value: value.to_string(),
            })?
        }
        _ => SizeCategory::from_amount(award_amount),
    };

    let flags = layout
        .themes
        .iter()
        .zip(layout.schema.fields())
        .map(|(index, field)| {
            let value = cell(*index);
            parse_flag(value).ok_or_else(|| LoadError::InvalidFlag {
                row,
                column: field.column.clone(),
                value: value.to_string(),
            })
        })
        .collect::<LoadResult<Vec<bool>>>()?;

    let raw_agency_name = cell(layout.awarding_agency_name).to_string();
    let awarding_agency_name = catalog.canonicalize(&raw_agency_name).to_string();

    Ok(ContractRecord {
        award_id: cell(layout.award_id).to_string(),
        recipient_name: cell(layout.recipient_name).to_string(),
        raw_agency_name,
        awarding_agency_name,
        award_amount,
        action_date,
        contract_start_date,
        contract_end_date,
        contract_duration_days,
        award_size_category,
        award_description: cell(layout.award_description).to_string(),
        themes: ThemeFlags::new(flags),
    })
}
