//! Write normalized records back out as CSV.

use chrono::NaiveDateTime;
use deidash_types::{ContractRecord, ThemeSchema};
use std::io::Write;

use crate::columns::{OPTIONAL_COLUMNS, REQUIRED_COLUMNS};

/// Write `records` with the canonical agency name, numeric amounts and ISO
/// dates. Returns the number of data rows written.
pub fn write_csv<'a, W, I>(writer: W, schema: &ThemeSchema, records: I) -> csv::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a ContractRecord>,
{
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = REQUIRED_COLUMNS.to_vec();
    header.extend(OPTIONAL_COLUMNS);
    header.extend(schema.fields().iter().map(|f| f.column.as_str()));
    wtr.write_record(&header)?;

    let mut written = 0;
    for record in records {
        let mut row = vec![
            record.award_id.clone(),
            record.recipient_name.clone(),
            record.awarding_agency_name.clone(),
            format!("{:.2}", record.award_amount),
            iso(record.action_date),
            iso(record.contract_start_date),
            iso(record.contract_end_date),
            record.award_description.clone(),
            record.contract_duration_days.to_string(),
            record.award_size_category.label().to_string(),
        ];
        row.extend(schema.ids().map(|id| record.themes.is_set(id).to_string()));
        wtr.write_record(&row)?;
        written += 1;
    }

    wtr.flush()?;
    Ok(written)
}

fn iso(dt: NaiveDateTime) -> String {
    if dt.time() == chrono::NaiveTime::MIN {
        dt.format("%Y-%m-%d").to_string()
    } else {
        dt.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}
