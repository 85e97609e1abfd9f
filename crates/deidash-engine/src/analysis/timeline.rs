use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::filter::FilteredView;

/// Award activity within one calendar month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    /// `YYYY-MM`
    pub month: String,
    pub year: i32,
    pub month_number: u32,
    pub total_award_amount: f64,
    pub contract_count: usize,
}

/// Group rows by the year and month of their action date, oldest first.
/// Months without awards are omitted.
pub fn monthly_timeline(view: &FilteredView<'_>) -> Vec<MonthlyPoint> {
    let mut months: BTreeMap<(i32, u32), (f64, usize)> = BTreeMap::new();
    for record in view.iter() {
        let key = (record.action_date.year(), record.action_date.month());
        let entry = months.entry(key).or_insert((0.0, 0));
        entry.0 += record.award_amount;
        entry.1 += 1;
    }

    months
        .into_iter()
        .map(|((year, month), (total, count))| MonthlyPoint {
            month: format!("{:04}-{:02}", year, month),
            year,
            month_number: month,
            total_award_amount: total,
            contract_count: count,
        })
        .collect()
}
