use serde::Serialize;
use std::collections::BTreeMap;

use crate::filter::FilteredView;

pub const DEFAULT_TOP_AGENCIES: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgencyTotal {
    pub agency: String,
    pub total_award_amount: f64,
    pub contract_count: usize,
}

/// The `limit` agencies with the largest award totals, ordered ascending by
/// total so the largest renders last (top of a horizontal bar chart).
/// Equal totals keep canonical-name order.
pub fn top_agencies(view: &FilteredView<'_>, limit: usize) -> Vec<AgencyTotal> {
    let mut grouped: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for record in view.iter() {
        let entry = grouped
            .entry(record.awarding_agency_name.as_str())
            .or_insert((0.0, 0));
        entry.0 += record.award_amount;
        entry.1 += 1;
    }

    let mut totals: Vec<AgencyTotal> = grouped
        .into_iter()
        .map(|(agency, (total, count))| AgencyTotal {
            agency: agency.to_string(),
            total_award_amount: total,
            contract_count: count,
        })
        .collect();

    totals.sort_by(|a, b| a.total_award_amount.total_cmp(&b.total_award_amount));

    let skip = totals.len().saturating_sub(limit);
    totals.split_off(skip)
}
