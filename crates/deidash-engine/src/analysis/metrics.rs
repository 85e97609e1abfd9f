use serde::Serialize;
use std::collections::HashSet;

use crate::filter::FilteredView;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryMetrics {
    pub contract_count: usize,
    pub total_award_amount: f64,
    pub unique_recipients: usize,
}

pub fn compute_metrics(view: &FilteredView<'_>) -> SummaryMetrics {
    let recipients: HashSet<&str> = view.iter().map(|r| r.recipient_name.as_str()).collect();

    SummaryMetrics {
        contract_count: view.len(),
        total_award_amount: view.iter().map(|r| r.award_amount).sum(),
        unique_recipients: recipients.len(),
    }
}
