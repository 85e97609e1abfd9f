use deidash_types::ContractRecord;
use serde::Serialize;
use std::cmp::Ordering;

use crate::filter::FilteredView;

pub const DEFAULT_PAGE_SIZE: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    AwardId,
    Recipient,
    Agency,
    Amount,
    ActionDate,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::AwardId,
        SortKey::Recipient,
        SortKey::Agency,
        SortKey::Amount,
        SortKey::ActionDate,
    ];

    pub fn column(&self) -> &'static str {
        match self {
            SortKey::AwardId => "award_id",
            SortKey::Recipient => "recipient_name",
            SortKey::Agency => "awarding_agency_name",
            SortKey::Amount => "award_amount",
            SortKey::ActionDate => "action_date",
        }
    }

    /// Next key in column order, wrapping around
    pub fn next(&self) -> SortKey {
        let idx = Self::ALL.iter().position(|k| k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    fn compare(&self, a: &ContractRecord, b: &ContractRecord) -> Ordering {
        match self {
            SortKey::AwardId => a.award_id.cmp(&b.award_id),
            SortKey::Recipient => a.recipient_name.cmp(&b.recipient_name),
            SortKey::Agency => a.awarding_agency_name.cmp(&b.awarding_agency_name),
            SortKey::Amount => a.award_amount.total_cmp(&b.award_amount),
            SortKey::ActionDate => a.action_date.cmp(&b.action_date),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(&self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Sort and page request for the detailed contract table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableQuery {
    pub sort: SortKey,
    pub direction: SortDirection,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            sort: SortKey::ActionDate,
            direction: SortDirection::Descending,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TablePage<'a> {
    pub rows: Vec<&'a ContractRecord>,
    pub page: usize,
    pub page_size: usize,
    pub total_rows: usize,
    pub total_pages: usize,
}

/// Stable sort of the view; equal keys keep their filtered order in either
/// direction.
pub fn sort_rows<'a>(
    view: &FilteredView<'a>,
    key: SortKey,
    direction: SortDirection,
) -> Vec<&'a ContractRecord> {
    let mut rows: Vec<&ContractRecord> = view.iter().collect();
    match direction {
        SortDirection::Ascending => rows.sort_by(|a, b| key.compare(a, b)),
        SortDirection::Descending => rows.sort_by(|a, b| key.compare(b, a)),
    }
    rows
}

pub fn query_table<'a>(view: &FilteredView<'a>, query: &TableQuery) -> TablePage<'a> {
    let page_size = query.page_size.max(1);
    let page = query.page.max(1);
    let sorted = sort_rows(view, query.sort, query.direction);
    let total_rows = sorted.len();
    let total_pages = total_rows.div_ceil(page_size);

    let rows = sorted
        .into_iter()
        .skip((page - 1).saturating_mul(page_size))
        .take(page_size)
        .collect();

    TablePage {
        rows,
        page,
        page_size,
        total_rows,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_cycles_through_every_column() {
        let mut key = SortKey::ActionDate;
        let mut seen = Vec::new();
        for _ in 0..SortKey::ALL.len() {
            key = key.next();
            seen.push(key);
        }
        assert_eq!(seen.first(), Some(&SortKey::AwardId));
        assert_eq!(seen.last(), Some(&SortKey::ActionDate));
    }

    #[test]
    fn test_default_query_is_newest_first() {
        let query = TableQuery::default();
        assert_eq!(query.sort, SortKey::ActionDate);
        assert_eq!(query.direction, SortDirection::Descending);
        assert_eq!(query.page, 1);
        assert_eq!(query.direction.flip(), SortDirection::Ascending);
    }
}
