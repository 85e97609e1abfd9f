use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

use super::record::ContractRecord;
use super::size::SizeCategory;
use super::theme::ThemeSchema;

/// Inclusive date range covered by a table's action dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateBounds {
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.min <= day && day <= self.max
    }
}

/// The normalized dataset. Built once by the loader and never mutated;
/// every dashboard view is derived from a shared reference to it.
#[derive(Debug, Clone, Default)]
pub struct ContractTable {
    schema: ThemeSchema,
    records: Vec<ContractRecord>,
}

impl ContractTable {
    pub fn new(schema: ThemeSchema, records: Vec<ContractRecord>) -> Self {
        Self { schema, records }
    }

    pub fn schema(&self) -> &ThemeSchema {
        &self.schema
    }

    pub fn records(&self) -> &[ContractRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest action date, `None` for an empty table
    pub fn date_bounds(&self) -> Option<DateBounds> {
        let mut days = self.records.iter().map(ContractRecord::action_day);
        let first = days.next()?;
        let (min, max) = days.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some(DateBounds { min, max })
    }

    /// Sorted, de-duplicated canonical agency names
    pub fn agencies(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.awarding_agency_name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Size categories present in the table, sorted by label text
    pub fn size_categories(&self) -> Vec<SizeCategory> {
        let mut present: Vec<SizeCategory> = self
            .records
            .iter()
            .map(|r| r.award_size_category)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        present.sort_by_key(|c| c.label());
        present
    }
}
