use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::size::SizeCategory;
use super::theme::ThemeId;

/// Theme flags of one record, positionally aligned with the table's
/// [`ThemeSchema`](super::ThemeSchema).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeFlags(Vec<bool>);

impl ThemeFlags {
    pub fn new(flags: Vec<bool>) -> Self {
        Self(flags)
    }

    pub fn is_set(&self, id: ThemeId) -> bool {
        self.0.get(id.index()).copied().unwrap_or(false)
    }

    /// True when at least one of `ids` is set
    pub fn any(&self, ids: &[ThemeId]) -> bool {
        ids.iter().any(|id| self.is_set(*id))
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

/// One normalized contract award.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractRecord {
    pub award_id: String,
    pub recipient_name: String,
    /// Agency name exactly as it appeared in the dataset
    pub raw_agency_name: String,
    /// Agency name after synonym canonicalization
    pub awarding_agency_name: String,
    pub award_amount: f64,
    pub action_date: NaiveDateTime,
    pub contract_start_date: NaiveDateTime,
    pub contract_end_date: NaiveDateTime,
    /// `end - start` in whole days unless supplied by the dataset; may be negative
    pub contract_duration_days: i64,
    pub award_size_category: SizeCategory,
    pub award_description: String,
    pub themes: ThemeFlags,
}

impl ContractRecord {
    /// Action date with the time of day dropped
    pub fn action_day(&self) -> NaiveDate {
        self.action_date.date()
    }
}
