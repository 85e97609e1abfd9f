use chrono::NaiveDate;
use deidash_types::{ContractRecord, ContractTable, DateBounds, SizeCategory, ThemeId, ThemeSchema};
use serde::Serialize;

/// Either the explicit pass-through value `All` or one concrete value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

/// `None` is the pass-through `All`
impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Selection::Only(value),
            None => Selection::All,
        }
    }
}

/// Inclusive calendar-date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.from <= day && day <= self.to
    }
}

impl From<DateBounds> for DateRange {
    fn from(bounds: DateBounds) -> Self {
        Self::new(bounds.min, bounds.max)
    }
}

/// The user's filter choices. Predicates are ANDed; selected themes are ORed
/// among themselves first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilterSelection {
    /// `None` only when the table has no dates to bound (empty table)
    pub date_range: Option<DateRange>,
    pub agency: Selection<String>,
    pub size: Selection<SizeCategory>,
    pub themes: Vec<ThemeId>,
}

impl FilterSelection {
    /// Pass-through selection whose date range spans the whole table
    pub fn for_table(table: &ContractTable) -> Self {
        Self {
            date_range: table.date_bounds().map(DateRange::from),
            ..Self::default()
        }
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn with_agency(mut self, agency: impl Into<String>) -> Self {
        self.agency = Selection::Only(agency.into());
        self
    }

    pub fn with_size(mut self, size: SizeCategory) -> Self {
        self.size = Selection::Only(size);
        self
    }

    pub fn with_theme(mut self, theme: ThemeId) -> Self {
        if !self.themes.contains(&theme) {
            self.themes.push(theme);
        }
        self
    }

    pub fn matches(&self, record: &ContractRecord) -> bool {
        let in_range = self
            .date_range
            .is_none_or(|range| range.contains(record.action_day()));

        in_range
            && self.agency.admits(&record.awarding_agency_name)
            && self.size.admits(&record.award_size_category)
            && (self.themes.is_empty() || record.themes.any(&self.themes))
    }

    /// Rows passing every predicate, in table order.
    pub fn apply<'a>(&self, table: &'a ContractTable) -> FilteredView<'a> {
        let rows: Vec<&ContractRecord> = table
            .records()
            .iter()
            .filter(|record| self.matches(record))
            .collect();

        tracing::debug!(
            total = table.len(),
            kept = rows.len(),
            "filter applied"
        );

        FilteredView {
            schema: table.schema(),
            rows,
        }
    }
}

/// Borrowed subset of a table produced by a filter pass
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    schema: &'a ThemeSchema,
    rows: Vec<&'a ContractRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn schema(&self) -> &'a ThemeSchema {
        self.schema
    }

    pub fn rows(&self) -> &[&'a ContractRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a ContractRecord> + '_ {
        self.rows.iter().copied()
    }
}
