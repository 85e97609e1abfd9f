use chrono::{Months, NaiveDate};
use deidash_engine::{DateRange, FilterSelection, Selection};
use deidash_types::{ContractTable, DateBounds, SizeCategory, ThemeId};

/// Filter controls of the interactive dashboard. Each control cycles
/// through `All` followed by the values present in the table.
#[derive(Debug, Clone)]
pub struct FilterState {
    bounds: Option<DateBounds>,
    agencies: Vec<String>,
    sizes: Vec<SizeCategory>,
    current: Choice,
    initial: Choice,
}

#[derive(Debug, Clone, PartialEq)]
struct Choice {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    /// 0 is `All`, `n` is `agencies[n - 1]`
    agency: usize,
    size: usize,
    themes: Vec<ThemeId>,
}

impl FilterState {
    /// Start from `selection`; `reset` returns here.
    pub fn new(table: &ContractTable, selection: &FilterSelection) -> Self {
        let mut agencies = table.agencies();
        let mut sizes = table.size_categories();

        let agency = match &selection.agency {
            Selection::All => 0,
            Selection::Only(name) => position_or_insert(&mut agencies, name.clone()),
        };
        let size = match selection.size {
            Selection::All => 0,
            Selection::Only(size) => position_or_insert(&mut sizes, size),
        };

        let choice = Choice {
            from: selection.date_range.map(|r| r.from),
            to: selection.date_range.map(|r| r.to),
            agency,
            size,
            themes: selection.themes.clone(),
        };

        Self {
            bounds: table.date_bounds(),
            agencies,
            sizes,
            current: choice.clone(),
            initial: choice,
        }
    }

    pub fn selection(&self) -> FilterSelection {
        let date_range = match (self.current.from, self.current.to) {
            (Some(from), Some(to)) => Some(DateRange::new(from, to)),
            _ => None,
        };

        FilterSelection {
            date_range,
            agency: pick(&self.agencies, self.current.agency).cloned().into(),
            size: pick(&self.sizes, self.current.size).copied().into(),
            themes: self.current.themes.clone(),
        }
    }

    pub fn next_agency(&mut self) {
        self.current.agency = cycle(self.current.agency, self.agencies.len(), 1);
    }

    pub fn prev_agency(&mut self) {
        self.current.agency = cycle(self.current.agency, self.agencies.len(), -1);
    }

    pub fn next_size(&mut self) {
        self.current.size = cycle(self.current.size, self.sizes.len(), 1);
    }

    pub fn prev_size(&mut self) {
        self.current.size = cycle(self.current.size, self.sizes.len(), -1);
    }

    pub fn toggle_theme(&mut self, theme: ThemeId) {
        if let Some(index) = self.current.themes.iter().position(|t| *t == theme) {
            self.current.themes.remove(index);
        } else {
            self.current.themes.push(theme);
        }
    }

    /// Move the start date by whole months, staying within the data and
    /// not past the end date.
    pub fn shift_from(&mut self, months: i32) {
        let (Some(from), Some(to), Some(bounds)) = (self.current.from, self.current.to, self.bounds)
        else {
            return;
        };
        let lower = bounds.min.min(to);
        self.current.from = Some(shift_months(from, months).clamp(lower, to));
    }

    /// Move the end date by whole months, staying within the data and not
    /// before the start date.
    pub fn shift_to(&mut self, months: i32) {
        let (Some(from), Some(to), Some(bounds)) = (self.current.from, self.current.to, self.bounds)
        else {
            return;
        };
        let upper = bounds.max.max(from);
        self.current.to = Some(shift_months(to, months).clamp(from, upper));
    }

    pub fn reset(&mut self) {
        self.current = self.initial.clone();
    }

    /// 1-based position among agencies (0 for `All`) and the number of
    /// agencies to choose from
    pub fn agency_position(&self) -> (usize, usize) {
        (self.current.agency, self.agencies.len())
    }
}

fn position_or_insert<T: PartialEq>(values: &mut Vec<T>, value: T) -> usize {
    match values.iter().position(|v| *v == value) {
        Some(index) => index + 1,
        None => {
            values.push(value);
            values.len()
        }
    }
}

fn pick<T>(values: &[T], position: usize) -> Option<&T> {
    position.checked_sub(1).and_then(|index| values.get(index))
}

/// Step through `0..=len` with wrap-around
fn cycle(position: usize, len: usize, step: isize) -> usize {
    let slots = len as isize + 1;
    (position as isize + step).rem_euclid(slots) as usize
}

fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let step = Months::new(months.unsigned_abs());
    let shifted = if months >= 0 {
        date.checked_add_months(step)
    } else {
        date.checked_sub_months(step)
    };
    shifted.unwrap_or(date)
}
