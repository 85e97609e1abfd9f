use deidash_types::ThemeId;
use serde::Serialize;

use crate::filter::FilteredView;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeCount {
    pub theme: ThemeId,
    pub column: String,
    pub label: String,
    pub count: usize,
}

/// Number of rows flagged with each theme, in schema order. A row tagged
/// with several themes counts once per theme.
pub fn theme_distribution(view: &FilteredView<'_>) -> Vec<ThemeCount> {
    view.schema()
        .fields()
        .iter()
        .map(|field| ThemeCount {
            theme: field.id,
            column: field.column.clone(),
            label: field.label.clone(),
            count: view.iter().filter(|r| r.themes.is_set(field.id)).count(),
        })
        .collect()
}
