use serde::{Deserialize, Serialize};

use crate::error::{LoadError, LoadResult};

/// Column-name prefix that marks a boolean theme flag in the dataset
pub const THEME_PREFIX: &str = "theme_";

/// Position of a theme inside a [`ThemeSchema`].
///
/// Only a schema hands these out, so a `ThemeId` always refers to a real
/// theme column of the table it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeId(usize);

impl ThemeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeField {
    pub id: ThemeId,
    /// Raw CSV column, e.g. `theme_race_equity`
    pub column: String,
    /// Human label, e.g. `Race Equity`
    pub label: String,
}

/// The theme columns of a loaded table, discovered once from its header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSchema {
    fields: Vec<ThemeField>,
}

impl ThemeSchema {
    /// Build a schema from header names, keeping every `theme_*` column in
    /// header order. Duplicate columns are kept once; distinct columns that
    /// derive the same label cannot be told apart and fail the load.
    pub fn from_headers<'a, I>(headers: I) -> LoadResult<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut fields: Vec<ThemeField> = Vec::new();
        for header in headers {
            let header = header.trim();
            if !header.starts_with(THEME_PREFIX) || header.len() == THEME_PREFIX.len() {
                continue;
            }
            if fields.iter().any(|f| f.column == header) {
                continue;
            }
            let label = theme_label(header);
            if let Some(existing) = fields.iter().find(|f| f.label.eq_ignore_ascii_case(&label)) {
                return Err(LoadError::DuplicateThemeLabel {
                    label,
                    first: existing.column.clone(),
                    second: header.to_string(),
                });
            }
            fields.push(ThemeField {
                id: ThemeId(fields.len()),
                column: header.to_string(),
                label,
            });
        }
        Ok(Self { fields })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[ThemeField] {
        &self.fields
    }

    pub fn ids(&self) -> impl Iterator<Item = ThemeId> + '_ {
        self.fields.iter().map(|f| f.id)
    }

    pub fn get(&self, id: ThemeId) -> Option<&ThemeField> {
        self.fields.get(id.0)
    }

    pub fn label(&self, id: ThemeId) -> &str {
        self.fields
            .get(id.0)
            .map(|f| f.label.as_str())
            .unwrap_or_default()
    }

    pub fn labels(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.label.clone()).collect()
    }

    /// Resolve a user-facing label (`Race Equity`) or a raw column name
    /// (`theme_race_equity`), ignoring case.
    pub fn resolve(&self, name: &str) -> Option<ThemeId> {
        let name = name.trim();
        self.fields
            .iter()
            .find(|f| f.label.eq_ignore_ascii_case(name) || f.column.eq_ignore_ascii_case(name))
            .map(|f| f.id)
    }
}

/// `theme_race_equity` -> `Race Equity`
pub fn theme_label(column: &str) -> String {
    let stem = column.strip_prefix(THEME_PREFIX).unwrap_or(column);
    title_case(&stem.replace('_', " "))
}

// Uppercase the first letter after any non-letter, lowercase the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}
