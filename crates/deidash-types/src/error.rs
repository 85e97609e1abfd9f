use std::fmt;
use std::path::PathBuf;

/// Result type for dataset loading
pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// The single failure kind of the dashboard: the dataset could not be turned
/// into a normalized table. Row numbers are 1-based data rows (header excluded).
#[derive(Debug)]
pub enum LoadError {
    /// Dataset file missing or unreadable
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// CSV framing problem (unbalanced quotes, ragged rows, bad UTF-8)
    Csv(String),

    /// A required column is absent from the header
    MissingColumn(String),

    InvalidDate {
        row: usize,
        column: String,
        value: String,
    },

    /// Amount still non-numeric (or negative) after stripping `$` and `,`
    InvalidAmount { row: usize, value: String },

    InvalidFlag {
        row: usize,
        column: String,
        value: String,
    },

    InvalidDuration { row: usize, value: String },

    InvalidSizeCategory { row: usize, value: String },

    /// Two distinct theme columns derive the same label
    DuplicateThemeLabel {
        label: String,
        first: String,
        second: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            LoadError::Csv(msg) => write!(f, "malformed CSV: {}", msg),
            LoadError::MissingColumn(column) => {
                write!(f, "missing required column '{}'", column)
            }
            LoadError::InvalidDate { row, column, value } => write!(
                f,
                "row {}: cannot parse '{}' in column '{}' as a date",
                row, value, column
            ),
            LoadError::InvalidAmount { row, value } => write!(
                f,
                "row {}: award_amount '{}' is not a non-negative number",
                row, value
            ),
            LoadError::InvalidFlag { row, column, value } => write!(
                f,
                "row {}: theme flag '{}' has non-boolean value '{}'",
                row, column, value
            ),
            LoadError::InvalidDuration { row, value } => write!(
                f,
                "row {}: contract_duration_days '{}' is not a number",
                row, value
            ),
            LoadError::InvalidSizeCategory { row, value } => write!(
                f,
                "row {}: unknown award_size_category '{}'",
                row, value
            ),
            LoadError::DuplicateThemeLabel {
                label,
                first,
                second,
            } => write!(
                f,
                "theme columns '{}' and '{}' both map to the label '{}'",
                first, second, label
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
