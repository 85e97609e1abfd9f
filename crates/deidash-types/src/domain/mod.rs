mod record;
mod size;
mod table;
mod theme;

pub use record::{ContractRecord, ThemeFlags};
pub use size::SizeCategory;
pub use table::{ContractTable, DateBounds};
pub use theme::{ThemeField, ThemeId, ThemeSchema, THEME_PREFIX, theme_label};
