pub mod number;
pub mod text;
pub mod time;

pub use number::{format_compact_currency, format_count, format_currency};
pub use text::{bar, single_line, terminal_width, truncate};
pub use time::{format_iso_date, format_long_date};
