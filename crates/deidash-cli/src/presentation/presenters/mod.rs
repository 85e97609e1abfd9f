pub mod feed;
pub mod options;
pub mod summary;
pub mod system;
pub mod table;
pub mod tui;

pub use feed::{feed_content, present_feed};
pub use options::present_options;
pub use summary::{present_filters, present_summary, summary_content};
pub use system::{present_export, present_guidance, present_init};
pub use table::{present_table, table_content};
pub use tui::{present_filter_panel, present_screen};
