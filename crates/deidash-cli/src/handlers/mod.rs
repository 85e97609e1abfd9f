mod dashboard_state;
mod filter;

pub mod export;
pub mod feed;
pub mod guidance;
pub mod init;
pub mod options;
pub mod summary;
pub mod table;
pub mod tui;

pub use dashboard_state::FilterState;
pub use filter::resolve_selection;
