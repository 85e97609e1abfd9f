pub mod feed;
pub mod options;
pub mod summary;
pub mod system;
pub mod table;
pub mod tui;

pub use summary::FilterLine;
