pub mod config;
pub mod dashboard;
pub mod error;

pub use config::{Config, DisplayConfig, DEFAULT_DATASET, resolve_workspace_path};
pub use dashboard::Dashboard;
pub use error::{Error, Result};
