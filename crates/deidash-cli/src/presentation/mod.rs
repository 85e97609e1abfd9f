//! # Presentation Layer
//!
//! MVVM-style split between what is shown and how it is drawn.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                  ==(Text)==> [ View ]
//! ```
//!
//! * `view_models/`: raw, serializable data. Amounts stay `f64`, dates stay dates.
//! * `presenters/`: engine results to view models; decides badges and tips.
//! * `views/`: `fmt::Display` text layouts and ratatui widgets; the only
//!   place that calls `formatters`.
//! * `renderers/`: console (JSON or text) and the interactive TUI router.
//!   TUI components own their scroll/cursor state; filter changes are
//!   emitted as actions and recomputed by the handler.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel};
