//! TUI Components
//!
//! A component owns its UI state (cursor, selection, scroll) and turns key
//! presses into `DashboardAction`s. Actions change the filters or the sort
//! and are applied by the screen source; purely visual movement stays
//! inside the component.
//!
//! Every `render` clamps its indices against the data it is handed, since
//! a filter change can shrink the data underneath a stale cursor.

pub mod contracts;
pub mod feed;
pub mod filter_panel;

pub use contracts::ContractsComponent;
pub use feed::FeedComponent;
pub use filter_panel::FilterPanelComponent;

/// Requests that need the dashboard to recompute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    NextAgency,
    PrevAgency,
    NextSize,
    PrevSize,
    /// Toggle the theme at this index in the schema
    ToggleTheme(usize),
    /// Move the start date by whole months
    ShiftFrom(i32),
    /// Move the end date by whole months
    ShiftTo(i32),
    CycleSort,
    FlipSort,
    /// Draw a fresh feed sample without changing filters
    Resample,
    Reset,
}
