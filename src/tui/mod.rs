//! Terminal User Interface module
//!
//! The interactive dashboard: an overview tab with budget gauges, top items,
//! and the spending timeline, and a holiday tab with per-trip breakdowns.
//! Every selection change recomputes from the immutable dataset; there is no
//! cached state to go stale.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;

pub use app::App;
pub use terminal::run_tui;
