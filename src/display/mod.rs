//! Display formatting for terminal output
//!
//! Pure presenter functions converting aggregates into display strings. The
//! TUI views and the plain-text report both render through this module.

pub mod summary;

pub use summary::{
    budget_sentence, days_left, holiday_total, month_progress, pacing_line, percent_label,
    spent_out_of,
};
