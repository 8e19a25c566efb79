//! Business logic layer
//!
//! The pipeline behind every UI interaction: classification, aggregation,
//! and budget pacing, all pure functions over the immutable dataset handle.

pub mod aggregate;
pub mod classify;
pub mod dataset;
pub mod pacing;

pub use classify::ClassifiedTransaction;
pub use dataset::{Dataset, Diagnostic};
pub use pacing::{MonthStatus, Severity};
