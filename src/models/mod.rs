//! Core data models for findash
//!
//! The model types are plain values: loaded once from the flat files,
//! immutable afterward, with all derived figures recomputed on demand.

pub mod budget;
pub mod catalog;
pub mod month;
pub mod money;
pub mod transaction;

pub use budget::BudgetTable;
pub use catalog::{CategoryCatalog, DuplicateMerchant};
pub use month::{Month, MonthParseError};
pub use money::{Money, MoneyParseError};
pub use transaction::Transaction;
