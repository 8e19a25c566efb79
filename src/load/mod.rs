//! Flat-file loaders
//!
//! Loading happens once at startup and is fail-fast: a malformed ledger row
//! or catalog entry stops the run with row context instead of silently
//! skewing the totals.

pub mod catalog;
pub mod ledger;

pub use catalog::load_catalog;
pub use ledger::load_ledger;
