//! findash - Terminal-based personal finance dashboard
//!
//! This library provides the core functionality for the findash dashboard:
//! it loads a CSV ledger and a merchant→category catalog, classifies each
//! transaction, aggregates spending per month / category / holiday, projects
//! end-of-month spend against budget ceilings, and formats the results for
//! the TUI and the plain-text report.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, months, transactions, catalog, budgets)
//! - `load`: Ledger and catalog loaders
//! - `services`: Classification, aggregation, and budget pacing
//! - `display`: Presenter formatting (the only boundary toward the UI)
//! - `cli`: Plain-text subcommand handlers
//! - `tui`: Interactive dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use findash::config::{paths::DashPaths, settings::Settings};
//! use findash::services::dataset::Dataset;
//!
//! let paths = DashPaths::new();
//! let settings = Settings::load_or_default(&paths)?;
//! let dataset = Dataset::load(&paths, &settings)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod load;
pub mod models;
pub mod services;
pub mod tui;

pub use error::{DashError, DashResult};
