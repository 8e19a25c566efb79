//! CLI command handlers
//!
//! This module contains the implementation of the non-interactive
//! subcommands, bridging the clap argument parsing with the service layer.

pub mod check;
pub mod report;

pub use check::handle_check_command;
pub use report::{handle_report_command, ReportArgs};
