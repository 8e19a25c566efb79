//! Configuration management
//!
//! Handles path resolution and user settings for findash.

pub mod paths;
pub mod settings;

pub use paths::DashPaths;
pub use settings::Settings;
