//! Path management for findash
//!
//! Resolves where the ledger, the category catalog, and the settings file
//! live.
//!
//! ## Path Resolution Order
//!
//! 1. Explicit CLI overrides (`--ledger`, `--catalog`, `--config`)
//! 2. `FINDASH_DIR` environment variable (if set)
//! 3. The current working directory

use std::path::PathBuf;

/// Default ledger file name
pub const LEDGER_FILE: &str = "finances.csv";

/// Default category catalog file name
pub const CATALOG_FILE: &str = "categories.json";

/// Default settings file name
pub const SETTINGS_FILE: &str = "findash.json";

/// Manages all file paths used by findash
#[derive(Debug, Clone)]
pub struct DashPaths {
    /// Base directory for the flat files
    base_dir: PathBuf,
    /// Explicit ledger override
    ledger: Option<PathBuf>,
    /// Explicit catalog override
    catalog: Option<PathBuf>,
    /// Explicit settings override
    settings: Option<PathBuf>,
}

impl DashPaths {
    /// Create a new DashPaths instance
    ///
    /// Uses `FINDASH_DIR` when set, otherwise the current directory.
    pub fn new() -> Self {
        let base_dir = match std::env::var("FINDASH_DIR") {
            Ok(custom) => PathBuf::from(custom),
            Err(_) => PathBuf::from("."),
        };
        Self::with_base_dir(base_dir)
    }

    /// Create DashPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            ledger: None,
            catalog: None,
            settings: None,
        }
    }

    /// Override the ledger path
    pub fn with_ledger(mut self, path: PathBuf) -> Self {
        self.ledger = Some(path);
        self
    }

    /// Override the catalog path
    pub fn with_catalog(mut self, path: PathBuf) -> Self {
        self.catalog = Some(path);
        self
    }

    /// Override the settings path
    pub fn with_settings(mut self, path: PathBuf) -> Self {
        self.settings = Some(path);
        self
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the transaction ledger CSV
    pub fn ledger_file(&self) -> PathBuf {
        self.ledger
            .clone()
            .unwrap_or_else(|| self.base_dir.join(LEDGER_FILE))
    }

    /// Get the path to the category catalog JSON
    pub fn catalog_file(&self) -> PathBuf {
        self.catalog
            .clone()
            .unwrap_or_else(|| self.base_dir.join(CATALOG_FILE))
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.settings
            .clone()
            .unwrap_or_else(|| self.base_dir.join(SETTINGS_FILE))
    }
}

impl Default for DashPaths {
    fn default() -> Self {
        Self::new()
    }
}
