//! Configuration and data file locations.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Paths to the tabular data files a snapshot loads from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g. `data/`).
    pub root: PathBuf,
    /// Inventory sheet (`data/inventory.csv`).
    pub inventory_file: PathBuf,
    /// Palettes sheet (`data/palettes.csv`).
    pub palettes_file: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            inventory_file: root.join("inventory.csv"),
            palettes_file: root.join("palettes.csv"),
            root,
        }
    }
}

/// Top-level Skein configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkeinConfig {
    /// Data file paths.
    pub data_paths: DataPaths,
}

impl SkeinConfig {
    /// Create configuration from the environment, defaulting the data root
    /// to `data/` when `SKEIN_DATA_DIR` is unset.
    pub fn from_env() -> Self {
        let root = std::env::var("SKEIN_DATA_DIR").unwrap_or_else(|_| "data".into());
        Self {
            data_paths: DataPaths::new(root),
        }
    }
}
