//! Sample store configuration

use std::path::PathBuf;

/// Default directory for stored samples, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "training-data";

/// Sample store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Root directory; one subdirectory per gesture
    pub data_dir: PathBuf,

    /// Write indented JSON
    pub pretty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            pretty: true,
        }
    }
}

impl StoreConfig {
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }
}
