//! Sandbox configuration
//!
//! A sandbox owns exactly one store file inside its data directory.

use std::path::{Path, PathBuf};

/// Environment variable naming the sandbox data directory
pub const DIR_ENV: &str = "SYSSTORAGE_DIR";

/// Store file name used when none is configured
pub const DEFAULT_FILE_NAME: &str = "default.db";

/// Location of the store for one application sandbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    dir: PathBuf,
    file_name: String,
}

impl StorageConfig {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    /// Use `SYSSTORAGE_DIR` if set and non-empty, otherwise the current directory
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(DIR_ENV) {
            Ok(dir) if !dir.is_empty() => Self::new(dir),
            _ => Self::new("."),
        }
    }

    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Full path of the store file
    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}
