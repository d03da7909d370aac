//! Key-value storage types and traits

use std::future::Future;

/// Error code reported for a generic backend failure
pub const E_BACKEND: i32 = -1001;

/// Errors that can occur in KV operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KVError {
    /// The storage medium failed (I/O, database error, ...)
    Backend(String),
    /// Backend-specific failure with its own error code
    Coded { code: i32, message: String },
}

impl KVError {
    /// Numeric code forwarded to the `fail` handler
    #[must_use]
    pub fn code(&self) -> i32 {
        match self {
            Self::Backend(_) => E_BACKEND,
            Self::Coded { code, .. } => *code,
        }
    }
}

impl std::fmt::Display for KVError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backend(msg) => write!(f, "Storage backend error: {msg}"),
            Self::Coded { message, .. } => f.write_str(message),
        }
    }
}

impl std::error::Error for KVError {}

/// Trait for durable key-value backends
///
/// Every operation completes durably before its future resolves, so the
/// caller may report success as soon as the future returns `Ok`.
pub trait KVStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` when there is no entry. A stored empty string is
    /// `Ok(Some(String::new()))`.
    fn read(&self, key: &str) -> impl Future<Output = Result<Option<String>, KVError>> + Send;

    /// Insert or overwrite the entry for `key`.
    fn write(&self, key: &str, value: &str) -> impl Future<Output = Result<(), KVError>> + Send;

    /// Remove the entry for `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> impl Future<Output = Result<(), KVError>> + Send;

    /// Remove all entries. The store stays usable afterwards.
    fn clear_all(&self) -> impl Future<Output = Result<(), KVError>> + Send;
}
