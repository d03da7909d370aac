pub mod config;
pub mod io;
pub mod options;
pub mod storage;
pub mod validate;

// Re-export the public API for convenience
pub use config::StorageConfig;
pub use io::{KVError, KVStore, MemKV, E_BACKEND};
#[cfg(feature = "sqlitekv")]
pub use io::SqliteKV;
pub use options::{ClearOptions, DeleteOptions, Failure, GetOptions, Outcome, SetOptions};
pub use storage::Storage;
pub use validate::{ValidationError, MAX_KEY_LENGTH, MAX_VALUE_LENGTH};
