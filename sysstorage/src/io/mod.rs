//! I/O module for sysstorage
//!
//! Contains the backend abstraction and its implementations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │  Storage (dispatch layer)           │
//! │  - validation                       │
//! │  - success/fail/complete handlers   │
//! └─────────────────────────────────────┘
//!          ▲
//!          │ read / write / remove / clear_all
//!          ▼
//! ┌─────────────────────────────────────┐
//! │  KVStore (backend trait)            │
//! │  - durable string entries           │
//! │  - Option for absent keys           │
//! └─────────────────────────────────────┘
//!          ▲               ▲
//!          │               │
//!        MemKV         SqliteKV
//! ```

pub mod memkv;
#[cfg(feature = "sqlitekv")]
pub mod sqlitekv;
pub mod types;

pub use memkv::MemKV;
#[cfg(feature = "sqlitekv")]
pub use sqlitekv::SqliteKV;
pub use types::{KVError, KVStore, E_BACKEND};
