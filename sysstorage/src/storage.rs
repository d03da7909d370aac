//! Operation dispatcher
//!
//! Every call goes through the same steps: validate the input, call the
//! backend unless validation failed, turn the result into an [`Outcome`],
//! and hand it to the handlers (`success` or `fail`, then `complete`).
//! The returned future resolves only after the handlers have run and never
//! carries a value; failures are visible through `fail` alone.

use tracing::{debug, debug_span, warn};

use crate::io::KVStore;
use crate::options::{ClearOptions, DeleteOptions, GetOptions, Handlers, Outcome, SetOptions};
use crate::validate;

/// Preference store for one sandbox
///
/// Calls may run concurrently; the backend serializes conflicting writes.
pub struct Storage<K: KVStore> {
    kv: K,
}

impl<K: KVStore> Storage<K> {
    #[must_use]
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    /// The underlying backend
    #[must_use]
    pub fn backend(&self) -> &K {
        &self.kv
    }

    /// Store `value` under `key`, replacing any previous value
    pub async fn set(&self, options: SetOptions) {
        let SetOptions {
            key,
            value,
            handlers,
        } = options;
        debug!(op = "set", key = %key, "dispatch");

        let outcome = self.run_set(&key, &value).await;
        finish("set", Some(&key), handlers, outcome);
    }

    /// Read the value under `key`, falling back to the configured default
    pub async fn get(&self, options: GetOptions) {
        let GetOptions {
            key,
            default,
            handlers,
        } = options;
        debug!(op = "get", key = %key, "dispatch");

        let outcome = self.run_get(&key, default).await;
        finish("get", Some(&key), handlers, outcome);
    }

    /// Remove the entry for `key`; succeeds if there is none
    pub async fn delete(&self, options: DeleteOptions) {
        let DeleteOptions { key, handlers } = options;
        debug!(op = "delete", key = %key, "dispatch");

        let outcome = self.run_delete(&key).await;
        finish("delete", Some(&key), handlers, outcome);
    }

    /// Remove every entry
    pub async fn clear(&self, options: ClearOptions) {
        debug!(op = "clear", "dispatch");

        let outcome = self.kv.clear_all().await.map_err(Into::into);
        finish("clear", None, options.handlers, outcome);
    }

    async fn run_set(&self, key: &str, value: &str) -> Outcome<()> {
        validate::check_set(key, value)?;
        self.kv.write(key, value).await?;
        Ok(())
    }

    async fn run_get(&self, key: &str, default: Option<String>) -> Outcome<Option<String>> {
        validate::check_get(default.as_deref())?;
        if key.is_empty() {
            return Ok(default);
        }
        let stored = self.kv.read(key).await?;
        Ok(stored.or(default))
    }

    async fn run_delete(&self, key: &str) -> Outcome<()> {
        validate::check_delete(key)?;
        self.kv.remove(key).await?;
        Ok(())
    }
}

#[cfg(feature = "sqlitekv")]
impl Storage<crate::io::SqliteKV> {
    /// Open the durable store of a sandbox
    ///
    /// # Errors
    ///
    /// Returns error if the store file cannot be created or opened.
    pub fn open(config: &crate::StorageConfig) -> Result<Self, crate::io::KVError> {
        crate::io::SqliteKV::open_config(config).map(Self::new)
    }
}

/// `key` is `None` for operations that are not about a single key
fn finish<T>(op: &'static str, key: Option<&str>, handlers: Handlers<T>, outcome: Outcome<T>) {
    let span = match key {
        Some(key) => debug_span!("storage", op, key = %key),
        None => debug_span!("storage", op),
    };
    let _enter = span.enter();

    match &outcome {
        Ok(_) => debug!("resolved"),
        Err(failure) => {
            warn!(code = failure.code, reason = %failure.message, "operation failed");
        }
    }
    handlers.settle(outcome);
    debug!("completed");
}
