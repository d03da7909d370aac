//! Per-call options and result handlers
//!
//! Each operation takes an options value carrying its inputs and the
//! optional `success`, `fail` and `complete` handlers. Handlers that are not
//! supplied are skipped.

use crate::io::KVError;
use crate::validate::ValidationError;

type SuccessFn<T> = Box<dyn FnOnce(T) + Send>;
type FailFn = Box<dyn FnOnce(&str, i32) + Send>;
type CompleteFn = Box<dyn FnOnce() + Send>;

/// Failure reported through the `fail` handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub message: String,
    pub code: i32,
}

impl From<ValidationError> for Failure {
    fn from(e: ValidationError) -> Self {
        Self {
            message: e.message().to_string(),
            code: e.code(),
        }
    }
}

impl From<KVError> for Failure {
    fn from(e: KVError) -> Self {
        Self {
            code: e.code(),
            message: e.to_string(),
        }
    }
}

/// Result of one operation, before it is handed to the handlers
pub type Outcome<T> = Result<T, Failure>;

/// The three optional handlers of one call
pub struct Handlers<T> {
    success: Option<SuccessFn<T>>,
    fail: Option<FailFn>,
    complete: Option<CompleteFn>,
}

impl<T> Default for Handlers<T> {
    fn default() -> Self {
        Self {
            success: None,
            fail: None,
            complete: None,
        }
    }
}

impl<T> Handlers<T> {
    /// Deliver the outcome: `success` or `fail`, then `complete`
    ///
    /// Consumes the handlers, so each fires at most once.
    pub(crate) fn settle(self, outcome: Outcome<T>) {
        match outcome {
            Ok(value) => {
                if let Some(success) = self.success {
                    success(value);
                }
            }
            Err(failure) => {
                if let Some(fail) = self.fail {
                    fail(&failure.message, failure.code);
                }
            }
        }
        if let Some(complete) = self.complete {
            complete();
        }
    }
}

macro_rules! fail_and_complete {
    ($options:ty) => {
        impl $options {
            /// Handler for a failed call: `(message, code)`
            #[must_use]
            pub fn fail(mut self, f: impl FnOnce(&str, i32) + Send + 'static) -> Self {
                self.handlers.fail = Some(Box::new(f));
                self
            }

            /// Handler fired last on every path
            #[must_use]
            pub fn complete(mut self, f: impl FnOnce() + Send + 'static) -> Self {
                self.handlers.complete = Some(Box::new(f));
                self
            }
        }
    };
}

/// Options for [`Storage::set`](crate::Storage::set)
pub struct SetOptions {
    pub(crate) key: String,
    pub(crate) value: String,
    pub(crate) handlers: Handlers<()>,
}

impl SetOptions {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            handlers: Handlers::default(),
        }
    }

    #[must_use]
    pub fn success(mut self, f: impl FnOnce() + Send + 'static) -> Self {
        self.handlers.success = Some(Box::new(move |()| f()));
        self
    }
}

fail_and_complete!(SetOptions);

/// Options for [`Storage::get`](crate::Storage::get)
pub struct GetOptions {
    pub(crate) key: String,
    pub(crate) default: Option<String>,
    pub(crate) handlers: Handlers<Option<String>>,
}

impl GetOptions {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            default: None,
            handlers: Handlers::default(),
        }
    }

    /// Value resolved when the key is empty or not stored
    #[must_use]
    pub fn default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Receives the stored value, the default, or `None` when neither exists
    #[must_use]
    pub fn success(mut self, f: impl FnOnce(Option<String>) + Send + 'static) -> Self {
        self.handlers.success = Some(Box::new(f));
        self
    }
}

fail_and_complete!(GetOptions);

/// Options for [`Storage::delete`](crate::Storage::delete)
pub struct DeleteOptions {
    pub(crate) key: String,
    pub(crate) handlers: Handlers<()>,
}

impl DeleteOptions {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            handlers: Handlers::default(),
        }
    }

    #[must_use]
    pub fn success(mut self, f: impl FnOnce() + Send + 'static) -> Self {
        self.handlers.success = Some(Box::new(move |()| f()));
        self
    }
}

fail_and_complete!(DeleteOptions);

/// Options for [`Storage::clear`](crate::Storage::clear)
#[derive(Default)]
pub struct ClearOptions {
    pub(crate) handlers: Handlers<()>,
}

impl ClearOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn success(mut self, f: impl FnOnce() + Send + 'static) -> Self {
        self.handlers.success = Some(Box::new(move |()| f()));
        self
    }
}

fail_and_complete!(ClearOptions);
