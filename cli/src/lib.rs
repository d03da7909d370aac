//! Command-line front-end over `sysstorage`
//!
//! Each command is dispatched through [`Storage`] and every handler
//! invocation is collected as an [`Event`], in the order the handlers fired.
//! [`execute`] prints the events as JSON lines and picks the exit status.

use clap::{Parser, Subcommand};
use parking_lot::Mutex;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error};
use sysstorage::{
    ClearOptions, DeleteOptions, GetOptions, KVStore, SetOptions, Storage, StorageConfig,
};

#[derive(Debug, Parser)]
#[command(name = "sysstorage-cli", about = "Persistent key-value preference store")]
pub struct Args {
    /// Sandbox data directory [default: $SYSSTORAGE_DIR, then "."]
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Store file name inside the data directory
    #[arg(long, default_value = sysstorage::config::DEFAULT_FILE_NAME)]
    pub file: String,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    #[must_use]
    pub fn config(&self) -> StorageConfig {
        let config = match &self.dir {
            Some(dir) => StorageConfig::new(dir),
            None => StorageConfig::from_env(),
        };
        config.with_file_name(self.file.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Store a value
    Set { key: String, value: String },
    /// Print a value, or the default when it is not stored
    Get {
        key: String,
        #[arg(long)]
        default: Option<String>,
    },
    /// Remove a value
    Delete { key: String },
    /// Remove all values
    Clear,
}

/// One handler invocation, printed as a JSON line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum Event {
    Success {
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
    Fail {
        message: String,
        code: i32,
    },
    Complete,
}

impl Event {
    #[must_use]
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }
}

type EventLog = Arc<Mutex<Vec<Event>>>;

fn on_fail(log: &EventLog) -> impl FnOnce(&str, i32) + Send + 'static {
    let log = Arc::clone(log);
    move |message: &str, code: i32| {
        log.lock().push(Event::Fail {
            message: message.to_string(),
            code,
        });
    }
}

fn on_complete(log: &EventLog) -> impl FnOnce() + Send + 'static {
    let log = Arc::clone(log);
    move || log.lock().push(Event::Complete)
}

fn on_success(log: &EventLog) -> impl FnOnce() + Send + 'static {
    let log = Arc::clone(log);
    move || log.lock().push(Event::Success { value: None })
}

/// Run one command and return the handler events
pub async fn run<K: KVStore>(storage: &Storage<K>, command: Command) -> Vec<Event> {
    let log: EventLog = Arc::default();

    match command {
        Command::Set { key, value } => {
            let options = SetOptions::new(key, value)
                .success(on_success(&log))
                .fail(on_fail(&log))
                .complete(on_complete(&log));
            storage.set(options).await;
        }
        Command::Get { key, default } => {
            let success_log = Arc::clone(&log);
            let mut options = GetOptions::new(key)
                .success(move |value| success_log.lock().push(Event::Success { value }))
                .fail(on_fail(&log))
                .complete(on_complete(&log));
            if let Some(default) = default {
                options = options.default(default);
            }
            storage.get(options).await;
        }
        Command::Delete { key } => {
            let options = DeleteOptions::new(key)
                .success(on_success(&log))
                .fail(on_fail(&log))
                .complete(on_complete(&log));
            storage.delete(options).await;
        }
        Command::Clear => {
            let options = ClearOptions::new()
                .success(on_success(&log))
                .fail(on_fail(&log))
                .complete(on_complete(&log));
            storage.clear(options).await;
        }
    }

    let events = log.lock().clone();
    events
}

/// Exit status when every handler call succeeded
pub const EXIT_OK: u8 = 0;

/// Exit status when `fail` fired or the store could not be used
pub const EXIT_FAILURE: u8 = 1;

/// Write one JSON line per event; returns whether any event is a failure
///
/// # Errors
///
/// Returns error if serialization or writing fails.
pub fn write_events<W: Write>(out: &mut W, events: &[Event]) -> std::io::Result<bool> {
    let mut failed = false;
    for event in events {
        failed |= event.is_fail();
        serde_json::to_writer(&mut *out, event)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(failed)
}

/// Open the configured store, run the command, print its events
///
/// Returns the process exit status.
pub async fn execute<W: Write>(args: Args, out: &mut W) -> u8 {
    let config = args.config();
    debug!(path = %config.db_path().display(), "opening store");

    let storage = match Storage::open(&config) {
        Ok(storage) => storage,
        Err(e) => {
            error!(error = %e, "cannot open store");
            return EXIT_FAILURE;
        }
    };

    let events = run(&storage, args.command).await;

    match write_events(out, &events) {
        Ok(false) => EXIT_OK,
        Ok(true) => EXIT_FAILURE,
        Err(e) => {
            error!(error = %e, "cannot print events");
            EXIT_FAILURE
        }
    }
}
