//! Shared helpers for the integration tests

#![allow(dead_code)]

use parking_lot::Mutex;
use std::sync::Arc;
use sysstorage::{ClearOptions, DeleteOptions, GetOptions, KVStore, SetOptions, Storage};

/// One handler invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Success(Option<String>),
    Fail(String, i32),
    Complete,
}

/// Records handler invocations in call order
#[derive(Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<Event>>>);

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.lock().clone()
    }

    fn push(&self, event: Event) {
        self.0.lock().push(event);
    }

    pub fn set(&self, key: &str, value: &str) -> SetOptions {
        let (s, f, c) = (self.clone(), self.clone(), self.clone());
        SetOptions::new(key, value)
            .success(move || s.push(Event::Success(None)))
            .fail(move |msg, code| f.push(Event::Fail(msg.to_string(), code)))
            .complete(move || c.push(Event::Complete))
    }

    pub fn get(&self, key: &str, default: Option<&str>) -> GetOptions {
        let (s, f, c) = (self.clone(), self.clone(), self.clone());
        let mut options = GetOptions::new(key)
            .success(move |value| s.push(Event::Success(value)))
            .fail(move |msg, code| f.push(Event::Fail(msg.to_string(), code)))
            .complete(move || c.push(Event::Complete));
        if let Some(default) = default {
            options = options.default(default);
        }
        options
    }

    pub fn delete(&self, key: &str) -> DeleteOptions {
        let (s, f, c) = (self.clone(), self.clone(), self.clone());
        DeleteOptions::new(key)
            .success(move || s.push(Event::Success(None)))
            .fail(move |msg, code| f.push(Event::Fail(msg.to_string(), code)))
            .complete(move || c.push(Event::Complete))
    }

    pub fn clear(&self) -> ClearOptions {
        let (s, f, c) = (self.clone(), self.clone(), self.clone());
        ClearOptions::new()
            .success(move || s.push(Event::Success(None)))
            .fail(move |msg, code| f.push(Event::Fail(msg.to_string(), code)))
            .complete(move || c.push(Event::Complete))
    }
}

/// Read `key` through the public API and return what `success` received
pub async fn read_back<K: KVStore>(storage: &Storage<K>, key: &str, default: Option<&str>) -> Option<String> {
    let recorder = Recorder::new();
    storage.get(recorder.get(key, default)).await;
    match recorder.events().as_slice() {
        [Event::Success(value), Event::Complete] => value.clone(),
        other => panic!("unexpected events for get({key:?}): {other:?}"),
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}
