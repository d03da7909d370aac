//! Integration tests for MemKV module

use sysstorage::{KVStore, MemKV};

#[tokio::test]
async fn test_write_then_read() {
    let kv = MemKV::new();

    kv.write("test/key", "hello world").await.unwrap();

    assert_eq!(
        kv.read("test/key").await.unwrap(),
        Some("hello world".to_string())
    );
}

#[tokio::test]
async fn test_read_not_found() {
    let kv = MemKV::new();

    assert_eq!(kv.read("nonexistent").await.unwrap(), None);
}

#[tokio::test]
async fn test_write_overwrites() {
    let kv = MemKV::new();

    kv.write("key", "initial data").await.unwrap();
    kv.write("key", "replaced").await.unwrap();

    assert_eq!(kv.read("key").await.unwrap(), Some("replaced".to_string()));
}

#[tokio::test]
async fn test_remove_missing_is_ok() {
    let kv = MemKV::new();

    kv.write("key", "v").await.unwrap();
    kv.remove("other").await.unwrap();
    kv.remove("key").await.unwrap();

    assert_eq!(kv.read("key").await.unwrap(), None);
}

#[tokio::test]
async fn test_clear_all() {
    let kv = MemKV::new();

    kv.write("path1", "a").await.unwrap();
    kv.write("path2", "b").await.unwrap();

    kv.clear_all().await.unwrap();

    assert!(kv.read("path1").await.unwrap().is_none());
    assert!(kv.read("path2").await.unwrap().is_none());
    assert!(kv.is_empty());
}
