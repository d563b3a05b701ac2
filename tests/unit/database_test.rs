//! Unit tests for the database layer and the key-value storage port.

use std::sync::Arc;

use toolhub::database::{migrations, Database, KeyValueStore, SqliteStore};

#[test]
fn test_open_in_memory_creates_tables() {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    let conn = db.connection();

    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
        .unwrap();
    let tables: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .filter_map(|r| r.ok())
        .collect();

    assert!(tables.contains(&"kv_store".to_string()));
    assert!(tables.contains(&"schema_version".to_string()));
}

#[test]
fn test_schema_version_recorded() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(
        migrations::get_schema_version(db.connection()),
        migrations::CURRENT_SCHEMA_VERSION
    );
}

#[test]
fn test_migrations_idempotent() {
    let db = Database::open_in_memory().unwrap();
    // Running migrations again on an up-to-date database must not fail
    migrations::run_all(db.connection()).unwrap();
    assert_eq!(
        migrations::get_schema_version(db.connection()),
        migrations::CURRENT_SCHEMA_VERSION
    );
}

#[test]
fn test_open_persistent_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("toolhub.db");

    {
        let db = Database::open(&path).unwrap();
        let store = SqliteStore::new(Arc::new(db));
        store.set("k", "persisted").unwrap();
    }

    // Reopen and read back
    let db = Database::open(&path).unwrap();
    let store = SqliteStore::new(Arc::new(db));
    assert_eq!(store.get("k").unwrap().as_deref(), Some("persisted"));
}

#[test]
fn test_store_get_missing_key_is_none() {
    let db = Arc::new(Database::open_in_memory().unwrap());
    let store = SqliteStore::new(db);
    assert!(store.get("no-such-key").unwrap().is_none());
}

#[test]
fn test_store_set_overwrites() {
    let db = Arc::new(Database::open_in_memory().unwrap());
    let store = SqliteStore::new(db.clone());

    store.set("key", "first").unwrap();
    store.set("key", "second").unwrap();
    assert_eq!(store.get("key").unwrap().as_deref(), Some("second"));

    let count: i64 = db
        .connection()
        .query_row("SELECT COUNT(*) FROM kv_store", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}
