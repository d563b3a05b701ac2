//! Toolhub database layer.
//!
//! Provides SQLite connection management, schema migrations, and the
//! key-value storage port backing the recent-tools tracker.
//!
//! # Usage
//!
//! ```no_run
//! use toolhub::database::Database;
//!
//! // Open a persistent database
//! let db = Database::open("toolhub.db").expect("failed to open database");
//!
//! // Or use an in-memory database for testing
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//!
//! // Access the underlying connection for queries
//! let conn = db.connection();
//! ```

pub mod connection;
pub mod migrations;
pub mod store;

pub use connection::Database;
pub use store::{KeyValueStore, MemoryStore, SqliteStore};
