//! Recent-tools tracker for Toolhub.
//!
//! Maintains the visitor-local most-recently-used list of tool page URLs,
//! persisted as one serialized list under a single well-known key in the
//! injected [`KeyValueStore`].
//!
//! By contract nothing here ever fails: a broken or missing store degrades
//! recording to a no-op and listing to an empty sequence, and malformed
//! persisted data is treated as "no recent tools".

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::database::store::KeyValueStore;
use crate::types::recent::RecentTool;

/// Well-known storage key for the serialized recent-tools list.
pub const RECENT_TOOLS_KEY: &str = "recent_tools.v1";

/// Default maximum number of entries kept in the list.
pub const DEFAULT_CAPACITY: usize = 8;

/// Trait defining recent-tools tracking operations.
pub trait RecentToolsTrackerTrait {
    /// Records a visit to a tool page. Called once per page-view, when the
    /// page becomes visible. Idempotent with respect to ordering: repeated
    /// calls with the same URL keep a single entry at the front.
    fn record_visit(&mut self, url: &str);
    /// Returns the recent tools, most-recent first. Empty if none recorded
    /// or the store is unavailable.
    fn list_recent_tools(&self) -> Vec<RecentTool>;
    /// Empties the persisted list.
    fn clear(&mut self);
    fn capacity(&self) -> usize;
    fn set_capacity(&mut self, capacity: usize);
}

/// Recent-tools tracker backed by a key-value storage port.
pub struct RecentToolsTracker {
    store: Arc<dyn KeyValueStore>,
    capacity: usize,
}

impl RecentToolsTracker {
    /// Creates a tracker with the default capacity.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_capacity(store, DEFAULT_CAPACITY)
    }

    /// Creates a tracker keeping at most `capacity` entries (minimum 1).
    pub fn with_capacity(store: Arc<dyn KeyValueStore>, capacity: usize) -> Self {
        Self {
            store,
            capacity: capacity.max(1),
        }
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Loads the persisted list, degrading to empty on any failure.
    fn load(&self) -> Vec<RecentTool> {
        let raw = match self.store.get(RECENT_TOOLS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("recent tools unavailable, listing none: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<RecentTool>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                // Corrupted or foreign-format content under our key.
                log::warn!("malformed recent-tools data, resetting: {}", e);
                Vec::new()
            }
        }
    }

    /// Persists the list, swallowing storage failures.
    fn save(&self, entries: &[RecentTool]) {
        let raw = match serde_json::to_string(entries) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("failed to serialize recent tools: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(RECENT_TOOLS_KEY, &raw) {
            log::warn!("failed to persist recent tools: {}", e);
        }
    }
}

impl RecentToolsTrackerTrait for RecentToolsTracker {
    /// Upserts an entry for `url` at the front of the list, updating its
    /// timestamp. Evicts least-recently-used entries past capacity.
    fn record_visit(&mut self, url: &str) {
        if url.is_empty() {
            log::debug!("ignoring visit with empty url");
            return;
        }

        let mut entries = self.load();
        entries.retain(|e| e.url != url);
        entries.insert(
            0,
            RecentTool {
                url: url.to_string(),
                visited_at: Self::now(),
            },
        );
        entries.truncate(self.capacity);

        self.save(&entries);
    }

    fn list_recent_tools(&self) -> Vec<RecentTool> {
        let mut entries = self.load();
        entries.truncate(self.capacity);
        entries
    }

    fn clear(&mut self) {
        self.save(&[]);
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    /// Applies on the next write; an oversized persisted list is also trimmed
    /// on read.
    fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
    }
}
