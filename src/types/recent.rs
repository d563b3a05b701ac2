use serde::{Deserialize, Serialize};

/// One tool page a visitor has opened, as kept in the recent-tools list.
///
/// `url` is the canonical tool path and the unique key of the list;
/// `visited_at` is the UNIX timestamp of the most recent visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentTool {
    pub url: String,
    pub visited_at: i64,
}
