use serde::{Deserialize, Serialize};

/// Allow/disallow path lists for a single user agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotsRule {
    pub user_agent: String,
    pub allow: Vec<String>,
    pub disallow: Vec<String>,
}

/// The robots policy served at the crawler well-known path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotsPolicy {
    pub rules: Vec<RobotsRule>,
    /// Absolute URL of the sitemap.
    pub sitemap: String,
}

/// Head metadata for a single tool page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
}

/// One URL entry in the sitemap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapEntry {
    pub loc: String,
}
