use serde::{Deserialize, Serialize};

/// Identity of the deployed site, consumed by the SEO emitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Absolute http(s) base URL of the deployment.
    pub base_url: String,
    pub name: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            base_url: "https://toolhub.dev".to_string(),
            name: "Toolhub".to_string(),
        }
    }
}

/// Recent-tools tracker settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSettings {
    /// Maximum number of entries kept in the recent-tools list.
    pub capacity: usize,
}

impl Default for RecentSettings {
    fn default() -> Self {
        Self { capacity: 8 }
    }
}

/// All portal settings, persisted as one JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PortalSettings {
    pub site: SiteSettings,
    pub recent: RecentSettings,
}
