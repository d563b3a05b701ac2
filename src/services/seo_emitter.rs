//! SEO metadata emitter for Toolhub.
//!
//! Assembles the robots policy, per-page head metadata, JSON-LD structured
//! data, and the sitemap. Every operation is a pure transformation of its
//! inputs; the emitter holds only the configured site identity.

use serde_json::{Map, Value};

use crate::types::errors::SeoError;
use crate::types::seo::{PageMetadata, RobotsPolicy, RobotsRule, SitemapEntry};
use crate::types::tool::Tool;

/// Trait defining SEO emission operations.
pub trait SeoEmitterTrait {
    /// The crawler policy: root and the OG-image API allowed, the API and
    /// internal asset namespaces disallowed, sitemap derived from the base URL.
    fn robots_policy(&self) -> RobotsPolicy;
    /// Renders the policy as a `robots.txt` document.
    fn robots_txt(&self) -> String;
    /// Serializes `data` and wraps it verbatim in a JSON-LD script container.
    /// Serialization failure is the caller's contract violation and is
    /// propagated, not caught.
    fn structured_data_script(&self, data: &Map<String, Value>) -> Result<String, SeoError>;
    /// Head metadata for one tool page.
    fn page_metadata(&self, tool: &Tool) -> PageMetadata;
    /// Ready-made JSON-LD object describing one tool page.
    fn tool_structured_data(&self, tool: &Tool) -> Map<String, Value>;
    /// Sitemap entries: the home page plus every tool's canonical URL.
    fn sitemap_entries(&self, tools: &[Tool]) -> Vec<SitemapEntry>;
    /// Renders the sitemap as XML.
    fn sitemap_xml(&self, tools: &[Tool]) -> String;
}

/// SEO emitter bound to the deployed site's identity.
pub struct SeoEmitter {
    base_url: String,
    site_name: String,
}

impl SeoEmitter {
    /// Creates an emitter for the given base URL and site name.
    ///
    /// The base URL is normalized by stripping a trailing slash; validating
    /// that it is set and absolute is the settings layer's job.
    pub fn new(base_url: &str, site_name: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            site_name: site_name.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl SeoEmitterTrait for SeoEmitter {
    fn robots_policy(&self) -> RobotsPolicy {
        RobotsPolicy {
            rules: vec![RobotsRule {
                user_agent: "*".to_string(),
                allow: vec!["/".to_string(), "/api/og/".to_string()],
                disallow: vec!["/api/".to_string(), "/_static/".to_string()],
            }],
            sitemap: self.absolute_url("/sitemap.xml"),
        }
    }

    fn robots_txt(&self) -> String {
        let policy = self.robots_policy();
        let mut out = String::new();
        for rule in &policy.rules {
            out.push_str(&format!("User-agent: {}\n", rule.user_agent));
            for path in &rule.allow {
                out.push_str(&format!("Allow: {}\n", path));
            }
            for path in &rule.disallow {
                out.push_str(&format!("Disallow: {}\n", path));
            }
            out.push('\n');
        }
        out.push_str(&format!("Sitemap: {}\n", policy.sitemap));
        out
    }

    fn structured_data_script(&self, data: &Map<String, Value>) -> Result<String, SeoError> {
        let json = serde_json::to_string(data)
            .map_err(|e| SeoError::SerializationError(e.to_string()))?;
        Ok(format!(
            "<script type=\"application/ld+json\">{}</script>",
            json
        ))
    }

    fn page_metadata(&self, tool: &Tool) -> PageMetadata {
        PageMetadata {
            title: format!("{} — {}", tool.name, self.site_name),
            description: tool.description.clone(),
            canonical_url: self.absolute_url(&tool.canonical_path()),
        }
    }

    fn tool_structured_data(&self, tool: &Tool) -> Map<String, Value> {
        let mut data = Map::new();
        data.insert(
            "@context".to_string(),
            Value::String("https://schema.org".to_string()),
        );
        data.insert(
            "@type".to_string(),
            Value::String("WebApplication".to_string()),
        );
        data.insert("name".to_string(), Value::String(tool.name.clone()));
        data.insert(
            "description".to_string(),
            Value::String(tool.description.clone()),
        );
        data.insert(
            "url".to_string(),
            Value::String(self.absolute_url(&tool.canonical_path())),
        );
        data.insert(
            "applicationCategory".to_string(),
            Value::String("DeveloperApplication".to_string()),
        );
        data
    }

    fn sitemap_entries(&self, tools: &[Tool]) -> Vec<SitemapEntry> {
        let mut entries = vec![SitemapEntry {
            loc: self.absolute_url("/"),
        }];
        entries.extend(tools.iter().map(|t| SitemapEntry {
            loc: self.absolute_url(&t.canonical_path()),
        }));
        entries
    }

    fn sitemap_xml(&self, tools: &[Tool]) -> String {
        let mut out = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
        );
        for entry in self.sitemap_entries(tools) {
            out.push_str(&format!("  <url><loc>{}</loc></url>\n", entry.loc));
        }
        out.push_str("</urlset>\n");
        out
    }
}
