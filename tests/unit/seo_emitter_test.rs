//! Unit tests for the SEO metadata emitter.

use serde_json::{json, Map, Value};

use toolhub::managers::catalog::{ToolCatalog, ToolCatalogTrait};
use toolhub::services::seo_emitter::{SeoEmitter, SeoEmitterTrait};

fn emitter() -> SeoEmitter {
    SeoEmitter::new("https://toolhub.dev", "Toolhub")
}

#[test]
fn test_robots_policy_fields() {
    let policy = emitter().robots_policy();

    assert_eq!(policy.rules.len(), 1);
    let rule = &policy.rules[0];
    assert_eq!(rule.user_agent, "*");
    assert_eq!(rule.allow, vec!["/", "/api/og/"]);
    assert_eq!(rule.disallow, vec!["/api/", "/_static/"]);
    assert_eq!(policy.sitemap, "https://toolhub.dev/sitemap.xml");
}

#[test]
fn test_robots_txt_rendering() {
    let txt = emitter().robots_txt();

    assert!(txt.starts_with("User-agent: *\n"));
    assert!(txt.contains("Allow: /\n"));
    assert!(txt.contains("Allow: /api/og/\n"));
    assert!(txt.contains("Disallow: /api/\n"));
    assert!(txt.contains("Disallow: /_static/\n"));
    assert!(txt.ends_with("Sitemap: https://toolhub.dev/sitemap.xml\n"));
}

/// A trailing slash on the configured base URL must not double up in
/// derived URLs.
#[test]
fn test_base_url_trailing_slash_normalized() {
    let emitter = SeoEmitter::new("https://toolhub.dev/", "Toolhub");
    assert_eq!(emitter.base_url(), "https://toolhub.dev");
    assert_eq!(
        emitter.robots_policy().sitemap,
        "https://toolhub.dev/sitemap.xml"
    );
}

#[test]
fn test_structured_data_script_wraps_serialized_json() {
    let mut data = Map::new();
    data.insert("a".to_string(), json!(1));
    data.insert("b".to_string(), json!("x"));

    let script = emitter().structured_data_script(&data).unwrap();
    assert!(script.starts_with("<script type=\"application/ld+json\">"));
    assert!(script.ends_with("</script>"));

    // Round-trip: the script body parses back to the input mapping
    let body = script
        .strip_prefix("<script type=\"application/ld+json\">")
        .unwrap()
        .strip_suffix("</script>")
        .unwrap();
    let parsed: Value = serde_json::from_str(body).unwrap();
    assert_eq!(parsed, Value::Object(data));
}

#[test]
fn test_page_metadata_for_tool() {
    let catalog = ToolCatalog::new();
    let tool = catalog.get_by_path("/tools/formatters/sql").unwrap();

    let meta = emitter().page_metadata(tool);
    assert_eq!(meta.title, "SQL Formatter — Toolhub");
    assert_eq!(meta.description, tool.description);
    assert_eq!(meta.canonical_url, "https://toolhub.dev/tools/formatters/sql");
}

#[test]
fn test_tool_structured_data_shape() {
    let catalog = ToolCatalog::new();
    let tool = catalog.get_by_path("/tools/viewers/markdown").unwrap();

    let data = emitter().tool_structured_data(tool);
    assert_eq!(data["@context"], json!("https://schema.org"));
    assert_eq!(data["@type"], json!("WebApplication"));
    assert_eq!(data["name"], json!("Markdown Viewer"));
    assert_eq!(
        data["url"],
        json!("https://toolhub.dev/tools/viewers/markdown")
    );
}

#[test]
fn test_sitemap_covers_home_and_every_tool() {
    let catalog = ToolCatalog::new();
    let em = emitter();

    let entries = em.sitemap_entries(catalog.list_tools());
    assert_eq!(entries.len(), catalog.list_tools().len() + 1);
    assert_eq!(entries[0].loc, "https://toolhub.dev/");

    for tool in catalog.list_tools() {
        let url = format!("https://toolhub.dev{}", tool.canonical_path());
        assert!(
            entries.iter().any(|e| e.loc == url),
            "sitemap missing {}",
            url
        );
    }
}

#[test]
fn test_sitemap_xml_rendering() {
    let catalog = ToolCatalog::new();
    let xml = emitter().sitemap_xml(catalog.list_tools());

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
    assert!(xml.contains("<url><loc>https://toolhub.dev/</loc></url>"));
    assert!(xml.trim_end().ends_with("</urlset>"));
}
