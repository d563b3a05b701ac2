//! RPC method handler for the Toolhub JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The `handle_method` function dispatches JSON-RPC method calls to the
//! appropriate managers and services via the `App` struct.
//!
//! The hosting web layer calls `recent.record` exactly once per tool
//! page-view, at the point the page becomes visible to the visitor.

use std::sync::Mutex;

use crate::app::App;
use crate::managers::catalog::ToolCatalogTrait;
use crate::managers::recent_tools::RecentToolsTrackerTrait;
use crate::services::route_rewriter::RouteRewriterTrait;
use crate::services::seo_emitter::SeoEmitterTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::tool::{Tool, ToolCategory};

use serde_json::{json, Value};

fn tool_json(tool: &Tool) -> Value {
    json!({
        "slug": tool.slug,
        "name": tool.name,
        "description": tool.description,
        "category": tool.category.path_segment(),
        "path": tool.canonical_path(),
    })
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        // ─── Recent tools ───
        "recent.record" => {
            let url = params.get("url").and_then(|v| v.as_str()).ok_or("missing url")?;
            if url.is_empty() {
                return Err("url must be a non-empty canonical path".to_string());
            }
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.recent_tools.record_visit(url);
            Ok(json!({"ok": true}))
        }
        "recent.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let entries = a.recent_tools.list_recent_tools();
            let arr: Vec<Value> = entries
                .iter()
                .map(|e| json!({"url": e.url, "visited_at": e.visited_at}))
                .collect();
            Ok(json!(arr))
        }
        "recent.clear" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.recent_tools.clear();
            Ok(json!({"ok": true}))
        }

        // ─── Routing ───
        "route.resolve" => {
            let path = params.get("path").and_then(|v| v.as_str()).ok_or("missing path")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let rewritten = a.route_rewriter.rewrite(path);
            Ok(json!({
                "rewritten": rewritten.is_some(),
                "path": rewritten.unwrap_or_else(|| path.to_string()),
            }))
        }

        // ─── Catalog ───
        "catalog.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let tools: Vec<Value> = match params.get("category").and_then(|v| v.as_str()) {
                Some(segment) => {
                    let category = ToolCategory::from_path_segment(segment)
                        .map_err(|e| e.to_string())?;
                    a.catalog
                        .list_by_category(category)
                        .iter()
                        .map(|t| tool_json(t))
                        .collect()
                }
                None => a.catalog.list_tools().iter().map(tool_json).collect(),
            };
            Ok(json!(tools))
        }
        "catalog.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let tool = match params.get("path").and_then(|v| v.as_str()) {
                Some(path) => a.catalog.get_by_path(path),
                None => {
                    let slug = params.get("slug").and_then(|v| v.as_str()).ok_or("missing path or slug")?;
                    a.catalog.get_by_slug(slug)
                }
            }
            .map_err(|e| e.to_string())?;
            Ok(tool_json(tool))
        }
        "catalog.search" => {
            let query = params.get("query").and_then(|v| v.as_str()).ok_or("missing query")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let tools: Vec<Value> = a.catalog.search_tools(query).iter().map(|t| tool_json(t)).collect();
            Ok(json!(tools))
        }

        // ─── SEO ───
        "seo.robots" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let policy = a.seo_emitter.robots_policy();
            Ok(json!({
                "policy": serde_json::to_value(&policy).map_err(|e| e.to_string())?,
                "robots_txt": a.seo_emitter.robots_txt(),
            }))
        }
        "seo.jsonld" => {
            let data = params
                .get("data")
                .and_then(|v| v.as_object())
                .ok_or("missing data object")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let script = a
                .seo_emitter
                .structured_data_script(data)
                .map_err(|e| e.to_string())?;
            Ok(json!({"script": script}))
        }
        "seo.page_meta" => {
            let path = params.get("path").and_then(|v| v.as_str()).ok_or("missing path")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let tool = a.catalog.get_by_path(path).map_err(|e| e.to_string())?;
            let meta = a.seo_emitter.page_metadata(tool);
            let structured = a.seo_emitter.tool_structured_data(tool);
            let script = a
                .seo_emitter
                .structured_data_script(&structured)
                .map_err(|e| e.to_string())?;
            Ok(json!({
                "title": meta.title,
                "description": meta.description,
                "canonical_url": meta.canonical_url,
                "jsonld": script,
            }))
        }
        "seo.sitemap" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let tools = a.catalog.list_tools().to_vec();
            let entries: Vec<Value> = a
                .seo_emitter
                .sitemap_entries(&tools)
                .iter()
                .map(|e| json!({"loc": e.loc}))
                .collect();
            Ok(json!({
                "entries": entries,
                "xml": a.seo_emitter.sitemap_xml(&tools),
            }))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            a.apply_settings();
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
