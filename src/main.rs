//! Toolhub — server core for a developer-utilities web portal.
//!
//! Entry point: runs an interactive console demo of every component.
//! The production surface is the `toolhub-rpc` binary.

fn main() {
    env_logger::init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║               Toolhub v{} — Demo Mode                    ║", env!("CARGO_PKG_VERSION"));
    println!("║      Developer-utilities portal core                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_database();
    demo_settings();
    demo_catalog();
    demo_routes();
    demo_recent_tools();
    demo_seo();
    demo_app_core();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_database() {
    use toolhub::database::{Database, KeyValueStore, SqliteStore};
    section("Database Layer");

    let db = Database::open_in_memory().expect("Failed to open database");
    let tables: Vec<String> = {
        let conn = db.connection();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect()
    };
    println!("  Created {} tables: {}", tables.len(), tables.join(", "));

    let store = SqliteStore::new(std::sync::Arc::new(db));
    store.set("demo.key", "demo value").unwrap();
    println!("  KV roundtrip: {:?}", store.get("demo.key").unwrap());
    println!("  ✓ Database + migrations OK");
    println!();
}

fn demo_settings() {
    use toolhub::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
    section("Settings Engine");

    let mut engine = SettingsEngine::new(Some("demo_settings.json".to_string()));
    let settings = engine.load().unwrap();
    println!("  Base URL: {}", settings.site.base_url);
    println!("  Site name: {}", settings.site.name);
    println!("  Recent capacity: {}", settings.recent.capacity);

    engine.set_value("recent.capacity", serde_json::json!(5)).unwrap();
    println!("  Changed capacity to: {}", engine.get_settings().recent.capacity);

    engine.reset().unwrap();
    println!("  Reset to defaults: capacity = {}", engine.get_settings().recent.capacity);
    let _ = std::fs::remove_file("demo_settings.json");
    println!("  ✓ SettingsEngine OK");
    println!();
}

fn demo_catalog() {
    use toolhub::managers::catalog::{ToolCatalog, ToolCatalogTrait};
    use toolhub::types::tool::ToolCategory;
    section("Tool Catalog");

    let catalog = ToolCatalog::new();
    println!("  Registered tools: {}", catalog.list_tools().len());

    let formatters = catalog.list_by_category(ToolCategory::Formatters);
    println!("  Formatters: {}", formatters.iter().map(|t| t.name.as_str()).collect::<Vec<_>>().join(", "));

    let tool = catalog.get_by_path("/tools/minifiers/css").unwrap();
    println!("  Lookup /tools/minifiers/css -> {}", tool.name);

    let results = catalog.search_tools("json");
    println!("  Search 'json': {} result(s)", results.len());
    println!("  ✓ ToolCatalog OK");
    println!();
}

fn demo_routes() {
    use toolhub::services::route_rewriter::{RouteRewriter, RouteRewriterTrait};
    section("Route Rewriter");

    let rewriter = RouteRewriter::new();
    println!("  Rules: {}", rewriter.rules().len());
    println!("  /css-minifier -> {}", rewriter.resolve("/css-minifier"));
    println!("  /sql-formatter -> {}", rewriter.resolve("/sql-formatter"));
    println!("  /about (no match) -> {}", rewriter.resolve("/about"));
    println!("  ✓ RouteRewriter OK");
    println!();
}

fn demo_recent_tools() {
    use std::sync::Arc;
    use toolhub::database::MemoryStore;
    use toolhub::managers::recent_tools::{RecentToolsTracker, RecentToolsTrackerTrait};
    section("Recent-Tools Tracker");

    let store = Arc::new(MemoryStore::new());
    let mut tracker = RecentToolsTracker::new(store);

    tracker.record_visit("/tools/formatters/css");
    tracker.record_visit("/tools/minifiers/json");
    tracker.record_visit("/tools/formatters/css"); // repeat visit
    let recent = tracker.list_recent_tools();
    println!("  Recorded 3 visits (2 unique URLs), list length = {}", recent.len());
    println!("  Most recent: {}", recent[0].url);

    tracker.clear();
    println!("  Cleared: {} entries", tracker.list_recent_tools().len());
    println!("  ✓ RecentToolsTracker OK");
    println!();
}

fn demo_seo() {
    use toolhub::managers::catalog::{ToolCatalog, ToolCatalogTrait};
    use toolhub::services::seo_emitter::{SeoEmitter, SeoEmitterTrait};
    section("SEO Emitter");

    let catalog = ToolCatalog::new();
    let emitter = SeoEmitter::new("https://toolhub.dev", "Toolhub");

    let policy = emitter.robots_policy();
    println!("  Robots: {} allow, {} disallow, sitemap {}",
        policy.rules[0].allow.len(), policy.rules[0].disallow.len(), policy.sitemap);

    let tool = catalog.get_by_path("/tools/formatters/sql").unwrap();
    let meta = emitter.page_metadata(tool);
    println!("  Page title: {}", meta.title);

    let script = emitter
        .structured_data_script(&emitter.tool_structured_data(tool))
        .unwrap();
    println!("  JSON-LD script: {} bytes", script.len());

    let xml = emitter.sitemap_xml(catalog.list_tools());
    println!("  Sitemap: {} bytes, {} entries", xml.len(), emitter.sitemap_entries(catalog.list_tools()).len());
    println!("  ✓ SeoEmitter OK");
    println!();
}

fn demo_app_core() {
    use toolhub::app::App;
    section("App Core (full lifecycle)");

    let mut app = App::new_in_memory("demo_app_settings.json").unwrap();
    println!("  Initialized App with all components");

    app.startup();
    println!("  Startup sequence: settings → tracker capacity → SEO identity");
    let _ = std::fs::remove_file("demo_app_settings.json");
    println!("  ✓ App Core OK");
}
