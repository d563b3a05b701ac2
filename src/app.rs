//! App Core for Toolhub.
//!
//! Central struct holding all managers and services, managing application lifecycle.

use std::sync::Arc;

use crate::database::connection::Database;
use crate::database::store::SqliteStore;
use crate::managers::catalog::ToolCatalog;
use crate::managers::recent_tools::{RecentToolsTracker, RecentToolsTrackerTrait};
use crate::services::route_rewriter::RouteRewriter;
use crate::services::seo_emitter::SeoEmitter;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

/// Central application struct holding all managers and services.
pub struct App {
    pub db: Arc<Database>,
    pub settings_engine: SettingsEngine,
    pub catalog: ToolCatalog,
    pub route_rewriter: RouteRewriter,
    pub recent_tools: RecentToolsTracker,
    pub seo_emitter: SeoEmitter,
}

impl App {
    /// Creates a new App, initializing all managers and services.
    ///
    /// The recent-tools tracker is bound to the SQLite-backed store; tests
    /// that need a different storage port construct the tracker directly.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);

        let mut settings_engine = SettingsEngine::new(None);
        let _ = settings_engine.load();

        let store = Arc::new(SqliteStore::new(db.clone()));
        let recent_tools = RecentToolsTracker::new(store);

        let catalog = ToolCatalog::new();
        let route_rewriter = RouteRewriter::new();

        let site = &settings_engine.get_settings().site;
        let seo_emitter = SeoEmitter::new(&site.base_url, &site.name);

        Ok(Self {
            db,
            settings_engine,
            catalog,
            route_rewriter,
            recent_tools,
            seo_emitter,
        })
    }

    /// Creates an App backed by an in-memory database and an explicit
    /// settings path. Used by tests and the demo binary.
    pub fn new_in_memory(settings_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open_in_memory()?);

        let mut settings_engine = SettingsEngine::new(Some(settings_path.to_string()));
        let _ = settings_engine.load();

        let store = Arc::new(SqliteStore::new(db.clone()));
        let recent_tools = RecentToolsTracker::new(store);

        let site = &settings_engine.get_settings().site;
        let seo_emitter = SeoEmitter::new(&site.base_url, &site.name);

        Ok(Self {
            db,
            settings_engine,
            catalog: ToolCatalog::new(),
            route_rewriter: RouteRewriter::new(),
            recent_tools,
            seo_emitter,
        })
    }

    /// Startup sequence: load settings and apply them to the components that
    /// consume them.
    pub fn startup(&mut self) {
        let _ = self.settings_engine.load();
        self.apply_settings();
    }

    /// Pushes the current settings into the tracker capacity and the SEO
    /// emitter's site identity. Called after startup and after every
    /// settings change.
    pub fn apply_settings(&mut self) {
        let settings = self.settings_engine.get_settings();
        self.recent_tools.set_capacity(settings.recent.capacity);
        self.seo_emitter = SeoEmitter::new(&settings.site.base_url, &settings.site.name);
    }
}
