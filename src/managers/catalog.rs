//! Tool catalog for Toolhub.
//!
//! In-memory registry of the tool pages the portal serves. The catalog holds
//! identity and routing metadata only; the formatting/minifying work behind
//! each tool lives elsewhere.

use crate::types::errors::CatalogError;
use crate::types::tool::{Tool, ToolCategory};

/// Trait defining tool catalog operations.
pub trait ToolCatalogTrait {
    fn list_tools(&self) -> &[Tool];
    fn list_by_category(&self, category: ToolCategory) -> Vec<&Tool>;
    fn get_by_slug(&self, slug: &str) -> Result<&Tool, CatalogError>;
    /// Case-insensitive substring search over tool names and descriptions.
    fn search_tools(&self, query: &str) -> Vec<&Tool>;
    /// Resolves a canonical path (`/tools/<category>/<slug>`) to a tool.
    fn get_by_path(&self, path: &str) -> Result<&Tool, CatalogError>;
}

/// Catalog of built-in tools.
pub struct ToolCatalog {
    tools: Vec<Tool>,
}

fn tool(slug: &str, name: &str, description: &str, category: ToolCategory) -> Tool {
    Tool {
        slug: slug.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
    }
}

impl ToolCatalog {
    /// Creates a catalog populated with the portal's built-in tools.
    pub fn new() -> Self {
        Self {
            tools: vec![
                tool(
                    "css",
                    "CSS Formatter",
                    "Format and beautify CSS stylesheets",
                    ToolCategory::Formatters,
                ),
                tool(
                    "sql",
                    "SQL Formatter",
                    "Format SQL queries with configurable keyword casing",
                    ToolCategory::Formatters,
                ),
                tool(
                    "json",
                    "JSON Formatter",
                    "Pretty-print and validate JSON documents",
                    ToolCategory::Formatters,
                ),
                tool(
                    "css",
                    "CSS Minifier",
                    "Minify CSS stylesheets for production",
                    ToolCategory::Minifiers,
                ),
                tool(
                    "json",
                    "JSON Minifier",
                    "Strip whitespace from JSON documents",
                    ToolCategory::Minifiers,
                ),
                tool(
                    "json",
                    "JSON Viewer",
                    "Inspect JSON documents as a collapsible tree",
                    ToolCategory::Viewers,
                ),
                tool(
                    "markdown",
                    "Markdown Viewer",
                    "Render Markdown documents with styled output",
                    ToolCategory::Viewers,
                ),
            ],
        }
    }
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolCatalogTrait for ToolCatalog {
    fn list_tools(&self) -> &[Tool] {
        &self.tools
    }

    fn list_by_category(&self, category: ToolCategory) -> Vec<&Tool> {
        self.tools
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    /// Slugs are unique within a category but not across the catalog
    /// ("css" names both a formatter and a minifier), so bare-slug lookup
    /// returns the first registration.
    fn get_by_slug(&self, slug: &str) -> Result<&Tool, CatalogError> {
        self.tools
            .iter()
            .find(|t| t.slug == slug)
            .ok_or_else(|| CatalogError::NotFound(slug.to_string()))
    }

    fn search_tools(&self, query: &str) -> Vec<&Tool> {
        let needle = query.to_lowercase();
        self.tools
            .iter()
            .filter(|t| {
                t.name.to_lowercase().contains(&needle)
                    || t.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    fn get_by_path(&self, path: &str) -> Result<&Tool, CatalogError> {
        let mut segments = path.trim_start_matches('/').split('/');
        match (segments.next(), segments.next(), segments.next(), segments.next()) {
            (Some("tools"), Some(category), Some(slug), None) => {
                let category = ToolCategory::from_path_segment(category)?;
                self.tools
                    .iter()
                    .find(|t| t.category == category && t.slug == slug)
                    .ok_or_else(|| CatalogError::NotFound(slug.to_string()))
            }
            _ => Err(CatalogError::NotFound(path.to_string())),
        }
    }
}
