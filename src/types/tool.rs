use serde::{Deserialize, Serialize};

use super::errors::CatalogError;

/// Category a tool belongs to. Determines its canonical path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolCategory {
    Formatters,
    Minifiers,
    Viewers,
}

impl ToolCategory {
    /// Path segment used in canonical tool URLs, e.g. `/tools/minifiers/css`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            ToolCategory::Formatters => "formatters",
            ToolCategory::Minifiers => "minifiers",
            ToolCategory::Viewers => "viewers",
        }
    }

    /// Parses a category from its path segment.
    pub fn from_path_segment(segment: &str) -> Result<Self, CatalogError> {
        match segment {
            "formatters" => Ok(ToolCategory::Formatters),
            "minifiers" => Ok(ToolCategory::Minifiers),
            "viewers" => Ok(ToolCategory::Viewers),
            other => Err(CatalogError::UnknownCategory(other.to_string())),
        }
    }
}

/// A single tool page served by the portal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub category: ToolCategory,
}

impl Tool {
    /// Canonical path of the tool page: `/tools/<category>/<slug>`.
    pub fn canonical_path(&self) -> String {
        format!("/tools/{}/{}", self.category.path_segment(), self.slug)
    }
}
