//! Unit tests for the tool catalog.

use std::collections::HashSet;

use toolhub::managers::catalog::{ToolCatalog, ToolCatalogTrait};
use toolhub::types::errors::CatalogError;
use toolhub::types::tool::ToolCategory;

#[test]
fn test_builtin_tools_present() {
    let catalog = ToolCatalog::new();
    assert!(!catalog.list_tools().is_empty());

    // One of each category must exist
    assert!(!catalog.list_by_category(ToolCategory::Formatters).is_empty());
    assert!(!catalog.list_by_category(ToolCategory::Minifiers).is_empty());
    assert!(!catalog.list_by_category(ToolCategory::Viewers).is_empty());
}

#[test]
fn test_canonical_paths_are_unique() {
    let catalog = ToolCatalog::new();
    let paths: HashSet<String> = catalog
        .list_tools()
        .iter()
        .map(|t| t.canonical_path())
        .collect();
    assert_eq!(paths.len(), catalog.list_tools().len());
}

#[test]
fn test_get_by_path() {
    let catalog = ToolCatalog::new();

    let tool = catalog.get_by_path("/tools/minifiers/css").unwrap();
    assert_eq!(tool.name, "CSS Minifier");
    assert_eq!(tool.category, ToolCategory::Minifiers);

    // Same slug, different category resolves to a different tool
    let tool = catalog.get_by_path("/tools/formatters/css").unwrap();
    assert_eq!(tool.name, "CSS Formatter");
}

#[test]
fn test_get_by_path_rejects_unknown() {
    let catalog = ToolCatalog::new();

    assert!(matches!(
        catalog.get_by_path("/tools/minifiers/yaml"),
        Err(CatalogError::NotFound(_))
    ));
    assert!(matches!(
        catalog.get_by_path("/tools/parsers/css"),
        Err(CatalogError::UnknownCategory(_))
    ));
    assert!(matches!(
        catalog.get_by_path("/about"),
        Err(CatalogError::NotFound(_))
    ));
    // Extra segments don't resolve
    assert!(catalog.get_by_path("/tools/minifiers/css/extra").is_err());
}

#[test]
fn test_get_by_slug_returns_first_registration() {
    let catalog = ToolCatalog::new();
    let tool = catalog.get_by_slug("markdown").unwrap();
    assert_eq!(tool.category, ToolCategory::Viewers);

    assert!(catalog.get_by_slug("nonexistent").is_err());
}

#[test]
fn test_search_is_case_insensitive_over_name_and_description() {
    let catalog = ToolCatalog::new();

    let by_name = catalog.search_tools("JSON");
    assert!(by_name.iter().any(|t| t.name == "JSON Viewer"));

    let by_description = catalog.search_tools("collapsible tree");
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].name, "JSON Viewer");

    assert!(catalog.search_tools("spreadsheet").is_empty());
}

#[test]
fn test_category_path_segments_roundtrip() {
    for category in [
        ToolCategory::Formatters,
        ToolCategory::Minifiers,
        ToolCategory::Viewers,
    ] {
        let segment = category.path_segment();
        assert_eq!(ToolCategory::from_path_segment(segment).unwrap(), category);
    }
    assert!(ToolCategory::from_path_segment("converters").is_err());
}
