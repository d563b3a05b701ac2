use std::fmt;

// === StorageError ===

/// Errors related to the key-value storage port.
#[derive(Debug)]
pub enum StorageError {
    /// Database operation failed.
    DatabaseError(String),
    /// The store is unavailable (closed, missing, or disabled).
    Unavailable(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::DatabaseError(msg) => write!(f, "Storage database error: {}", msg),
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

// === CatalogError ===

/// Errors related to tool catalog lookups.
#[derive(Debug)]
pub enum CatalogError {
    /// No tool with the given slug is registered.
    NotFound(String),
    /// The given category name is not recognized.
    UnknownCategory(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound(slug) => write!(f, "Tool not found: {}", slug),
            CatalogError::UnknownCategory(name) => write!(f, "Unknown tool category: {}", name),
        }
    }
}

impl std::error::Error for CatalogError {}

// === SeoError ===

/// Errors related to SEO metadata emission.
#[derive(Debug)]
pub enum SeoError {
    /// Structured data could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for SeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeoError::SerializationError(msg) => {
                write!(f, "Structured data serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SeoError {}

// === SettingsError ===

/// Errors related to portal settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
