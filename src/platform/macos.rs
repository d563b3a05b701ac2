// Toolhub platform paths for macOS
// Config: ~/Library/Application Support/Toolhub
// Data:   ~/Library/Application Support/Toolhub

use std::env;
use std::path::PathBuf;

/// Returns the home directory on macOS.
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory for Toolhub on macOS.
/// `~/Library/Application Support/Toolhub`
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("Toolhub")
}

/// Returns the data directory for Toolhub on macOS.
/// `~/Library/Application Support/Toolhub`
pub fn get_data_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("Toolhub")
}
