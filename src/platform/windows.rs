// Toolhub platform paths for Windows
// Config: %APPDATA%/Toolhub
// Data:   %APPDATA%/Toolhub

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Toolhub on Windows.
/// `%APPDATA%/Toolhub`
pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("Toolhub")
}

/// Returns the data directory for Toolhub on Windows.
/// `%APPDATA%/Toolhub`
pub fn get_data_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("Toolhub")
}
