// Toolhub platform abstraction
// Provides platform-specific paths for the settings file and the database.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for Toolhub.
///
/// - **Linux**: `~/.config/toolhub` (or `$XDG_CONFIG_HOME/toolhub`)
/// - **macOS**: `~/Library/Application Support/Toolhub`
/// - **Windows**: `%APPDATA%/Toolhub`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the platform-specific data directory for Toolhub.
///
/// - **Linux**: `~/.local/share/toolhub` (or `$XDG_DATA_HOME/toolhub`)
/// - **macOS**: `~/Library/Application Support/Toolhub`
/// - **Windows**: `%APPDATA%/Toolhub`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}
