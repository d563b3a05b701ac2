// Toolhub platform paths for Linux
// Config: ~/.config/toolhub
// Data:   ~/.local/share/toolhub

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Toolhub on Linux.
/// Uses `$XDG_CONFIG_HOME/toolhub` if set, otherwise `~/.config/toolhub`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("toolhub")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("toolhub")
    }
}

/// Returns the data directory for Toolhub on Linux.
/// Uses `$XDG_DATA_HOME/toolhub` if set, otherwise `~/.local/share/toolhub`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("toolhub")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("toolhub")
    }
}
