use std::path::PathBuf;

/// Returns the base directory for relay data.
///
/// Uses `$WIFI_RELAY_HOME` if set, otherwise defaults to `~/.wifi-relay`.
pub fn relay_home() -> PathBuf {
    if let Ok(home) = std::env::var("WIFI_RELAY_HOME") {
        return PathBuf::from(home);
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".wifi-relay")
}

/// Returns the path to the user configuration file.
pub fn config_path() -> PathBuf {
    relay_home().join("config.toml")
}

/// Ensure the relay home directory exists.
pub fn ensure_dirs() -> std::io::Result<()> {
    std::fs::create_dir_all(relay_home())
}
