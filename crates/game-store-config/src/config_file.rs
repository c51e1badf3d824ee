use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".game-store.toml";

/// Load config file content from CWD first, then home directory
///
/// Searches for .game-store.toml in:
/// 1. Current working directory
/// 2. Home directory
/// 3. Platform config directory as `config.toml`
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    if let Some(home_config) = get_home_config_path() {
        if let Ok(content) = std::fs::read_to_string(&home_config) {
            log::debug!("Loaded config from {}", home_config.display());
            return Some(content);
        }
    }

    if let Ok(dir) = crate::config_dir() {
        let path = dir.join("config.toml");
        if let Ok(content) = std::fs::read_to_string(&path) {
            log::debug!("Loaded config from {}", path.display());
            return Some(content);
        }
    }

    None
}

/// Returns ~/.game-store.toml if HOME environment variable is set.
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
