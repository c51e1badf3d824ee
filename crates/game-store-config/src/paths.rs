//! Configuration and cache directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/game-store/`, `~/.cache/game-store/`
//! - macOS: `~/Library/Application Support/game-store/`, `~/Library/Caches/game-store/`
//! - Windows: `%APPDATA%\game-store\`, `%LOCALAPPDATA%\game-store\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "game-store";

/// Get the application config directory
///
/// Config is only ever read, so the directory is not created.
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get the application cache directory, creating it if needed
///
/// Release builds write their log files here.
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory: {:?}", dir))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_is_only_computed() {
        let dir = config_dir().unwrap();
        assert!(dir.ends_with(APP_NAME));
        assert_eq!(
            Some(dir),
            dirs::config_dir().map(|base| base.join(APP_NAME))
        );
    }

    #[test]
    fn test_cache_dir_exists() {
        let dir = cache_dir().unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }
}
