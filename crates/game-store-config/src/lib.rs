//! Configuration and file locations for game-store
//!
//! This crate provides:
//! - Config and cache directory lookup
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use paths::{cache_dir, config_dir};
