//! Application configuration
//!
//! Configuration loaded from the `.game-store.toml` file.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application configuration loaded from .game-store.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Email address that is granted the admin flag on login
    #[serde(default = "default_admin_email")]
    pub admin_email: String,

    /// Sales tax applied on top of the cart subtotal, in percent
    #[serde(default = "default_tax_percent")]
    pub tax_percent: u32,

    /// Simulated order processing time
    #[serde(default = "default_order_processing_delay_ms")]
    pub order_processing_delay_ms: u64,

    /// Delay between the last search input change and the search itself
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// How long the contact form confirmation stays visible
    #[serde(default = "default_contact_notice_ms")]
    pub contact_notice_ms: u64,

    /// Symbol printed in front of prices
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_admin_email() -> String {
    "admin@gamestore.com".to_string()
}

fn default_tax_percent() -> u32 {
    8
}

fn default_order_processing_delay_ms() -> u64 {
    2000
}

fn default_search_debounce_ms() -> u64 {
    500
}

fn default_contact_notice_ms() -> u64 {
    3000
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            admin_email: default_admin_email(),
            tax_percent: default_tax_percent(),
            order_processing_delay_ms: default_order_processing_delay_ms(),
            search_debounce_ms: default_search_debounce_ms(),
            contact_notice_ms: default_contact_notice_ms(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    pub fn order_processing_delay(&self) -> Duration {
        Duration::from_millis(self.order_processing_delay_ms)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn contact_notice_duration(&self) -> Duration {
        Duration::from_millis(self.contact_notice_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.admin_email, "admin@gamestore.com");
        assert_eq!(config.tax_percent, 8);
        assert_eq!(config.order_processing_delay(), Duration::from_secs(2));
        assert_eq!(config.search_debounce(), Duration::from_millis(500));
        assert_eq!(config.contact_notice_duration(), Duration::from_secs(3));
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            admin_email = "root@example.com"
            tax_percent = 19
            currency_symbol = "€"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.admin_email, "root@example.com");
        assert_eq!(config.tax_percent, 19);
        assert_eq!(config.currency_symbol, "€");
        // delays should use defaults
        assert_eq!(config.order_processing_delay_ms, 2000);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            search_debounce_ms = 0
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.search_debounce(), Duration::ZERO);
        // Other fields should use defaults
        assert_eq!(config.admin_email, "admin@gamestore.com");
        assert_eq!(config.tax_percent, 8);
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
