//! Game model
//!
//! A purchasable catalog item.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Catalog identifier of a game
pub type GameId = u64;

/// A game in the store catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: GameId,
    pub title: String,
    pub genre: String,
    /// Free-text platform list, e.g. "PC, PS5, Xbox"
    pub platform: String,
    pub price: Decimal,
    pub description: String,
    /// Image reference (URL)
    pub image: String,
    /// Average rating between 0.0 and 5.0
    pub rating: f32,
    pub release_date: NaiveDate,
    pub developer: String,
    pub in_stock: bool,
}

impl Game {
    /// Check whether the platform label mentions the given platform
    ///
    /// Plain substring match, case-sensitive.
    pub fn runs_on(&self, platform: &str) -> bool {
        self.platform.contains(platform)
    }

    /// Check whether the free-text query (already lowercased) matches
    /// title, description or developer
    pub fn matches_text(&self, query_lower: &str) -> bool {
        self.title.to_lowercase().contains(query_lower)
            || self.description.to_lowercase().contains(query_lower)
            || self.developer.to_lowercase().contains(query_lower)
    }

    pub fn stock_label(&self) -> &'static str {
        if self.in_stock {
            "In Stock"
        } else {
            "Out of Stock"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::seed_catalog;

    #[test]
    fn test_runs_on_is_case_sensitive_substring() {
        let witcher = seed_catalog().remove(1);
        assert!(witcher.runs_on("Switch"));
        assert!(witcher.runs_on("PS4"));
        assert!(!witcher.runs_on("switch"));
        assert!(!witcher.runs_on("PS5"));
    }

    #[test]
    fn test_matches_text_checks_developer() {
        let elden_ring = seed_catalog().remove(2);
        assert!(elden_ring.matches_text("fromsoft"));
        assert!(elden_ring.matches_text("miyazaki"));
        assert!(!elden_ring.matches_text("rockstar"));
    }
}
