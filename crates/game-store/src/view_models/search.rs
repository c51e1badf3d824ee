//! Free-text search with numeric filters

use rust_decimal::Decimal;

use crate::domain_models::Game;

/// Everything the search page can filter on
///
/// All active constraints must hold. Bounds are inclusive and an absent bound
/// imposes nothing. An empty query matches every game.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub query: String,
    pub genre: Option<String>,
    pub platform: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_rating: Option<f32>,
}

impl SearchCriteria {
    /// True when no constraint is set at all
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && self.genre.is_none()
            && self.platform.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_rating.is_none()
    }

    pub fn matches(&self, game: &Game) -> bool {
        let query_ok = self.query.is_empty() || game.matches_text(&self.query.to_lowercase());
        let genre_ok = self.genre.as_deref().is_none_or(|genre| game.genre == genre);
        let platform_ok = self
            .platform
            .as_deref()
            .is_none_or(|platform| game.runs_on(platform));
        let min_price_ok = self.min_price.is_none_or(|min| game.price >= min);
        let max_price_ok = self.max_price.is_none_or(|max| game.price <= max);
        let rating_ok = self.min_rating.is_none_or(|min| game.rating >= min);

        query_ok && genre_ok && platform_ok && min_price_ok && max_price_ok && rating_ok
    }
}

/// Matching games in catalog order, no relevance ranking
pub fn search<'a>(catalog: &'a [Game], criteria: &SearchCriteria) -> Vec<&'a Game> {
    catalog.iter().filter(|game| criteria.matches(game)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::seed_catalog;
    use pretty_assertions::assert_eq;

    fn ids(games: &[&Game]) -> Vec<u64> {
        games.iter().map(|g| g.id).collect()
    }

    #[test]
    fn test_query_night_matches_description() {
        let catalog = seed_catalog();
        let criteria = SearchCriteria {
            query: "night".to_string(),
            ..Default::default()
        };
        let result = search(&catalog, &criteria);
        assert_eq!(ids(&result), vec![1]);
        assert_eq!(result[0].title, "Cyberpunk 2077");
    }

    #[test]
    fn test_query_is_case_insensitive_over_developer() {
        let catalog = seed_catalog();
        let criteria = SearchCriteria {
            query: "CD PROJEKT".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&search(&catalog, &criteria)), vec![1, 2]);
    }

    #[test]
    fn test_empty_criteria_matches_everything() {
        let catalog = seed_catalog();
        let criteria = SearchCriteria::default();
        assert!(criteria.is_empty());
        assert_eq!(search(&catalog, &criteria).len(), 6);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let catalog = seed_catalog();
        let criteria = SearchCriteria {
            min_price: Some(Decimal::new(3999, 2)),
            max_price: Some(Decimal::new(5999, 2)),
            ..Default::default()
        };
        assert_eq!(ids(&search(&catalog, &criteria)), vec![1, 2, 5]);
    }

    #[test]
    fn test_all_filters_and_together() {
        let catalog = seed_catalog();
        let criteria = SearchCriteria {
            query: "open".to_string(),
            genre: Some("RPG".to_string()),
            platform: Some("Switch".to_string()),
            min_rating: Some(4.5),
            ..Default::default()
        };
        assert_eq!(ids(&search(&catalog, &criteria)), vec![2]);
    }

    #[test]
    fn test_min_rating() {
        let catalog = seed_catalog();
        let criteria = SearchCriteria {
            min_rating: Some(4.7),
            ..Default::default()
        };
        assert_eq!(ids(&search(&catalog, &criteria)), vec![2, 3, 6]);
    }
}
