//! Product listing derivations
//!
//! Genre/platform filters and sort orders for the games page.

use std::cmp::Ordering;

use strum::EnumIter;

use crate::domain_models::Game;

/// Platforms offered as filter choices
pub const PLATFORMS: [&str; 4] = ["PC", "PS5", "Xbox", "Switch"];

/// Sort orders for the product listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, strum::Display)]
pub enum SortOrder {
    #[default]
    #[strum(to_string = "Title")]
    Title,
    #[strum(to_string = "Price (Low to High)")]
    PriceAscending,
    #[strum(to_string = "Price (High to Low)")]
    PriceDescending,
    #[strum(to_string = "Rating")]
    RatingDescending,
    #[strum(to_string = "Release Date (Newest)")]
    ReleaseDateDescending,
}

impl SortOrder {
    pub fn next(self) -> Self {
        match self {
            SortOrder::Title => SortOrder::PriceAscending,
            SortOrder::PriceAscending => SortOrder::PriceDescending,
            SortOrder::PriceDescending => SortOrder::RatingDescending,
            SortOrder::RatingDescending => SortOrder::ReleaseDateDescending,
            SortOrder::ReleaseDateDescending => SortOrder::Title,
        }
    }

    fn compare(self, a: &Game, b: &Game) -> Ordering {
        match self {
            SortOrder::Title => compare_titles(&a.title, &b.title),
            SortOrder::PriceAscending => a.price.cmp(&b.price),
            SortOrder::PriceDescending => b.price.cmp(&a.price),
            SortOrder::RatingDescending => b.rating.total_cmp(&a.rating),
            SortOrder::ReleaseDateDescending => b.release_date.cmp(&a.release_date),
        }
    }
}

/// Locale-style title comparison: case-insensitive first, exact as tie-break
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Genre and platform filter, `None` means "all"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub genre: Option<String>,
    pub platform: Option<String>,
}

impl CatalogFilter {
    pub fn matches(&self, game: &Game) -> bool {
        let genre_ok = self.genre.as_deref().is_none_or(|genre| game.genre == genre);
        let platform_ok = self
            .platform
            .as_deref()
            .is_none_or(|platform| game.runs_on(platform));
        genre_ok && platform_ok
    }
}

/// Keep the games matching the filter, in catalog order
pub fn filter_games<'a>(catalog: &'a [Game], filter: &CatalogFilter) -> Vec<&'a Game> {
    catalog.iter().filter(|game| filter.matches(game)).collect()
}

/// Stable sort; games with equal keys keep their relative order
pub fn sort_games<'a>(mut games: Vec<&'a Game>, order: SortOrder) -> Vec<&'a Game> {
    games.sort_by(|a, b| order.compare(a, b));
    games
}

/// Filter then sort, the listing shown on the games page
pub fn product_listing<'a>(
    catalog: &'a [Game],
    filter: &CatalogFilter,
    order: SortOrder,
) -> Vec<&'a Game> {
    sort_games(filter_games(catalog, filter), order)
}

/// Distinct genres in order of first appearance
pub fn genres(catalog: &[Game]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for game in catalog {
        if !seen.contains(&game.genre.as_str()) {
            seen.push(&game.genre);
        }
    }
    seen
}

/// Step through `None` followed by each option, wrapping around
pub fn cycle_option(current: Option<&str>, options: &[&str]) -> Option<String> {
    match current {
        None => options.first().map(|o| o.to_string()),
        Some(value) => {
            let idx = options.iter().position(|o| *o == value);
            match idx {
                Some(i) if i + 1 < options.len() => Some(options[i + 1].to_string()),
                _ => None,
            }
        }
    }
}
