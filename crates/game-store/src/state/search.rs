//! Search page state
//!
//! Keeps the raw input as typed; `SearchInput::criteria` turns it into
//! `SearchCriteria` when a search is scheduled.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::view_models::SearchCriteria;

/// Minimum rating choices offered on the search page
pub const RATING_CHOICES: [f32; 4] = [4.5, 4.0, 3.5, 3.0];

/// Field of the search form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Query,
    Genre,
    Platform,
    MinPrice,
    MaxPrice,
    MinRating,
}

impl SearchField {
    /// Move to the next field
    pub fn next(self) -> Self {
        match self {
            Self::Query => Self::Genre,
            Self::Genre => Self::Platform,
            Self::Platform => Self::MinPrice,
            Self::MinPrice => Self::MaxPrice,
            Self::MaxPrice => Self::MinRating,
            Self::MinRating => Self::Query,
        }
    }

    /// Move to the previous field
    pub fn prev(self) -> Self {
        match self {
            Self::Query => Self::MinRating,
            Self::Genre => Self::Query,
            Self::Platform => Self::Genre,
            Self::MinPrice => Self::Platform,
            Self::MaxPrice => Self::MinPrice,
            Self::MinRating => Self::MaxPrice,
        }
    }

    /// Fields edited by typing; the others cycle through choices
    pub fn is_text(self) -> bool {
        matches!(self, Self::Query | Self::MinPrice | Self::MaxPrice)
    }
}

/// Search form contents as entered
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchInput {
    pub query: String,
    pub genre: Option<String>,
    pub platform: Option<String>,
    pub min_price: String,
    pub max_price: String,
    pub min_rating: Option<f32>,
}

impl SearchInput {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Text of a typed field, `None` for choice fields
    pub fn text(&self, field: SearchField) -> Option<&String> {
        match field {
            SearchField::Query => Some(&self.query),
            SearchField::MinPrice => Some(&self.min_price),
            SearchField::MaxPrice => Some(&self.max_price),
            _ => None,
        }
    }

    pub fn text_mut(&mut self, field: SearchField) -> Option<&mut String> {
        match field {
            SearchField::Query => Some(&mut self.query),
            SearchField::MinPrice => Some(&mut self.min_price),
            SearchField::MaxPrice => Some(&mut self.max_price),
            _ => None,
        }
    }

    /// Parse the input; price fields that are blank or not a number impose
    /// no bound
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            query: self.query.clone(),
            genre: self.genre.clone(),
            platform: self.platform.clone(),
            min_price: parse_price(&self.min_price),
            max_price: parse_price(&self.max_price),
            min_rating: self.min_rating,
        }
    }
}

fn parse_price(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed).ok()
}

/// Step through "any rating" and the rating choices, wrapping around
pub fn cycle_rating(current: Option<f32>) -> Option<f32> {
    match current {
        None => RATING_CHOICES.first().copied(),
        Some(value) => {
            let idx = RATING_CHOICES.iter().position(|r| *r == value);
            match idx {
                Some(i) if i + 1 < RATING_CHOICES.len() => Some(RATING_CHOICES[i + 1]),
                _ => None,
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub input: SearchInput,
    pub focus: SearchField,
    /// A debounced search is scheduled and has not delivered results yet
    pub searching: bool,
    /// Index into the search results
    pub selected: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criteria_parses_prices() {
        let input = SearchInput {
            query: "ring".to_string(),
            min_price: " 10 ".to_string(),
            max_price: "59.99".to_string(),
            ..Default::default()
        };
        let criteria = input.criteria();
        assert_eq!(criteria.query, "ring");
        assert_eq!(criteria.min_price, Some(Decimal::new(10, 0)));
        assert_eq!(criteria.max_price, Some(Decimal::new(5999, 2)));
    }

    #[test]
    fn test_invalid_price_is_no_bound() {
        let input = SearchInput {
            min_price: "cheap".to_string(),
            ..Default::default()
        };
        assert_eq!(input.criteria().min_price, None);
        assert!(!input.is_empty());
    }

    #[test]
    fn test_field_cycle_round_trip() {
        let mut field = SearchField::Query;
        for _ in 0..6 {
            field = field.next();
        }
        assert_eq!(field, SearchField::Query);
        assert_eq!(SearchField::Query.prev(), SearchField::MinRating);
    }

    #[test]
    fn test_cycle_rating() {
        assert_eq!(cycle_rating(None), Some(4.5));
        assert_eq!(cycle_rating(Some(4.5)), Some(4.0));
        assert_eq!(cycle_rating(Some(3.0)), None);
    }
}
