//! Seed catalog loaded at startup

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::Game;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Price from a number of cents
fn cents(amount: i64) -> Decimal {
    Decimal::new(amount, 2)
}

#[allow(clippy::too_many_arguments)]
fn game(
    id: u64,
    title: &str,
    genre: &str,
    platform: &str,
    price: Decimal,
    description: &str,
    image: &str,
    rating: f32,
    release_date: NaiveDate,
    developer: &str,
) -> Game {
    Game {
        id,
        title: title.to_string(),
        genre: genre.to_string(),
        platform: platform.to_string(),
        price,
        description: description.to_string(),
        image: image.to_string(),
        rating,
        release_date,
        developer: developer.to_string(),
        in_stock: true,
    }
}

/// The six games the store opens with, in catalog order
pub fn seed_catalog() -> Vec<Game> {
    vec![
        game(
            1,
            "Cyberpunk 2077",
            "RPG",
            "PC, PS5, Xbox",
            cents(5999),
            "An open-world, action-adventure story set in Night City.",
            "https://images.pexels.com/photos/7034602/pexels-photo-7034602.jpeg?auto=compress&cs=tinysrgb&w=400",
            4.2,
            date(2020, 12, 10),
            "CD Projekt Red",
        ),
        game(
            2,
            "The Witcher 3: Wild Hunt",
            "RPG",
            "PC, PS4, Xbox, Switch",
            cents(3999),
            "A story-driven open world RPG set in a visually stunning fantasy universe.",
            "https://images.pexels.com/photos/7915365/pexels-photo-7915365.jpeg?auto=compress&cs=tinysrgb&w=400",
            4.8,
            date(2015, 5, 19),
            "CD Projekt Red",
        ),
        game(
            3,
            "Elden Ring",
            "Action RPG",
            "PC, PS5, Xbox",
            cents(6999),
            "A fantasy action-RPG adventure set within a world created by Hidetaka Miyazaki.",
            "https://images.pexels.com/photos/442576/pexels-photo-442576.jpeg?auto=compress&cs=tinysrgb&w=400",
            4.9,
            date(2022, 2, 25),
            "FromSoftware",
        ),
        game(
            4,
            "Call of Duty: Modern Warfare II",
            "FPS",
            "PC, PS5, Xbox",
            cents(6999),
            "The ultimate weapon is team. Team up and fight alongside the iconic operators.",
            "https://images.pexels.com/photos/687811/pexels-photo-687811.jpeg?auto=compress&cs=tinysrgb&w=400",
            4.3,
            date(2022, 10, 28),
            "Infinity Ward",
        ),
        game(
            5,
            "FIFA 24",
            "Sports",
            "PC, PS5, Xbox, Switch",
            cents(5999),
            "The world's game powered by Football. Feel closer to the game with EA SPORTS FC 24.",
            "https://images.pexels.com/photos/114296/pexels-photo-114296.jpeg?auto=compress&cs=tinysrgb&w=400",
            4.1,
            date(2023, 9, 29),
            "EA Sports",
        ),
        game(
            6,
            "Grand Theft Auto V",
            "Action",
            "PC, PS5, Xbox",
            cents(2999),
            "When a young street hustler, a retired bank robber and a terrifying psychopath find themselves entangled.",
            "https://images.pexels.com/photos/3945313/pexels-photo-3945313.jpeg?auto=compress&cs=tinysrgb&w=400",
            4.7,
            date(2013, 9, 17),
            "Rockstar Games",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique_and_ordered() {
        let ids: Vec<u64> = seed_catalog().iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_seed_games_are_in_stock() {
        assert!(seed_catalog().iter().all(|g| g.in_stock));
    }

    #[test]
    fn test_seed_prices() {
        let catalog = seed_catalog();
        assert_eq!(catalog[5].price.to_string(), "29.99");
        assert_eq!(catalog[0].release_date, date(2020, 12, 10));
    }
}
