//! Cart actions

use crate::domain_models::{Game, GameId};

#[derive(Debug, Clone)]
pub enum CartAction {
    /// Add one unit of a game, creating the line if needed
    Add(Game),
    /// Drop the line for a game
    Remove(GameId),
    /// Set the quantity of a line; zero or less removes it
    UpdateQuantity { id: GameId, quantity: i64 },
    /// Empty the cart
    Clear,
    /// Move the cart selection down
    SelectNext,
    /// Move the cart selection up
    SelectPrevious,
}
