//! Catalog administration actions

use crate::domain_models::{Game, GameId};

#[derive(Debug, Clone)]
pub enum CatalogAction {
    /// Append a game to the catalog
    Add(Game),
    /// Replace the game with the same id
    Update(Game),
    /// Remove a game
    Delete(GameId),
}
