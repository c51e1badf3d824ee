//! Admin dashboard actions
//!
//! Catalog changes themselves go through `CatalogAction`.

use crate::domain_models::GameId;

#[derive(Debug, Clone)]
pub enum AdminAction {
    /// Switch between the games and orders tab
    SwitchTab,
    SelectNext,
    SelectPrevious,
    /// Ask for confirmation before deleting a game
    RequestDelete(GameId),
}
