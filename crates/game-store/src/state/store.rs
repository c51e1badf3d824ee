//! Store State
//!
//! The shared data tree: catalog, cart, session user, orders and the last
//! search results. Only changed through `reducers::store_reducer`.

use crate::domain_models::{seed_catalog, CartLine, Game, Order, User};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    /// Ids are unique
    pub catalog: Vec<Game>,
    /// One line per game id, quantities greater than zero
    pub cart: Vec<CartLine>,
    pub user: Option<User>,
    /// Append-only
    pub orders: Vec<Order>,
    pub search_results: Vec<Game>,
}

impl StoreState {
    /// Store with the startup catalog and nothing else
    pub fn seeded() -> Self {
        Self {
            catalog: seed_catalog(),
            ..Self::default()
        }
    }

    pub fn game(&self, id: u64) -> Option<&Game> {
        self.catalog.iter().find(|game| game.id == id)
    }

    pub fn cart_line(&self, id: u64) -> Option<&CartLine> {
        self.cart.iter().find(|line| line.id() == id)
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}
