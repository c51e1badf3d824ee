//! Domain models
//!
//! Core domain types used throughout the application.
//! These are pure domain concepts, separate from UI state.

pub mod cart_line;
pub mod game;
pub mod order;
pub mod seed;
pub mod user;

pub use cart_line::CartLine;
pub use game::{Game, GameId};
pub use order::{Order, OrderId, OrderStatus};
pub use seed::seed_catalog;
pub use user::{User, UserId};
