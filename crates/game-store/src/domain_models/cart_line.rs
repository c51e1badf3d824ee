//! Cart line model

use rust_decimal::Decimal;

use super::{Game, GameId};

/// A game in the cart together with the requested quantity
///
/// The game is copied when it is added, later catalog updates are not
/// reflected here.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub game: Game,
    /// Always greater than zero while the line is in the cart
    pub quantity: u32,
}

impl CartLine {
    pub fn new(game: Game) -> Self {
        Self { game, quantity: 1 }
    }

    pub fn id(&self) -> GameId {
        self.game.id
    }

    /// Price times quantity
    pub fn line_total(&self) -> Decimal {
        self.game.price * Decimal::from(self.quantity)
    }
}
