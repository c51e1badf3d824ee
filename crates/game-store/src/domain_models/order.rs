//! Order model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::{CartLine, UserId};

/// Identifier of an order
pub type OrderId = u64;

/// Order lifecycle status
///
/// Orders are created as `Processing` and never move on in this store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display)]
pub enum OrderStatus {
    #[default]
    Processing,
}

/// A placed order - an immutable snapshot of the cart at checkout
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<CartLine>,
    /// Total including tax
    pub total: Decimal,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Total number of units across all lines
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }
}
