//! Profile and admin dashboard derivations

use rust_decimal::Decimal;

use crate::domain_models::{Order, UserId};
use crate::state::StoreState;

/// Orders placed by one user, oldest first
pub fn orders_for_user(orders: &[Order], user_id: UserId) -> Vec<&Order> {
    orders.iter().filter(|order| order.user_id == user_id).collect()
}

/// Headline numbers on the admin dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminStats {
    pub total_games: usize,
    pub total_orders: usize,
    pub total_revenue: Decimal,
}

pub fn admin_stats(store: &StoreState) -> AdminStats {
    AdminStats {
        total_games: store.catalog.len(),
        total_orders: store.orders.len(),
        total_revenue: store.orders.iter().map(|order| order.total).sum(),
    }
}
