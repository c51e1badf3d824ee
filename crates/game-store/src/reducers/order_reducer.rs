//! Order Reducer
//!
//! Placing an order appends the prepared snapshot and empties the cart. The
//! order is built by `CheckoutMiddleware`, nothing is computed here.

use crate::actions::OrderAction;
use crate::state::StoreState;

pub fn reduce_order(mut state: StoreState, action: &OrderAction) -> StoreState {
    if let OrderAction::Place(order) = action {
        log::info!(
            "Order #{} placed for user {} ({} units)",
            order.id,
            order.user_id,
            order.unit_count()
        );
        state.orders.push(order.clone());
        state.cart.clear();
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{seed_catalog, CartLine, Order, OrderStatus};
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn order_from(cart: &[CartLine]) -> Order {
        Order {
            id: 1000,
            user_id: 1,
            items: cart.to_vec(),
            total: Decimal::new(6479, 2),
            status: OrderStatus::Processing,
            placed_at: Utc::now(),
        }
    }

    #[test]
    fn test_place_appends_and_clears_cart() {
        let mut state = StoreState::seeded();
        state.cart.push(CartLine::new(seed_catalog().remove(0)));
        let order = order_from(&state.cart);

        let state = reduce_order(state, &OrderAction::Place(order.clone()));
        assert_eq!(state.orders, vec![order]);
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_orders_accumulate() {
        let mut state = StoreState::seeded();
        for _ in 0..3 {
            state = reduce_order(state, &OrderAction::Place(order_from(&[])));
        }
        assert_eq!(state.orders.len(), 3);
    }

    #[test]
    fn test_checkout_and_processing_leave_store_alone() {
        let state = reduce_order(StoreState::seeded(), &OrderAction::Checkout);
        let state = reduce_order(state, &OrderAction::Processing(5));
        assert_eq!(state, StoreState::seeded());
    }
}
