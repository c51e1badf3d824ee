//! Checkout Reducer
//!
//! Tracks the order in flight, the last confirmation and the cart selection.

use crate::actions::{Action, CartAction, OrderAction};
use crate::state::CheckoutState;

pub fn reduce_checkout(mut state: CheckoutState, action: &Action, cart_len: usize) -> CheckoutState {
    match action {
        Action::Order(OrderAction::Processing(id)) => {
            state.processing = Some(*id);
            state.last_placed = None;
        }
        Action::Order(OrderAction::Place(order)) => {
            if state.processing == Some(order.id) {
                state.processing = None;
            }
            state.last_placed = Some(order.id);
        }
        Action::Cart(CartAction::Add(_)) => {
            state.last_placed = None;
        }
        Action::Cart(CartAction::SelectNext) => {
            if state.selected + 1 < cart_len {
                state.selected += 1;
            }
        }
        Action::Cart(CartAction::SelectPrevious) => {
            state.selected = state.selected.saturating_sub(1);
        }
        _ => {}
    }

    // Keep the selection on an existing line after removals
    state.selected = state.selected.min(cart_len.saturating_sub(1));
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{Order, OrderStatus};
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn order(id: u64) -> Order {
        Order {
            id,
            user_id: 1,
            items: Vec::new(),
            total: Decimal::ZERO,
            status: OrderStatus::Processing,
            placed_at: Utc::now(),
        }
    }

    #[test]
    fn test_processing_then_placed() {
        let state = reduce_checkout(
            CheckoutState::default(),
            &Action::Order(OrderAction::Processing(9)),
            1,
        );
        assert!(state.is_processing());

        let state = reduce_checkout(state, &Action::Order(OrderAction::Place(order(9))), 0);
        assert!(!state.is_processing());
        assert_eq!(state.last_placed, Some(9));
    }

    #[test]
    fn test_selection_clamped_to_cart() {
        let state = CheckoutState {
            selected: 3,
            ..Default::default()
        };
        let state = reduce_checkout(state, &Action::Cart(CartAction::Remove(1)), 2);
        assert_eq!(state.selected, 1);
        let state = reduce_checkout(state, &Action::Cart(CartAction::Clear), 0);
        assert_eq!(state.selected, 0);
    }
}
