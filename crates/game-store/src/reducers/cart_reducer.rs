//! Cart Reducer
//!
//! Add, remove, re-quantify and clear cart lines. A line never survives with
//! a quantity of zero.

use crate::actions::CartAction;
use crate::domain_models::CartLine;
use crate::state::StoreState;

pub fn reduce_cart(mut state: StoreState, action: &CartAction) -> StoreState {
    match action {
        CartAction::Add(game) => {
            if let Some(line) = state.cart.iter_mut().find(|line| line.id() == game.id) {
                line.quantity = line.quantity.saturating_add(1);
                log::debug!("Cart: {} x{}", game.title, line.quantity);
            } else {
                state.cart.push(CartLine::new(game.clone()));
                log::debug!("Cart: added {}", game.title);
            }
        }

        CartAction::Remove(id) => {
            state.cart.retain(|line| line.id() != *id);
            log::debug!("Cart: removed game {}", id);
        }

        CartAction::UpdateQuantity { id, quantity } => {
            if *quantity <= 0 {
                state.cart.retain(|line| line.id() != *id);
                log::debug!("Cart: quantity {} for game {}, line removed", quantity, id);
            } else if let Some(line) = state.cart.iter_mut().find(|line| line.id() == *id) {
                line.quantity = u32::try_from(*quantity).unwrap_or(u32::MAX);
                log::debug!("Cart: game {} set to x{}", id, line.quantity);
            }
        }

        CartAction::Clear => {
            state.cart.clear();
            log::debug!("Cart: cleared");
        }

        CartAction::SelectNext | CartAction::SelectPrevious => {}
    }
    state
}
