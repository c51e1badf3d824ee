//! Store Reducer
//!
//! `(StoreState, Action) -> StoreState` over the closed set of store actions.
//! Every other action returns the state untouched.

use crate::actions::Action;
use crate::state::StoreState;

use super::{cart_reducer, catalog_reducer, order_reducer, search_reducer, session_reducer};

pub fn reduce(state: StoreState, action: &Action) -> StoreState {
    match action {
        Action::Cart(action) => cart_reducer::reduce_cart(state, action),
        Action::Session(action) => session_reducer::reduce_session(state, action),
        Action::Order(action) => order_reducer::reduce_order(state, action),
        Action::Search(action) => search_reducer::reduce_search_results(state, action),
        Action::Catalog(action) => catalog_reducer::reduce_catalog(state, action),
        _ => state,
    }
}
