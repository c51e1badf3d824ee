//! Reducers
//!
//! `store_reducer` implements the store contract over `StoreState`; the
//! others keep the per-view state in step. `app_reducer` runs them all.

pub mod admin_reducer;
pub mod app_reducer;
pub mod cart_reducer;
pub mod catalog_reducer;
pub mod checkout_reducer;
pub mod form_reducer;
pub mod order_reducer;
pub mod products_reducer;
pub mod search_reducer;
pub mod session_reducer;
pub mod status_bar_reducer;
pub mod store_reducer;
