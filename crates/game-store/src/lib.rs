//! GameStore
//!
//! A terminal game storefront. All state lives in one [`store::Store`]:
//! actions pass through the middleware chain, reducers derive the next
//! state, and views render it.

pub mod actions;
pub mod dispatcher;
pub mod domain_models;
pub mod error;
pub mod keymap;
pub mod logger;
pub mod middleware;
pub mod reducers;
pub mod routes;
pub mod scheduler;
pub mod state;
pub mod store;
pub mod view_models;
pub mod views;
