//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod admin;
mod app;
mod checkout;
mod form;
mod products;
mod search;
mod status_bar;
mod store;

pub use admin::{AdminState, AdminTab};
pub use app::AppState;
pub use checkout::CheckoutState;
pub use form::{FormField, FormState};
pub use products::ProductsState;
pub use search::{cycle_rating, SearchField, SearchInput, SearchState, RATING_CHOICES};
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
pub use store::StoreState;
