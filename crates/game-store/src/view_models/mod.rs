//! View derivations
//!
//! Pure functions computing what the views show from a state snapshot.
//! Nothing here is stored back into state.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod search;

pub use account::{admin_stats, orders_for_user, AdminStats};
pub use cart::{cart_totals, format_price, item_count, tax_rate, CartTotals};
pub use catalog::{
    cycle_option, filter_games, genres, product_listing, sort_games, CatalogFilter, SortOrder,
    PLATFORMS,
};
pub use search::{search, SearchCriteria};
