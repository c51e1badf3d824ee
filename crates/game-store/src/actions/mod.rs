//! Actions module
//!
//! All actions are tagged by domain. Core store actions (`Cart`, `Session`,
//! `Order`, `Search`, `Catalog`) change the store state; the rest drive the
//! views around it.

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod contact;
pub mod form;
pub mod global;
pub mod order;
pub mod products;
pub mod search;
pub mod session;
pub mod status_bar;

pub use admin::AdminAction;
pub use cart::CartAction;
pub use catalog::CatalogAction;
pub use contact::{ContactAction, ContactMessage};
pub use form::{FormAction, FormId};
pub use global::GlobalAction;
pub use order::OrderAction;
pub use products::ProductsAction;
pub use search::SearchAction;
pub use session::SessionAction;
pub use status_bar::StatusBarAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Application-wide actions (quit, navigation, raw keys)
    Global(GlobalAction),

    // Store actions
    Cart(CartAction),
    Session(SessionAction),
    Order(OrderAction),
    Search(SearchAction),
    Catalog(CatalogAction),

    // View actions
    Products(ProductsAction),
    Admin(AdminAction),
    Form(FormAction),
    Contact(ContactAction),
    StatusBar(StatusBarAction),

    /// No-op action
    None,
}
