//! Order actions

use crate::domain_models::{Order, OrderId};

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// User asked to place an order from the current cart
    Checkout,
    /// Order has been built and is waiting for the simulated processing delay
    Processing(OrderId),
    /// Append the order and clear the cart
    Place(Order),
}
