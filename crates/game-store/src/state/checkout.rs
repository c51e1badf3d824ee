//! Cart and checkout view state

use crate::domain_models::OrderId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutState {
    /// Order waiting for the simulated processing delay
    pub processing: Option<OrderId>,
    /// Most recently placed order, shown as confirmation
    pub last_placed: Option<OrderId>,
    /// Index into the cart lines
    pub selected: usize,
}

impl CheckoutState {
    pub fn is_processing(&self) -> bool {
        self.processing.is_some()
    }
}
