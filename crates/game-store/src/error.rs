//! User-facing rejections
//!
//! Reducers never fail. These are raised by middleware at the boundary
//! between input and state and end up in the status bar.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please log in to place an order")]
    LoginRequired,

    #[error("Your cart is empty")]
    EmptyCart,

    #[error("An order is already being processed")]
    CheckoutInProgress,
}
