//! Checkout Middleware
//!
//! Gates checkout on a signed-in user and a non-empty cart, builds the order
//! snapshot and schedules its placement after the processing delay. Once the
//! order is placed a confirmation email is logged.

use std::sync::Arc;

use crate::actions::{Action, OrderAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{Order, OrderStatus};
use crate::error::StoreError;
use crate::middleware::Middleware;
use crate::scheduler::Clock;
use crate::state::AppState;
use crate::view_models::{cart_totals, format_price};

pub struct CheckoutMiddleware {
    clock: Arc<dyn Clock>,
}

impl CheckoutMiddleware {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Snapshot the cart into an order for the current user
    fn prepare_order(&self, state: &AppState) -> Result<Order, StoreError> {
        let user = state.store.user.as_ref().ok_or(StoreError::LoginRequired)?;
        if state.checkout.is_processing() {
            return Err(StoreError::CheckoutInProgress);
        }
        if state.store.cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }

        let totals = cart_totals(&state.store.cart, state.tax_rate());
        Ok(Order {
            id: self.clock.now_millis(),
            user_id: user.id,
            items: state.store.cart.clone(),
            total: totals.total,
            status: OrderStatus::Processing,
            placed_at: self.clock.now(),
        })
    }
}

impl Middleware for CheckoutMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Order(OrderAction::Checkout) => {
                match self.prepare_order(state) {
                    Ok(order) => {
                        log::info!(
                            "CheckoutMiddleware: processing order #{} ({})",
                            order.id,
                            format_price(&state.config.currency_symbol, order.total)
                        );
                        dispatcher.dispatch(Action::Order(OrderAction::Processing(order.id)));
                        dispatcher.dispatch(Action::StatusBar(StatusBarAction::running(
                            "Processing order...",
                        )));
                        dispatcher.dispatch_after(
                            state.config.order_processing_delay(),
                            Action::Order(OrderAction::Place(order)),
                        );
                    }
                    Err(error) => {
                        log::debug!("CheckoutMiddleware: rejected - {}", error);
                        dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                            error.to_string(),
                        )));
                    }
                }
                false // Never reaches the reducer
            }

            Action::Order(OrderAction::Place(order)) => {
                let recipient = state
                    .store
                    .user
                    .as_ref()
                    .map(|user| user.email.as_str())
                    .unwrap_or("<signed out>");
                log::info!(
                    "Order email sent: to={}, subject=\"Order Confirmation #{}\", body=\"Thank you for your order! Your games will be available for download shortly.\"",
                    recipient,
                    order.id
                );
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(format!(
                    "Order #{} placed, confirmation sent to {}",
                    order.id, recipient
                ))));
                true
            }

            _ => true,
        }
    }
}
