use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod checkout;
pub mod contact;
pub mod keyboard;
pub mod logging;
pub mod search;
pub mod session;

pub use checkout::CheckoutMiddleware;
pub use contact::ContactMiddleware;
pub use keyboard::KeyboardMiddleware;
pub use logging::LoggingMiddleware;
pub use search::SearchMiddleware;
pub use session::SessionMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// This is where input is validated and simulated work is scheduled; reducers
/// only ever see trusted actions.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
