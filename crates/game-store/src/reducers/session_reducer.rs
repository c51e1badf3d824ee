//! Session Reducer
//!
//! Login and registration both establish the session; logout also empties
//! the cart.

use crate::actions::SessionAction;
use crate::state::StoreState;

pub fn reduce_session(mut state: StoreState, action: &SessionAction) -> StoreState {
    match action {
        SessionAction::Login(user) | SessionAction::Register(user) => {
            log::info!("Session: {} signed in (admin: {})", user.email, user.is_admin);
            state.user = Some(user.clone());
        }

        SessionAction::Logout => {
            if let Some(user) = state.user.take() {
                log::info!("Session: {} signed out", user.email);
            }
            state.cart.clear();
        }

        // Validated and consumed by SessionMiddleware
        SessionAction::SubmitLogin { .. } | SessionAction::SubmitRegistration { .. } => {}
    }
    state
}
