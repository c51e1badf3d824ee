//! Session Middleware
//!
//! Validates the login and registration forms and turns them into a user.
//!
//! Any non-empty credentials are accepted. The configured admin email gets
//! the admin flag. On success the form is reset and the previous view is
//! shown again. Logging out leaves a notice.

use std::sync::Arc;

use crate::actions::{Action, FormAction, FormId, GlobalAction, SessionAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::User;
use crate::error::StoreError;
use crate::middleware::Middleware;
use crate::scheduler::Clock;
use crate::state::AppState;

pub struct SessionMiddleware {
    clock: Arc<dyn Clock>,
}

impl SessionMiddleware {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    fn establish(&self, session: SessionAction, form: FormId, user: &User, dispatcher: &Dispatcher) {
        let greeting = format!("Welcome, {}", user.name);
        dispatcher.dispatch(Action::Session(session));
        dispatcher.dispatch(Action::Form(FormAction::Reset(form)));
        dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(greeting)));
        dispatcher.dispatch(Action::Global(GlobalAction::Back));
    }

    fn reject(&self, error: StoreError, dispatcher: &Dispatcher) {
        log::debug!("SessionMiddleware: rejected - {}", error);
        dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(error.to_string())));
    }
}

impl Middleware for SessionMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Session(SessionAction::SubmitLogin { email, password }) => {
                if email.is_empty() || password.is_empty() {
                    self.reject(StoreError::MissingFields, dispatcher);
                    return false;
                }
                let user = User::from_login(self.clock.now_millis(), email, &state.config.admin_email);
                log::info!("SessionMiddleware: login as {}", user.email);
                self.establish(SessionAction::Login(user.clone()), FormId::Login, &user, dispatcher);
                false
            }

            Action::Session(SessionAction::SubmitRegistration {
                name,
                email,
                password,
            }) => {
                if name.is_empty() || email.is_empty() || password.is_empty() {
                    self.reject(StoreError::MissingFields, dispatcher);
                    return false;
                }
                let user = User::from_registration(
                    self.clock.now_millis(),
                    name,
                    email,
                    &state.config.admin_email,
                );
                log::info!("SessionMiddleware: registered {}", user.email);
                self.establish(
                    SessionAction::Register(user.clone()),
                    FormId::Register,
                    &user,
                    dispatcher,
                );
                false
            }

            Action::Session(SessionAction::Logout) => {
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::info("Logged out")));
                true
            }

            _ => true,
        }
    }
}
