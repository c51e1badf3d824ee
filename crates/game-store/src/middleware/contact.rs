//! Contact Middleware
//!
//! Requires every contact field, "sends" the message to the log and shows a
//! confirmation for a while.

use crate::actions::{Action, ContactAction, FormAction, FormId, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::error::StoreError;
use crate::middleware::Middleware;
use crate::state::AppState;

#[derive(Debug, Default)]
pub struct ContactMiddleware;

impl ContactMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for ContactMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Contact(ContactAction::Submit(message)) = action else {
            return true;
        };

        if !message.is_complete() {
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                StoreError::MissingFields.to_string(),
            )));
            return false;
        }

        log::info!(
            "Contact form submitted: name={}, email={}, subject={}, message={}",
            message.name,
            message.email,
            message.subject,
            message.message
        );
        dispatcher.dispatch(Action::Contact(ContactAction::Submitted));
        dispatcher.dispatch(Action::Form(FormAction::Reset(FormId::Contact)));
        dispatcher.dispatch_after(
            state.config.contact_notice_duration(),
            Action::Contact(ContactAction::ConfirmationExpired),
        );
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ContactMessage;
    use crate::scheduler::ManualClock;
    use crate::state::StatusKind;
    use crate::store::Store;
    use chrono::DateTime;
    use std::sync::Arc;
    use std::time::Duration;

    fn message(subject: &str) -> ContactMessage {
        ContactMessage {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            subject: subject.to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_submit_shows_confirmation_until_it_expires() {
        let clock = Arc::new(ManualClock::new(
            DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        ));
        let mut store = Store::new(AppState::default(), clock.clone());
        store.add_middleware(Box::new(ContactMiddleware::new()));
        store.dispatch(Action::Form(FormAction::Input(FormId::Contact, 'J')));

        store.dispatch(Action::Contact(ContactAction::Submit(message("support"))));
        assert!(store.state().contact_submitted);
        assert_eq!(store.state().contact_form.value(0), "");

        clock.advance(Duration::from_millis(2999));
        store.tick();
        assert!(store.state().contact_submitted);

        clock.advance(Duration::from_millis(1));
        store.tick();
        assert!(!store.state().contact_submitted);
    }

    #[test]
    fn test_incomplete_message_is_rejected() {
        let clock = Arc::new(ManualClock::new(
            DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        ));
        let mut store = Store::new(AppState::default(), clock);
        store.add_middleware(Box::new(ContactMiddleware::new()));

        store.dispatch(Action::Contact(ContactAction::Submit(message(" "))));
        let state = store.state();
        assert!(!state.contact_submitted);
        assert_eq!(store.pending(), 0);
        assert_eq!(state.status_bar.latest().unwrap().kind, StatusKind::Error);
    }
}
