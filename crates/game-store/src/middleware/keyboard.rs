//! KeyboardMiddleware - converts raw keyboard events to semantic actions
//!
//! Raw key presses never reach the reducer. The keymap decides what a key
//! means for the current view and the resulting action re-enters the chain.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::keymap;
use crate::middleware::Middleware;
use crate::state::AppState;

#[derive(Debug, Default)]
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Global(GlobalAction::KeyPressed(key)) = action else {
            return true;
        };

        match keymap::translate(*key, state) {
            Some(translated) => dispatcher.dispatch(translated),
            None => log::trace!("Unbound key {:?} on {}", key.code, state.route.path()),
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Route;
    use crate::scheduler::SystemClock;
    use crate::store::Store;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::sync::Arc;

    fn press(store: &mut Store, code: KeyCode) {
        store.dispatch(Action::Global(GlobalAction::KeyPressed(KeyEvent::new(
            code,
            KeyModifiers::NONE,
        ))));
    }

    #[test]
    fn test_keys_drive_navigation_and_cart() {
        let mut store = Store::new(AppState::default(), Arc::new(SystemClock));
        store.add_middleware(Box::new(KeyboardMiddleware::new()));

        press(&mut store, KeyCode::Enter);
        assert_eq!(store.state().route, Route::Home);
        press(&mut store, KeyCode::Enter);
        assert_eq!(store.state().route, Route::Products);

        press(&mut store, KeyCode::Char('j'));
        press(&mut store, KeyCode::Char('a'));
        let cart = &store.state().store.cart;
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].game.title, "Cyberpunk 2077");

        press(&mut store, KeyCode::Char('q'));
        assert!(!store.state().running);
    }
}
