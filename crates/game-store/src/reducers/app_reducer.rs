use crate::actions::{Action, ContactAction, GlobalAction};
use crate::state::AppState;

use super::{
    admin_reducer, checkout_reducer, form_reducer, products_reducer, search_reducer,
    status_bar_reducer, store_reducer,
};

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    // Handle global actions first
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
            return state;
        }
        Action::Global(GlobalAction::Navigate(route)) => {
            log::debug!("Navigating to {}", route.path());
            state.push_route(*route);
            state.admin.pending_delete = None;
            return state;
        }
        Action::Global(GlobalAction::Back) => {
            state.pop_route();
            log::debug!("Back to {}", state.route.path());
            return state;
        }
        Action::Global(GlobalAction::KeyPressed(_)) | Action::None => return state,
        _ => {}
    }

    // Store first so view reducers see the new data
    state.store = store_reducer::reduce(state.store, action);

    match action {
        Action::Products(products_action) => {
            state.products =
                products_reducer::reduce_products(state.products, products_action, &state.store.catalog);
        }
        Action::Search(search_action) => {
            state.search = search_reducer::reduce_search_view(
                state.search,
                search_action,
                state.store.search_results.len(),
            );
        }
        Action::Form(form_action) => {
            let id = form_reducer::target(form_action);
            let form = state.form(id).clone();
            *state.form_mut(id) = form_reducer::reduce_form(form, form_action);
        }
        Action::Contact(ContactAction::Submitted) => state.contact_submitted = true,
        Action::Contact(ContactAction::ConfirmationExpired) => state.contact_submitted = false,
        Action::StatusBar(status_action) => {
            state.status_bar = status_bar_reducer::reduce_status_bar(state.status_bar, status_action);
        }
        _ => {}
    }

    state.checkout = checkout_reducer::reduce_checkout(state.checkout, action, state.store.cart.len());
    state.admin = admin_reducer::reduce_admin(
        state.admin,
        action,
        state.store.catalog.len(),
        state.store.orders.len(),
    );

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{CartAction, FormAction, FormId, SessionAction};
    use crate::domain_models::{seed_catalog, User};
    use crate::routes::Route;

    #[test]
    fn test_quit() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }

    #[test]
    fn test_navigate_and_back() {
        let mut state = AppState::default();
        state = reduce(state, &Action::Global(GlobalAction::Navigate(Route::Products)));
        state = reduce(state, &Action::Global(GlobalAction::Navigate(Route::Login)));
        assert_eq!(state.route, Route::Login);

        state = reduce(state, &Action::Global(GlobalAction::Back));
        assert_eq!(state.route, Route::Products);
        state = reduce(state, &Action::Global(GlobalAction::Back));
        assert_eq!(state.route, Route::Entrance);
        state = reduce(state, &Action::Global(GlobalAction::Back));
        assert_eq!(state.route, Route::Home);
    }

    #[test]
    fn test_store_actions_reach_store() {
        let game = seed_catalog().remove(0);
        let state = reduce(AppState::default(), &Action::Cart(CartAction::Add(game)));
        assert_eq!(state.store.cart.len(), 1);
    }

    #[test]
    fn test_logout_from_app_state() {
        let mut state = AppState::default();
        state = reduce(
            state,
            &Action::Session(SessionAction::Login(User::from_login(
                1,
                "p@example.com",
                "admin@gamestore.com",
            ))),
        );
        state = reduce(state, &Action::Cart(CartAction::Add(seed_catalog().remove(1))));
        state = reduce(state, &Action::Session(SessionAction::Logout));
        assert!(state.store.user.is_none());
        assert!(state.store.cart.is_empty());
    }

    #[test]
    fn test_form_actions_target_their_form() {
        let mut state = AppState::default();
        state = reduce(state, &Action::Form(FormAction::Input(FormId::Contact, 'h')));
        state = reduce(state, &Action::Form(FormAction::Input(FormId::Contact, 'i')));
        assert_eq!(state.contact_form.value(0), "hi");
        assert_eq!(state.login_form.value(0), "");
    }
}
