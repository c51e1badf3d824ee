//! Keymap - translates raw key events into semantic actions
//!
//! Three layers, checked in order:
//!
//! ## Layer 1: Priority keys
//! Ctrl+C, Esc and PageUp/PageDown work on every view.
//!
//! ## Layer 2: Text input
//! Views with forms route printable keys to the focused field. `Tab` moves
//! the focus and `Enter` submits.
//!
//! ## Layer 3: View bindings
//! Single-letter commands of the active view, then the global ones.

use chrono::NaiveDate;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rust_decimal::Decimal;

use crate::actions::{
    Action, AdminAction, CartAction, CatalogAction, ContactAction, ContactMessage, FormAction,
    FormId, GlobalAction, OrderAction, ProductsAction, SearchAction, SessionAction,
};
use crate::domain_models::Game;
use crate::routes::{Access, Route};
use crate::state::{cycle_rating, AdminTab, AppState, SearchField};
use crate::view_models::{cycle_option, genres, product_listing, PLATFORMS};

/// Translate a key press for the current view, `None` if the key is unbound
pub fn translate(key: KeyEvent, state: &AppState) -> Option<Action> {
    // Layer 1
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Global(GlobalAction::Quit));
    }
    match key.code {
        KeyCode::Esc => return Some(navigate(Route::Home)),
        KeyCode::PageDown => return Some(navigate(state.route.next())),
        KeyCode::PageUp => return Some(navigate(state.route.prev())),
        _ => {}
    }

    // Layer 2
    if state.route.accepts_text_input() {
        return match form_of(state.route) {
            Some(form) => form_key(key, form, state),
            None => search_key(key, state),
        };
    }

    // Layer 3
    let view_action = match state.route.access(state.store.user.as_ref()) {
        Access::Granted => view_key(key, state),
        Access::LoginRequired => (key.code == KeyCode::Enter).then(|| navigate(Route::Login)),
        Access::Denied => None,
    };
    view_action.or_else(|| global_key(key, state))
}

fn navigate(route: Route) -> Action {
    Action::Global(GlobalAction::Navigate(route))
}

fn form_of(route: Route) -> Option<FormId> {
    match route {
        Route::Login => Some(FormId::Login),
        Route::Register => Some(FormId::Register),
        Route::Contact => Some(FormId::Contact),
        _ => None,
    }
}

fn is_plain(key: &KeyEvent) -> bool {
    !key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT)
}

fn form_key(key: KeyEvent, id: FormId, state: &AppState) -> Option<Action> {
    match key.code {
        // Switch between login and registration without leaving the keyboard
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) && id == FormId::Login => {
            Some(navigate(Route::Register))
        }
        KeyCode::Char('l')
            if key.modifiers.contains(KeyModifiers::CONTROL) && id == FormId::Register =>
        {
            Some(navigate(Route::Login))
        }
        KeyCode::Char(c) if is_plain(&key) => Some(Action::Form(FormAction::Input(id, c))),
        KeyCode::Backspace => Some(Action::Form(FormAction::Backspace(id))),
        KeyCode::Tab | KeyCode::Down => Some(Action::Form(FormAction::FocusNext(id))),
        KeyCode::BackTab | KeyCode::Up => Some(Action::Form(FormAction::FocusPrevious(id))),
        KeyCode::Enter => Some(submit(id, state)),
        _ => None,
    }
}

/// Build the submit action from the form contents
fn submit(id: FormId, state: &AppState) -> Action {
    let form = state.form(id);
    match id {
        FormId::Login => Action::Session(SessionAction::SubmitLogin {
            email: form.value(0).to_string(),
            password: form.value(1).to_string(),
        }),
        FormId::Register => Action::Session(SessionAction::SubmitRegistration {
            name: form.value(0).to_string(),
            email: form.value(1).to_string(),
            password: form.value(2).to_string(),
        }),
        FormId::Contact => Action::Contact(ContactAction::Submit(ContactMessage {
            name: form.value(0).to_string(),
            email: form.value(1).to_string(),
            subject: form.value(2).to_string(),
            message: form.value(3).to_string(),
        })),
    }
}

fn search_key(key: KeyEvent, state: &AppState) -> Option<Action> {
    let search = &state.search;
    let mut input = search.input.clone();

    match key.code {
        KeyCode::Tab => return Some(Action::Search(SearchAction::FocusNext)),
        KeyCode::BackTab => return Some(Action::Search(SearchAction::FocusPrevious)),
        KeyCode::Down => return Some(Action::Search(SearchAction::SelectNext)),
        KeyCode::Up => return Some(Action::Search(SearchAction::SelectPrevious)),
        KeyCode::Delete => return Some(Action::Search(SearchAction::Clear)),
        KeyCode::Enter => {
            return state
                .store
                .search_results
                .get(search.selected)
                .and_then(add_to_cart);
        }
        KeyCode::Backspace => {
            input.text_mut(search.focus)?.pop();
        }
        KeyCode::Char(c) if is_plain(&key) && search.focus.is_text() => {
            if search.focus != SearchField::Query && !(c.is_ascii_digit() || c == '.') {
                return None;
            }
            input.text_mut(search.focus)?.push(c);
        }
        KeyCode::Char(' ') | KeyCode::Right => match search.focus {
            SearchField::Genre => {
                input.genre = cycle_option(input.genre.as_deref(), &genres(&state.store.catalog));
            }
            SearchField::Platform => {
                input.platform = cycle_option(input.platform.as_deref(), &PLATFORMS);
            }
            SearchField::MinRating => input.min_rating = cycle_rating(input.min_rating),
            _ => return None,
        },
        _ => return None,
    }

    Some(Action::Search(SearchAction::InputChanged(input)))
}

fn add_to_cart(game: &Game) -> Option<Action> {
    game.in_stock
        .then(|| Action::Cart(CartAction::Add(game.clone())))
}

fn view_key(key: KeyEvent, state: &AppState) -> Option<Action> {
    match state.route {
        Route::Entrance => (key.code == KeyCode::Enter).then(|| navigate(Route::Home)),
        Route::Home => match key.code {
            KeyCode::Enter | KeyCode::Char('g') => Some(navigate(Route::Products)),
            KeyCode::Char('/') => Some(navigate(Route::Search)),
            _ => None,
        },
        Route::Products => products_key(key, state),
        Route::Order => cart_key(key, state),
        Route::Admin => admin_key(key, state),
        _ => None,
    }
}

fn products_key(key: KeyEvent, state: &AppState) -> Option<Action> {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Products(ProductsAction::SelectNext)),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Products(ProductsAction::SelectPrevious)),
        KeyCode::Char('s') => Some(Action::Products(ProductsAction::CycleSort)),
        KeyCode::Char('g') => Some(Action::Products(ProductsAction::CycleGenre)),
        KeyCode::Char('p') => Some(Action::Products(ProductsAction::CyclePlatform)),
        KeyCode::Char('a') | KeyCode::Enter => {
            let products = &state.products;
            let listing = product_listing(&state.store.catalog, &products.filter(), products.sort);
            listing.get(products.selected).and_then(|game| add_to_cart(game))
        }
        _ => None,
    }
}

fn cart_key(key: KeyEvent, state: &AppState) -> Option<Action> {
    let line = state.store.cart.get(state.checkout.selected);
    let quantity = line.map(|l| i64::from(l.quantity)).unwrap_or_default();

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Cart(CartAction::SelectNext)),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Cart(CartAction::SelectPrevious)),
        KeyCode::Char('+') | KeyCode::Char('=') => line.map(|l| {
            Action::Cart(CartAction::UpdateQuantity {
                id: l.id(),
                quantity: quantity + 1,
            })
        }),
        KeyCode::Char('-') => line.map(|l| {
            Action::Cart(CartAction::UpdateQuantity {
                id: l.id(),
                quantity: quantity - 1,
            })
        }),
        KeyCode::Char('d') | KeyCode::Delete => {
            line.map(|l| Action::Cart(CartAction::Remove(l.id())))
        }
        KeyCode::Char('x') => Some(Action::Cart(CartAction::Clear)),
        KeyCode::Char('c') => Some(Action::Order(OrderAction::Checkout)),
        _ => None,
    }
}

fn admin_key(key: KeyEvent, state: &AppState) -> Option<Action> {
    match key.code {
        KeyCode::Tab => return Some(Action::Admin(AdminAction::SwitchTab)),
        KeyCode::Down | KeyCode::Char('j') => return Some(Action::Admin(AdminAction::SelectNext)),
        KeyCode::Up | KeyCode::Char('k') => {
            return Some(Action::Admin(AdminAction::SelectPrevious))
        }
        _ => {}
    }

    if state.admin.tab != AdminTab::Games {
        return None;
    }
    if key.code == KeyCode::Char('n') {
        return Some(Action::Catalog(CatalogAction::Add(new_game(state))));
    }
    let game = state.store.catalog.get(state.admin.selected)?;

    match key.code {
        // Deleting takes two presses on the same game
        KeyCode::Char('x') | KeyCode::Delete if state.admin.pending_delete == Some(game.id) => {
            Some(Action::Catalog(CatalogAction::Delete(game.id)))
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            Some(Action::Admin(AdminAction::RequestDelete(game.id)))
        }
        KeyCode::Char('t') => Some(Action::Catalog(CatalogAction::Update(Game {
            in_stock: !game.in_stock,
            ..game.clone()
        }))),
        _ => None,
    }
}

/// Copy of the selected game, or a blank entry once the catalog is empty
fn new_game(state: &AppState) -> Game {
    let id = state.store.catalog.iter().map(|g| g.id).max().unwrap_or(0) + 1;
    match state.store.catalog.get(state.admin.selected) {
        Some(game) => Game {
            id,
            title: format!("{} (Copy)", game.title),
            ..game.clone()
        },
        None => Game {
            id,
            title: "New Game".to_string(),
            genre: "Action".to_string(),
            platform: PLATFORMS.join(", "),
            price: Decimal::ZERO,
            description: String::new(),
            image: String::new(),
            rating: 0.0,
            release_date: NaiveDate::default(),
            developer: String::new(),
            in_stock: false,
        },
    }
}

/// Commands available on every view without text input
fn global_key(key: KeyEvent, state: &AppState) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => Some(Action::Global(GlobalAction::Quit)),
        KeyCode::Backspace => Some(Action::Global(GlobalAction::Back)),
        KeyCode::Char('L') if state.store.user.is_none() => Some(navigate(Route::Login)),
        KeyCode::Char('O') if state.store.user.is_some() => {
            Some(Action::Session(SessionAction::Logout))
        }
        KeyCode::Char('C') => Some(navigate(Route::Order)),
        KeyCode::Char('P') => Some(navigate(Route::Profile)),
        KeyCode::Char('A') => Some(navigate(Route::Admin)),
        KeyCode::Char('/') => Some(navigate(Route::Search)),
        _ => None,
    }
}
