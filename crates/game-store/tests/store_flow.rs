//! End-to-end flows through the full middleware chain

use std::sync::Arc;
use std::time::Duration;

use chrono::DateTime;
use game_store::actions::{
    Action, CartAction, CatalogAction, GlobalAction, OrderAction, SearchAction, SessionAction,
};
use game_store::domain_models::seed_catalog;
use game_store::middleware::{
    CheckoutMiddleware, ContactMiddleware, KeyboardMiddleware, LoggingMiddleware,
    SearchMiddleware, SessionMiddleware,
};
use game_store::routes::Route;
use game_store::scheduler::{Clock, ManualClock};
use game_store::state::{AppState, SearchInput};
use game_store::store::Store;
use game_store::view_models::{cart_totals, item_count};
use game_store_config::AppConfig;
use pretty_assertions::assert_eq;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rust_decimal::Decimal;

fn app() -> (Store, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(
        DateTime::from_timestamp(1_735_689_600, 0).unwrap(),
    ));
    let shared: Arc<dyn Clock> = clock.clone();

    let mut store = Store::new(AppState::new(AppConfig::default()), Arc::clone(&shared));
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(SessionMiddleware::new(Arc::clone(&shared))));
    store.add_middleware(Box::new(CheckoutMiddleware::new(Arc::clone(&shared))));
    store.add_middleware(Box::new(SearchMiddleware::new()));
    store.add_middleware(Box::new(ContactMiddleware::new()));
    (store, clock)
}

fn press(store: &mut Store, code: KeyCode) {
    store.dispatch(Action::Global(GlobalAction::KeyPressed(KeyEvent::new(
        code,
        KeyModifiers::NONE,
    ))));
}

fn type_text(store: &mut Store, text: &str) {
    for c in text.chars() {
        press(store, KeyCode::Char(c));
    }
}

fn login(store: &mut Store, email: &str) {
    store.dispatch(Action::Session(SessionAction::SubmitLogin {
        email: email.to_string(),
        password: "secret".to_string(),
    }));
}

#[test]
fn add_to_cart_sequence() {
    let (mut store, _clock) = app();
    let catalog = seed_catalog();

    store.dispatch(Action::Cart(CartAction::Add(catalog[0].clone())));
    store.dispatch(Action::Cart(CartAction::Add(catalog[0].clone())));
    store.dispatch(Action::Cart(CartAction::Add(catalog[1].clone())));

    let cart = &store.state().store.cart;
    let lines: Vec<(u64, u32)> = cart.iter().map(|l| (l.id(), l.quantity)).collect();
    assert_eq!(lines, vec![(1, 2), (2, 1)]);
    assert_eq!(item_count(cart), 3);

    let totals = cart_totals(cart, store.state().tax_rate());
    assert_eq!(totals.subtotal, Decimal::new(15997, 2));

    store.dispatch(Action::Cart(CartAction::UpdateQuantity { id: 1, quantity: 0 }));
    let ids: Vec<u64> = store.state().store.cart.iter().map(|l| l.id()).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn checkout_requires_login() {
    let (mut store, clock) = app();
    store.dispatch(Action::Cart(CartAction::Add(seed_catalog().remove(2))));
    store.dispatch(Action::Order(OrderAction::Checkout));

    clock.advance(Duration::from_secs(10));
    store.tick();

    let state = store.state();
    assert!(state.store.orders.is_empty());
    assert_eq!(state.store.cart.len(), 1);
}

#[test]
fn checkout_through_the_keyboard() {
    let (mut store, clock) = app();

    // Entrance -> Home -> Games, add the top listed game
    press(&mut store, KeyCode::Enter);
    press(&mut store, KeyCode::Enter);
    press(&mut store, KeyCode::Char('a'));
    assert_eq!(store.state().store.cart.len(), 1);

    // Sign in from the games page and come back
    store.dispatch(Action::Global(GlobalAction::Navigate(Route::Login)));
    type_text(&mut store, "gamer@example.com");
    press(&mut store, KeyCode::Tab);
    type_text(&mut store, "hunter2");
    press(&mut store, KeyCode::Enter);
    assert_eq!(store.state().route, Route::Products);
    assert_eq!(store.state().store.user.as_ref().unwrap().name, "gamer");

    store.dispatch(Action::Global(GlobalAction::Navigate(Route::Order)));
    press(&mut store, KeyCode::Char('c'));
    assert!(store.state().store.orders.is_empty());

    clock.advance(Duration::from_millis(2000));
    store.tick();

    let state = store.state();
    assert_eq!(state.store.orders.len(), 1);
    assert!(state.store.cart.is_empty());
    assert_eq!(state.store.orders[0].items[0].game.title, "Call of Duty: Modern Warfare II");
}

#[test]
fn logout_clears_cart_even_with_order_pending() {
    let (mut store, clock) = app();
    login(&mut store, "gamer@example.com");
    store.dispatch(Action::Cart(CartAction::Add(seed_catalog().remove(0))));
    store.dispatch(Action::Order(OrderAction::Checkout));
    store.dispatch(Action::Session(SessionAction::Logout));

    assert!(store.state().store.user.is_none());
    assert!(store.state().store.cart.is_empty());

    // Already scheduled, still delivered
    clock.advance(Duration::from_millis(2000));
    store.tick();
    assert_eq!(store.state().store.orders.len(), 1);
}

#[test]
fn search_debounce_through_the_keyboard() {
    let (mut store, clock) = app();
    store.dispatch(Action::Global(GlobalAction::Navigate(Route::Search)));
    type_text(&mut store, "night");

    assert!(store.state().store.search_results.is_empty());
    clock.advance(Duration::from_millis(500));
    store.tick();

    let titles: Vec<&str> = store
        .state()
        .store
        .search_results
        .iter()
        .map(|g| g.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Cyberpunk 2077"]);
    assert_eq!(
        store.state().search.input,
        SearchInput {
            query: "night".to_string(),
            ..Default::default()
        }
    );

    store.dispatch(Action::Search(SearchAction::Clear));
    assert!(store.state().store.search_results.is_empty());
}

#[test]
fn admin_catalog_management() {
    let (mut store, _clock) = app();
    login(&mut store, "admin@gamestore.com");
    assert_eq!(
        Route::Admin.access(store.state().store.user.as_ref()),
        game_store::routes::Access::Granted
    );

    store.dispatch(Action::Catalog(CatalogAction::Delete(99)));
    assert_eq!(store.state().store.catalog, seed_catalog());

    store.dispatch(Action::Global(GlobalAction::Navigate(Route::Admin)));
    press(&mut store, KeyCode::Char('t'));
    assert!(!store.state().store.catalog[0].in_stock);

    press(&mut store, KeyCode::Char('n'));
    let catalog = &store.state().store.catalog;
    assert_eq!(catalog.len(), 7);
    assert_eq!(catalog[6].id, 7);

    press(&mut store, KeyCode::Char('x'));
    assert_eq!(store.state().store.catalog.len(), 7);
    assert_eq!(store.state().admin.pending_delete, Some(1));

    press(&mut store, KeyCode::Char('x'));
    assert_eq!(store.state().store.catalog.len(), 6);
    assert!(store.state().store.game(1).is_none());
}

#[test]
fn admin_can_rebuild_an_emptied_catalog() {
    let (mut store, _clock) = app();
    login(&mut store, "admin@gamestore.com");
    store.dispatch(Action::Global(GlobalAction::Navigate(Route::Admin)));

    for _ in 0..6 {
        press(&mut store, KeyCode::Char('x'));
        press(&mut store, KeyCode::Char('x'));
    }
    assert!(store.state().store.catalog.is_empty());

    press(&mut store, KeyCode::Char('n'));
    let catalog = &store.state().store.catalog;
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].title, "New Game");
}
