//! Application State

use game_store_config::AppConfig;
use rust_decimal::Decimal;

use crate::actions::FormId;
use crate::routes::Route;
use crate::view_models::tax_rate;

use super::{
    AdminState, CheckoutState, FormState, ProductsState, SearchState, StatusBarState, StoreState,
};

/// Maximum number of routes remembered for `GlobalAction::Back`
const MAX_HISTORY: usize = 32;

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub route: Route,
    /// Previously shown routes, most recent last
    pub history: Vec<Route>,
    pub store: StoreState,
    pub products: ProductsState,
    pub search: SearchState,
    pub checkout: CheckoutState,
    pub admin: AdminState,
    pub login_form: FormState,
    pub register_form: FormState,
    pub contact_form: FormState,
    /// Contact confirmation is showing
    pub contact_submitted: bool,
    pub status_bar: StatusBarState,
    pub config: AppConfig,
}

impl AppState {
    /// Fresh application state over the seed catalog
    pub fn new(config: AppConfig) -> Self {
        Self {
            running: true,
            route: Route::default(),
            history: Vec::new(),
            store: StoreState::seeded(),
            products: ProductsState::default(),
            search: SearchState::default(),
            checkout: CheckoutState::default(),
            admin: AdminState::default(),
            login_form: FormState::login(),
            register_form: FormState::register(),
            contact_form: FormState::contact(),
            contact_submitted: false,
            status_bar: StatusBarState::default(),
            config,
        }
    }

    pub fn form(&self, id: FormId) -> &FormState {
        match id {
            FormId::Login => &self.login_form,
            FormId::Register => &self.register_form,
            FormId::Contact => &self.contact_form,
        }
    }

    pub fn form_mut(&mut self, id: FormId) -> &mut FormState {
        match id {
            FormId::Login => &mut self.login_form,
            FormId::Register => &mut self.register_form,
            FormId::Contact => &mut self.contact_form,
        }
    }

    pub fn tax_rate(&self) -> Decimal {
        tax_rate(self.config.tax_percent)
    }

    /// Remember the current route and switch to another one
    pub fn push_route(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        self.history.push(self.route);
        if self.history.len() > MAX_HISTORY {
            self.history.remove(0);
        }
        self.route = route;
    }

    /// Go back to the previous route, or Home if there is none
    pub fn pop_route(&mut self) {
        self.route = self.history.pop().unwrap_or(Route::Home);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
