//! Navigational surface
//!
//! The fixed set of named views, their paths and the view-level access check.
//! The check decides what a view shows, it is not a security boundary.

use strum::{EnumIter, IntoEnumIterator};

use crate::domain_models::User;

/// A named view reachable by path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, strum::Display)]
pub enum Route {
    #[default]
    Entrance,
    Home,
    #[strum(to_string = "Games")]
    Products,
    Search,
    #[strum(to_string = "Cart")]
    Order,
    About,
    Contact,
    Links,
    Login,
    Register,
    Profile,
    Admin,
}

/// Outcome of the view-level access check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// The view needs a signed-in user ("Please Log In")
    LoginRequired,
    /// The view needs the admin flag ("Access Denied")
    Denied,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Entrance => "/",
            Route::Home => "/home",
            Route::Products => "/products",
            Route::Search => "/search",
            Route::Order => "/order",
            Route::About => "/about",
            Route::Contact => "/contact",
            Route::Links => "/links",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Profile => "/profile",
            Route::Admin => "/admin",
        }
    }

    /// Resolve a path to its route, `None` for unknown paths
    pub fn from_path(path: &str) -> Option<Route> {
        Route::iter().find(|route| route.path() == path)
    }

    pub fn access(self, user: Option<&User>) -> Access {
        match (self, user) {
            (Route::Admin, Some(user)) if user.is_admin => Access::Granted,
            (Route::Admin, _) => Access::Denied,
            (Route::Profile, None) => Access::LoginRequired,
            _ => Access::Granted,
        }
    }

    /// Routes whose view edits text, printable keys go to the focused field
    pub fn accepts_text_input(self) -> bool {
        matches!(
            self,
            Route::Search | Route::Login | Route::Register | Route::Contact
        )
    }

    /// Routes shown in the navigation bar, in order
    pub fn tabs() -> Vec<Route> {
        Route::iter().filter(|r| *r != Route::Entrance).collect()
    }

    pub fn next(self) -> Route {
        let tabs = Route::tabs();
        let idx = tabs.iter().position(|r| *r == self);
        match idx {
            Some(i) => tabs[(i + 1) % tabs.len()],
            None => Route::Home,
        }
    }

    pub fn prev(self) -> Route {
        let tabs = Route::tabs();
        let idx = tabs.iter().position(|r| *r == self);
        match idx {
            Some(0) | None => tabs[tabs.len() - 1],
            Some(i) => tabs[i - 1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_admin: bool) -> User {
        User {
            id: 1,
            name: "player".to_string(),
            email: "player@example.com".to_string(),
            is_admin,
        }
    }

    #[test]
    fn test_paths_round_trip() {
        for route in Route::iter() {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/nope"), None);
        assert_eq!(Route::from_path("/"), Some(Route::Entrance));
    }

    #[test]
    fn test_admin_requires_admin_flag() {
        assert_eq!(Route::Admin.access(None), Access::Denied);
        assert_eq!(Route::Admin.access(Some(&user(false))), Access::Denied);
        assert_eq!(Route::Admin.access(Some(&user(true))), Access::Granted);
    }

    #[test]
    fn test_profile_requires_login() {
        assert_eq!(Route::Profile.access(None), Access::LoginRequired);
        assert_eq!(Route::Profile.access(Some(&user(false))), Access::Granted);
    }

    #[test]
    fn test_open_routes() {
        assert_eq!(Route::Products.access(None), Access::Granted);
        assert_eq!(Route::Order.access(None), Access::Granted);
    }

    #[test]
    fn test_tab_cycling_wraps() {
        assert_eq!(Route::Home.prev(), Route::Admin);
        assert_eq!(Route::Admin.next(), Route::Home);
        assert_eq!(Route::Entrance.next(), Route::Home);
        assert_eq!(Route::Home.next(), Route::Products);
    }

    #[test]
    fn test_text_input_routes() {
        let typing: Vec<Route> = Route::iter().filter(|r| r.accepts_text_input()).collect();
        assert_eq!(
            typing,
            vec![Route::Search, Route::Contact, Route::Login, Route::Register]
        );
    }
}
