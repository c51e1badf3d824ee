//! Session actions
//!
//! The submit variants carry raw form input and are validated by
//! `SessionMiddleware`; only `Login`, `Register` and `Logout` reach the reducer.

use crate::domain_models::User;

#[derive(Debug, Clone)]
pub enum SessionAction {
    /// Login form submitted
    SubmitLogin { email: String, password: String },
    /// Registration form submitted
    SubmitRegistration {
        name: String,
        email: String,
        password: String,
    },
    /// Establish a session for this user
    Login(User),
    /// Establish a session for a newly registered user
    Register(User),
    /// End the session, clearing the cart
    Logout,
}
