//! User model
//!
//! Users only live for the duration of a session, nothing is verified.

/// Identifier of a user
pub type UserId = u64;

/// The signed-in shopper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

impl User {
    /// Build a user from a login
    ///
    /// The display name is the part of the email before `@`.
    pub fn from_login(id: UserId, email: &str, admin_email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email);
        Self::from_registration(id, name, email, admin_email)
    }

    /// Build a user from a registration with an explicit display name
    pub fn from_registration(id: UserId, name: &str, email: &str, admin_email: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            is_admin: email == admin_email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_derives_name_from_email() {
        let user = User::from_login(7, "jane.doe@example.com", "admin@gamestore.com");
        assert_eq!(user.name, "jane.doe");
        assert_eq!(user.email, "jane.doe@example.com");
        assert!(!user.is_admin);
    }

    #[test]
    fn test_login_without_at_sign_uses_whole_email() {
        let user = User::from_login(1, "player", "admin@gamestore.com");
        assert_eq!(user.name, "player");
    }

    #[test]
    fn test_admin_email_grants_admin() {
        let user = User::from_login(1, "admin@gamestore.com", "admin@gamestore.com");
        assert!(user.is_admin);
        assert_eq!(user.name, "admin");
    }

    #[test]
    fn test_registration_keeps_name() {
        let user = User::from_registration(3, "Geralt", "geralt@rivia.pl", "admin@gamestore.com");
        assert_eq!(user.name, "Geralt");
        assert!(!user.is_admin);
    }
}
