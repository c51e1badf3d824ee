//! Contact form actions

/// A message from the contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

#[derive(Debug, Clone)]
pub enum ContactAction {
    /// Form submitted, validated by `ContactMiddleware`
    Submit(ContactMessage),
    /// Message was accepted, show the confirmation
    Submitted,
    /// Confirmation display time is over
    ConfirmationExpired,
}
