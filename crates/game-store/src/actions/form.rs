//! Text form actions
//!
//! Shared by the login, registration and contact forms.

/// Which form an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormId {
    Login,
    Register,
    Contact,
}

#[derive(Debug, Clone)]
pub enum FormAction {
    /// Append a character to the focused field
    Input(FormId, char),
    /// Delete the last character of the focused field
    Backspace(FormId),
    FocusNext(FormId),
    FocusPrevious(FormId),
    /// Empty all fields and focus the first one
    Reset(FormId),
}
