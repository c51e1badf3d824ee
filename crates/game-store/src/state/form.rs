//! Text form state
//!
//! Login, registration and contact forms are all a list of labelled text
//! fields with one focused field.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
    /// Rendered masked
    pub secret: bool,
}

impl FormField {
    fn text(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            secret: false,
        }
    }

    fn secret(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            secret: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub fields: Vec<FormField>,
    pub focused: usize,
}

impl FormState {
    fn with_fields(fields: Vec<FormField>) -> Self {
        Self { fields, focused: 0 }
    }

    pub fn login() -> Self {
        Self::with_fields(vec![FormField::text("Email"), FormField::secret("Password")])
    }

    pub fn register() -> Self {
        Self::with_fields(vec![
            FormField::text("Name"),
            FormField::text("Email"),
            FormField::secret("Password"),
        ])
    }

    pub fn contact() -> Self {
        Self::with_fields(vec![
            FormField::text("Name"),
            FormField::text("Email"),
            FormField::text("Subject"),
            FormField::text("Message"),
        ])
    }

    /// Value of the field at `idx`, empty if there is no such field
    pub fn value(&self, idx: usize) -> &str {
        self.fields.get(idx).map(|f| f.value.as_str()).unwrap_or("")
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.pop();
        }
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focused = self
                .focused
                .checked_sub(1)
                .unwrap_or(self.fields.len() - 1);
        }
    }

    /// Reset the form to its default state
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.focused = 0;
    }
}
