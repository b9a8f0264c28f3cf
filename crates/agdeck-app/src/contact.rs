//! Mock contact form
//!
//! Nothing is sent anywhere. Submitting shows a spinner for
//! [`SUBMIT_DURATION`] and then a success panel until the form is reset.

use std::time::Duration;

use agdeck_core::catalog::CONTACT_CATEGORIES;

pub const SUBMIT_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Category,
    Brief,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Category,
        ContactField::Brief,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Identity",
            ContactField::Email => "Email",
            ContactField::Category => "Project Category",
            ContactField::Brief => "Brief",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Ex: John Doe",
            ContactField::Email => "hello@company.com",
            ContactField::Category => "",
            ContactField::Brief => "Describe the goal...",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub brief: String,
    category: usize,
    focus: ContactField,
    editing: bool,
    status: ContactStatus,
    generation: u64,
    error: Option<&'static str>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> ContactStatus {
        self.status
    }

    pub fn focus(&self) -> ContactField {
        self.focus
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn category(&self) -> &'static str {
        CONTACT_CATEGORIES[self.category % CONTACT_CATEGORIES.len()]
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Category => self.category(),
            ContactField::Brief => &self.brief,
        }
    }

    /// Enter field editing. Only an idle form can be edited.
    pub fn start_editing(&mut self) -> bool {
        if self.status != ContactStatus::Idle {
            return false;
        }
        self.editing = true;
        true
    }

    pub fn stop_editing(&mut self) {
        self.editing = false;
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            ContactField::Name => Some(&mut self.name),
            ContactField::Email => Some(&mut self.email),
            ContactField::Brief => Some(&mut self.brief),
            ContactField::Category => None,
        }
    }

    pub fn push_char(&mut self, c: char) {
        if !self.editing {
            return;
        }
        if let Some(text) = self.focused_text() {
            text.push(c);
        }
        self.error = None;
    }

    pub fn pop_char(&mut self) {
        if !self.editing {
            return;
        }
        if let Some(text) = self.focused_text() {
            text.pop();
        }
    }

    pub fn cycle_category(&mut self, forward: bool) {
        let len = CONTACT_CATEGORIES.len();
        self.category = if forward {
            (self.category + 1) % len
        } else {
            (self.category + len - 1) % len
        };
    }

    /// Every text field is required and the email needs an `@`.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Identity is required");
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err("Email is required");
        }
        if !email.contains('@') {
            return Err("Email looks invalid");
        }
        if self.brief.trim().is_empty() {
            return Err("Brief is required");
        }
        Ok(())
    }

    /// Idle → Submitting. Returns the generation the completion timer carries.
    pub fn submit(&mut self) -> Option<u64> {
        if self.status != ContactStatus::Idle {
            return None;
        }
        if let Err(e) = self.validate() {
            self.error = Some(e);
            return None;
        }
        self.error = None;
        self.editing = false;
        self.status = ContactStatus::Submitting;
        self.generation = self.generation.wrapping_add(1);
        Some(self.generation)
    }

    /// Submitting → Success, unless the form was reset in the meantime.
    pub fn complete(&mut self, generation: u64) -> bool {
        if self.status != ContactStatus::Submitting || generation != self.generation {
            return false;
        }
        self.status = ContactStatus::Success;
        true
    }

    /// Back to an empty idle form.
    pub fn reset(&mut self) {
        let generation = self.generation.wrapping_add(1);
        *self = Self {
            generation,
            ..Self::default()
        };
    }
}
