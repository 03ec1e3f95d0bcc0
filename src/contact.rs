//! Contact form state and the submission extension point.
//!
//! The form only captures text per field. Sending it anywhere is the job of a
//! [`ContactBackend`]; none is wired by default, so submitting through
//! [`UnconfiguredBackend`] reports [`ContactError::NotConfigured`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Input fields of the contact form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    /// Sender name
    #[default]
    Name,
    /// Sender email address
    Email,
    /// Message body (multi-line)
    Message,
}

impl ContactField {
    /// Fields in tab order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Field label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    /// Placeholder shown while the field is empty.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "your.email@example.com",
            Self::Message => "Your message...",
        }
    }

    /// Element id used by the HTML form.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
        }
    }
}

/// Snapshot of the form handed to a backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Sender name
    pub name: String,
    /// Sender email address
    pub email: String,
    /// Message body
    pub message: String,
}

/// Acknowledgement returned by a backend.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ack {
    /// Backend-specific reference for the delivered message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Failures a backend can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// No backend is wired up
    #[error("contact form submission is not configured")]
    NotConfigured,
    /// The backend refused the message
    #[error("message rejected: {0}")]
    Rejected(String),
    /// The backend could not be reached
    #[error("delivery failed: {0}")]
    Transport(String),
}

/// Delivers contact form messages somewhere.
pub trait ContactBackend: Send + Sync {
    /// Submits one message.
    fn submit(&self, message: &ContactMessage) -> Result<Ack, ContactError>;
}

/// The default backend: submitting always fails with `NotConfigured`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredBackend;

impl ContactBackend for UnconfiguredBackend {
    fn submit(&self, _message: &ContactMessage) -> Result<Ack, ContactError> {
        Err(ContactError::NotConfigured)
    }
}

/// Per-field input captured from the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    /// Name field contents
    pub name: String,
    /// Email field contents
    pub email: String,
    /// Message field contents
    pub message: String,
    /// Field receiving input
    pub focus: ContactField,
}

impl ContactForm {
    /// Creates an empty form focused on the name field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of `field`.
    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// Appends a character to the focused field.
    pub fn insert_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    /// Inserts a line break. Only the message field is multi-line.
    ///
    /// Returns false when the focused field is single-line.
    pub fn insert_newline(&mut self) -> bool {
        if self.focus == ContactField::Message {
            self.message.push('\n');
            true
        } else {
            false
        }
    }

    /// Deletes the last character of the focused field.
    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    /// Moves focus to the next field, wrapping around.
    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn previous_field(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Empties every field and refocuses the name field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// Snapshot of the current input.
    #[must_use]
    pub fn to_message(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }

    /// Hands the input to `backend`.
    ///
    /// Fields are cleared on success and kept on failure.
    pub fn submit(&mut self, backend: &dyn ContactBackend) -> Result<Ack, ContactError> {
        let result = backend.submit(&self.to_message());
        match &result {
            Ok(ack) => {
                info!(reference = ?ack.reference, "contact message delivered");
                self.clear();
            }
            Err(e) => debug!("contact submission failed: {e}"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AcceptingBackend;

    impl ContactBackend for AcceptingBackend {
        fn submit(&self, message: &ContactMessage) -> Result<Ack, ContactError> {
            Ok(Ack {
                reference: Some(format!("msg-{}", message.name.len())),
            })
        }
    }

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
            focus: ContactField::Message,
        }
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = ContactForm::new();
        for c in "Ada".chars() {
            form.insert_char(c);
        }
        form.next_field();
        form.insert_char('a');
        form.insert_char('@');
        form.backspace();

        assert_eq!(form.name, "Ada");
        assert_eq!(form.email, "a");
        assert!(form.message.is_empty());
    }

    #[test]
    fn test_field_cycle_wraps() {
        let mut form = ContactForm::new();
        form.previous_field();
        assert_eq!(form.focus, ContactField::Message);
        form.next_field();
        assert_eq!(form.focus, ContactField::Name);
    }

    #[test]
    fn test_newline_only_in_message() {
        let mut form = ContactForm::new();
        assert!(!form.insert_newline());
        assert!(form.name.is_empty());

        form.focus = ContactField::Message;
        assert!(form.insert_newline());
        assert_eq!(form.message, "\n");
    }

    #[test]
    fn test_backspace_on_empty_field() {
        let mut form = ContactForm::new();
        form.backspace();
        assert!(form.is_empty());
    }

    #[test]
    fn test_unconfigured_backend_keeps_fields() {
        let mut form = filled_form();
        let result = form.submit(&UnconfiguredBackend);
        assert_eq!(result, Err(ContactError::NotConfigured));
        assert_eq!(form, filled_form());
    }

    #[test]
    fn test_successful_submit_clears_fields() {
        let mut form = filled_form();
        let ack = form.submit(&AcceptingBackend).unwrap();
        assert_eq!(ack.reference.as_deref(), Some("msg-3"));
        assert!(form.is_empty());
        assert_eq!(form.focus, ContactField::Name);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::NotConfigured.to_string(),
            "contact form submission is not configured"
        );
        assert_eq!(
            ContactError::Rejected("spam".into()).to_string(),
            "message rejected: spam"
        );
    }
}
