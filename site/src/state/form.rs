//! Contact form validation and simulated submission.
//!
//! DESIGN
//! ======
//! The form has two phases. `submit` validates every field at once, records
//! all errors, and either rejects (failure notification) or moves to
//! `Sending`. The host waits [`SEND_DELAY_MS`] and then calls `complete`,
//! which announces success and clears the fields. There is no network call,
//! so once validation passes the send cannot fail.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::state::notification::{NotificationState, Severity};

/// Simulated network latency between submit and success.
pub const SEND_DELAY_MS: u32 = 1_000;

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";
pub const FAILURE_MESSAGE: &str = "Please fix the highlighted fields and try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// Check `local@domain.tld`: no whitespace, exactly one `@`, non-empty local
/// part, and a `.` in the domain with at least one character on each side.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Collect every violation; fields are trimmed before checking.
#[must_use]
pub fn validate(fields: &ContactFields) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if fields.name.trim().is_empty() {
        errors.push(FieldError { field: Field::Name, message: "Please enter your name." });
    }
    let email = fields.email.trim();
    if email.is_empty() {
        errors.push(FieldError { field: Field::Email, message: "Please enter your email." });
    } else if !is_valid_email(email) {
        errors.push(FieldError { field: Field::Email, message: "Please enter a valid email address." });
    }
    if fields.message.trim().is_empty() {
        errors.push(FieldError { field: Field::Message, message: "Please enter a message." });
    }
    errors
}

#[must_use]
pub fn success_message(name: &str) -> String {
    format!("Thanks, {name}! Your message has been sent. I'll get back to you soon.")
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// Waiting out the simulated send. `name` is the trimmed name as it was
    /// at submit time; edits made while sending do not change the greeting.
    Sending { name: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A send was already in flight.
    Ignored,
    /// Validation failed with this many field errors.
    Rejected(usize),
    /// Valid; the host should wait, then call `complete`.
    Accepted,
}

#[derive(Clone, Debug, Default)]
pub struct ContactFormState {
    pub fields: ContactFields,
    pub errors: Vec<FieldError>,
    pub phase: SubmitPhase,
}

impl ContactFormState {
    pub fn submit(&mut self, notices: &mut NotificationState) -> SubmitOutcome {
        if self.is_sending() {
            return SubmitOutcome::Ignored;
        }
        self.errors = validate(&self.fields);
        if self.errors.is_empty() {
            self.phase = SubmitPhase::Sending { name: self.fields.name.trim().to_owned() };
            SubmitOutcome::Accepted
        } else {
            notices.show(FAILURE_MESSAGE, Severity::Error);
            SubmitOutcome::Rejected(self.errors.len())
        }
    }

    /// Finish a simulated send: announce success, clear, re-enable.
    pub fn complete(&mut self, notices: &mut NotificationState) {
        let SubmitPhase::Sending { name } = std::mem::take(&mut self.phase) else {
            return;
        };
        notices.show(success_message(&name), Severity::Success);
        self.fields = ContactFields::default();
    }

    #[must_use]
    pub fn error_for(&self, field: Field) -> Option<&'static str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message)
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        matches!(self.phase, SubmitPhase::Sending { .. })
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_sending() { SENDING_LABEL } else { SUBMIT_LABEL }
    }
}
