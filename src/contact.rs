use std::{fmt, sync::LazyLock};

use leptos::server_fn::{
    codec::JsonEncoding,
    error::{FromServerFnError, ServerFnErrorErr},
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern should compile"));

pub const RETRY_PROMPT: &str = "An error occurred while sending the email. Please try again later.";
pub const TIMEOUT_PROMPT: &str =
    "The email service took too long to respond. Please try again later.";
pub const UNAVAILABLE_PROMPT: &str = "Newsletter sign-up is not available right now.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        })
    }
}

/// Pre-flight validation failures. The display text is what the form shows.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactError {
    #[error("Please fill in all fields")]
    MissingField(Field),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Failures of the relay call, carried across the server function boundary.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SubmissionError {
    #[error("message rejected before sending: {0}")]
    Invalid(ContactError),
    #[error("relay did not answer in time")]
    Timeout,
    #[error("couldn't reach relay: {0}")]
    Network(String),
    #[error("relay rejected the message with status {status}")]
    Rejected { status: u16 },
    #[error("relay is not configured for this form")]
    Unavailable,
    #[error("{0}")]
    ServerFn(ServerFnErrorErr),
}

impl FromServerFnError for SubmissionError {
    type Encoder = JsonEncoding;

    fn from_server_fn_error(value: ServerFnErrorErr) -> Self {
        SubmissionError::ServerFn(value)
    }
}

impl SubmissionError {
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::Invalid(e) => e.to_string(),
            SubmissionError::Timeout => TIMEOUT_PROMPT.to_string(),
            SubmissionError::Unavailable => UNAVAILABLE_PROMPT.to_string(),
            _ => RETRY_PROMPT.to_string(),
        }
    }
}

pub fn validate_email(email: &str) -> Result<(), ContactError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ContactError::InvalidEmail)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

/// What gets forwarded to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ContactError::MissingField(*field));
        }
        validate_email(&self.email)
    }
}

/// State of one contact form session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    status: SubmitStatus,
    error: Option<String>,
}

impl ContactForm {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
        if self.status == SubmitStatus::Succeeded {
            self.status = SubmitStatus::Idle;
        }
    }

    /// Validates and moves to `Sending`. Returns the message to dispatch, or
    /// `None` when a submission is already in flight.
    pub fn submit(&mut self) -> Result<Option<ContactMessage>, ContactError> {
        if self.is_sending() {
            return Ok(None);
        }
        let msg = ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        };
        if let Err(e) = msg.validate() {
            self.status = SubmitStatus::Idle;
            self.error = Some(e.to_string());
            return Err(e);
        }
        self.status = SubmitStatus::Sending;
        self.error = None;
        Ok(Some(msg))
    }

    /// Applies the relay outcome. Ignored unless a submission is in flight.
    pub fn resolve(&mut self, outcome: Result<(), SubmissionError>) {
        if !self.is_sending() {
            return;
        }
        match outcome {
            Ok(()) => {
                self.status = SubmitStatus::Succeeded;
                self.error = None;
                self.name.clear();
                self.email.clear();
                self.message.clear();
            }
            Err(e) => {
                self.status = SubmitStatus::Failed;
                self.error = Some(e.user_message());
            }
        }
    }
}

/// Footer newsletter sign-up, one email field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsletterForm {
    email: String,
    status: SubmitStatus,
    error: Option<String>,
}

impl NewsletterForm {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_subscribed(&self) -> bool {
        self.status == SubmitStatus::Succeeded
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    pub fn submit(&mut self) -> Result<Option<String>, ContactError> {
        if self.status == SubmitStatus::Sending {
            return Ok(None);
        }
        let checked = if self.email.trim().is_empty() {
            Err(ContactError::MissingField(Field::Email))
        } else {
            validate_email(&self.email)
        };
        if let Err(e) = checked {
            self.status = SubmitStatus::Idle;
            self.error = Some(e.to_string());
            return Err(e);
        }
        self.status = SubmitStatus::Sending;
        self.error = None;
        Ok(Some(self.email.clone()))
    }

    pub fn resolve(&mut self, outcome: Result<(), SubmissionError>) {
        if self.status != SubmitStatus::Sending {
            return;
        }
        match outcome {
            Ok(()) => {
                self.status = SubmitStatus::Succeeded;
                self.error = None;
                self.email.clear();
            }
            Err(e) => {
                self.status = SubmitStatus::Failed;
                self.error = Some(e.user_message());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, "Ada".to_string());
        form.set_field(Field::Email, "user@example.com".to_string());
        form.set_field(Field::Message, "Hello there".to_string());
        form
    }

    #[test]
    fn test_missing_fields_block_submission() {
        for field in [Field::Name, Field::Email, Field::Message] {
            let mut form = filled();
            form.set_field(field, String::new());
            assert_eq!(form.submit(), Err(ContactError::MissingField(field)));
            assert_eq!(form.status(), SubmitStatus::Idle);
            assert_eq!(form.error(), Some("Please fill in all fields"));
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut form = filled();
        form.set_field(Field::Message, "   \n".to_string());
        assert_eq!(form.submit(), Err(ContactError::MissingField(Field::Message)));
    }

    #[test]
    fn test_email_shape() {
        assert_eq!(validate_email("not-an-email"), Err(ContactError::InvalidEmail));
        assert_eq!(validate_email("user@example"), Err(ContactError::InvalidEmail));
        assert_eq!(validate_email("us er@example.com"), Err(ContactError::InvalidEmail));
        assert_eq!(validate_email("@example.com"), Err(ContactError::InvalidEmail));
        assert_eq!(validate_email("user@example.com"), Ok(()));
        assert_eq!(validate_email("first.last@sub.example.co.id"), Ok(()));
    }

    #[test]
    fn test_invalid_email_is_reported() {
        let mut form = filled();
        form.set_field(Field::Email, "not-an-email".to_string());
        assert_eq!(form.submit(), Err(ContactError::InvalidEmail));
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert_eq!(form.error(), Some("Please enter a valid email address"));
    }

    #[test]
    fn test_valid_submit_moves_to_sending() {
        let mut form = filled();
        let msg = form.submit().unwrap().expect("should dispatch");
        assert_eq!(msg.name, "Ada");
        assert_eq!(msg.email, "user@example.com");
        assert_eq!(msg.message, "Hello there");
        assert_eq!(form.status(), SubmitStatus::Sending);
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_second_submit_while_sending_is_noop() {
        let mut form = filled();
        assert!(form.submit().unwrap().is_some());
        let before = form.clone();
        assert_eq!(form.submit(), Ok(None));
        assert_eq!(form, before);
    }

    #[test]
    fn test_success_clears_fields() {
        let mut form = filled();
        form.submit().unwrap();
        form.resolve(Ok(()));
        assert_eq!(form.status(), SubmitStatus::Succeeded);
        assert_eq!(form.name(), "");
        assert_eq!(form.email(), "");
        assert_eq!(form.message(), "");
        assert_eq!(form.error(), None);

        form.set_field(Field::Name, "Grace".to_string());
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut form = filled();
        form.submit().unwrap();
        form.resolve(Err(SubmissionError::Network("connection reset".to_string())));
        assert_eq!(form.status(), SubmitStatus::Failed);
        assert_eq!(form.error(), Some(RETRY_PROMPT));
        assert_eq!(form.name(), "Ada");
        assert_eq!(form.email(), "user@example.com");
        assert_eq!(form.message(), "Hello there");

        // retry goes straight back to sending
        assert!(form.submit().unwrap().is_some());
        assert_eq!(form.status(), SubmitStatus::Sending);
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_timeout_has_its_own_prompt() {
        let mut form = filled();
        form.submit().unwrap();
        form.resolve(Err(SubmissionError::Timeout));
        assert_eq!(form.status(), SubmitStatus::Failed);
        assert_eq!(form.error(), Some(TIMEOUT_PROMPT));
    }

    #[test]
    fn test_stale_outcome_is_ignored() {
        let mut form = filled();
        form.resolve(Ok(()));
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert_eq!(form.name(), "Ada");
    }

    #[test]
    fn test_newsletter_flow() {
        let mut form = NewsletterForm::default();
        assert_eq!(form.submit(), Err(ContactError::MissingField(Field::Email)));
        form.set_email("nope".to_string());
        assert_eq!(form.submit(), Err(ContactError::InvalidEmail));
        form.set_email("reader@example.com".to_string());
        assert_eq!(form.submit(), Ok(Some("reader@example.com".to_string())));
        assert_eq!(form.submit(), Ok(None));
        form.resolve(Err(SubmissionError::Unavailable));
        assert_eq!(form.error(), Some(UNAVAILABLE_PROMPT));
        assert_eq!(form.email(), "reader@example.com");
        assert!(form.submit().unwrap().is_some());
        form.resolve(Ok(()));
        assert!(form.is_subscribed());
        assert_eq!(form.email(), "");
    }

    #[test]
    fn test_submission_error_roundtrips_as_json() {
        let e = SubmissionError::Rejected { status: 422 };
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(serde_json::from_str::<SubmissionError>(&json).unwrap(), e);
    }
}
