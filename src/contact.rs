mod validation;

pub use validation::{is_valid_email, validate, validate_field, FieldError, ValidationErrors};

use std::{fmt, str::FromStr, time::Duration};

use serde::Serialize;
use thiserror::Error;

/// Simulated network latency between a valid submit and the success toast.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

pub const SUCCESS_TITLE: &str = "Message sent!";
pub const SUCCESS_DESCRIPTION: &str = "Thank you for contacting me. I'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    /// Maximum length of the trimmed value, in characters.
    pub fn max_len(self) -> usize {
        match self {
            Self::Name => 100,
            Self::Email => 255,
            Self::Subject => 200,
            Self::Message => 1000,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|f| self.get(f).is_empty())
    }
}

/// Trimmed copy of a form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn message_sent() -> Self {
        Self::new(SUCCESS_TITLE, SUCCESS_DESCRIPTION)
    }
}

/// Identifies one in-flight submission. Completing with anything but the
/// current ticket does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Started(SubmissionTicket),
    Invalid,
    AlreadySubmitting,
}

/// Contact form state machine.
///
/// `Idle --submit(valid)--> Submitting --complete--> Idle`, and
/// `Idle --submit(invalid)--> Idle` with errors set. The view reads through the
/// accessors and mutates only via `edit`, `submit`, `complete` and `cancel`.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    state: FormState,
    errors: ValidationErrors,
    pending: Option<SubmissionTicket>,
    next_ticket: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormState {
        &self.state
    }

    pub fn value(&self, field: Field) -> &str {
        self.state.get(field)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<String> {
        self.errors.message(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        *self.state.get_mut(field) = value.into();
        if self.errors.clear(field) {
            log::debug!("cleared {field} error on edit");
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if let Some(ticket) = self.pending {
            log::debug!("submit ignored, {ticket:?} still pending");
            return SubmitOutcome::AlreadySubmitting;
        }
        match validate(&self.state) {
            Err(errors) => {
                log::debug!("contact form rejected with {} error(s)", errors.len());
                self.errors = errors;
                SubmitOutcome::Invalid
            }
            Ok(message) => {
                self.errors = ValidationErrors::default();
                let ticket = SubmissionTicket(self.next_ticket);
                self.next_ticket += 1;
                self.pending = Some(ticket);
                if let Ok(body) = serde_json::to_string(&message) {
                    log::debug!("simulating contact submission: {body}");
                }
                SubmitOutcome::Started(ticket)
            }
        }
    }

    /// Finishes the pending submission, resetting the form.
    pub fn complete(&mut self, ticket: SubmissionTicket) -> Option<Notification> {
        if self.pending != Some(ticket) {
            log::debug!("stale completion for {ticket:?}");
            return None;
        }
        self.pending = None;
        self.state = FormState::default();
        log::info!("contact message sent");
        Some(Notification::message_sent())
    }

    /// Abandons the pending submission without notifying. The form keeps its
    /// contents. Returns true if something was pending.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.pending.take().is_some();
        if was_pending {
            log::debug!("contact submission cancelled");
        }
        was_pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(Field::Name, "Jane Doe");
        form.edit(Field::Email, "a@b.com");
        form.edit(Field::Subject, "Project Inquiry");
        form.edit(Field::Message, "Tell me about your project...");
        form
    }

    fn started(outcome: SubmitOutcome) -> SubmissionTicket {
        match outcome {
            SubmitOutcome::Started(ticket) => ticket,
            other => panic!("expected submission to start, got {other:?}"),
        }
    }

    #[test]
    fn test_field_keys() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
        assert_eq!(
            "phone".parse::<Field>(),
            Err(UnknownField("phone".to_string()))
        );
    }

    #[test]
    fn test_submitted_body_uses_field_keys() {
        let mut form = valid_form();
        form.edit(Field::Name, "  Jane Doe  ");
        let message = validate(form.form()).expect("form should be valid");
        let body = serde_json::to_value(&message).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Jane Doe",
                "email": "a@b.com",
                "subject": "Project Inquiry",
                "message": "Tell me about your project...",
            })
        );
    }

    #[test]
    fn test_empty_field_blocks_submit() {
        for field in Field::ALL {
            let mut form = valid_form();
            form.edit(field, "  ");
            assert_eq!(form.submit(), SubmitOutcome::Invalid);
            assert!(!form.is_submitting());
            assert_eq!(form.errors().len(), 1);
            assert!(form.error(field).is_some_and(|e| !e.is_empty()));
        }
    }

    #[test]
    fn test_email_errors() {
        let mut form = valid_form();
        form.edit(Field::Email, "not-an-email");
        assert_eq!(form.submit(), SubmitOutcome::Invalid);
        assert_eq!(
            form.error(Field::Email).as_deref(),
            Some("Invalid email address")
        );

        form.edit(Field::Email, "a@b.com");
        assert!(form.error(Field::Email).is_none());
        started(form.submit());
    }

    #[test]
    fn test_edit_clears_only_that_field() {
        let mut form = ContactForm::new();
        assert_eq!(form.submit(), SubmitOutcome::Invalid);
        assert_eq!(form.errors().len(), 4);

        form.edit(Field::Subject, "x");
        assert!(form.error(Field::Subject).is_none());
        assert_eq!(form.errors().len(), 3);

        // no re-validation on keystroke, even for a still-invalid value
        form.edit(Field::Email, "still bad");
        assert!(form.error(Field::Email).is_none());
        assert!(form.error(Field::Name).is_some());
        assert!(form.error(Field::Message).is_some());
    }

    #[test]
    fn test_errors_replaced_on_submit() {
        let mut form = ContactForm::new();
        form.submit();
        form.edit(Field::Name, "Jane");
        form.edit(Field::Email, "a@b.com");
        form.edit(Field::Subject, "Hi");
        form.edit(Field::Name, "");
        assert_eq!(form.submit(), SubmitOutcome::Invalid);
        let fields = form.errors().iter().map(|(f, _)| f).collect::<Vec<_>>();
        assert_eq!(fields, vec![Field::Name, Field::Message]);
    }

    #[test]
    fn test_repeat_submit_same_errors() {
        let mut form = valid_form();
        form.edit(Field::Name, "n".repeat(101));
        form.submit();
        let first = form.errors().clone();
        form.submit();
        assert_eq!(&first, form.errors());
    }

    #[test]
    fn test_successful_submission() {
        let mut form = valid_form();
        let ticket = started(form.submit());
        assert!(form.is_submitting());
        assert!(form.errors().is_empty());

        let note = form.complete(ticket);
        assert_eq!(note, Some(Notification::message_sent()));
        assert!(!form.is_submitting());
        assert!(form.form().is_empty());

        // only one notification per submission
        assert_eq!(form.complete(ticket), None);
    }

    #[test]
    fn test_submit_while_submitting_rejected() {
        let mut form = valid_form();
        let ticket = started(form.submit());
        form.edit(Field::Email, "not-an-email");
        assert_eq!(form.submit(), SubmitOutcome::AlreadySubmitting);
        assert!(form.errors().is_empty());
        assert!(form.complete(ticket).is_some());
    }

    #[test]
    fn test_cancel_orphans_completion() {
        let mut form = valid_form();
        let ticket = started(form.submit());
        assert!(form.cancel());
        assert!(!form.is_submitting());
        assert_eq!(form.complete(ticket), None);
        assert_eq!(form.value(Field::Name), "Jane Doe");
        assert!(!form.cancel());

        // a new submission gets a fresh ticket the old one can't complete
        let next = started(form.submit());
        assert_ne!(ticket, next);
        assert_eq!(form.complete(ticket), None);
        assert!(form.complete(next).is_some());
    }
}
