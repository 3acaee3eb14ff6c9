pub mod config;
pub mod emailjs;

pub use config::{ConfigError, ContactConfig};
pub use emailjs::EmailJsSender;

use std::{fmt, future::Future, str::FromStr};

use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! 🚀";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Try again!";

/// The three inputs of the contact form, keyed by their `name` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown contact form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// In-progress contact form values. Serializes as the provider's template parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl SubmissionDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// True when every required field holds a non-empty value.
    pub fn is_complete(&self) -> bool {
        Field::ALL.iter().all(|f| !self.get(*f).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Succeeded(String),
    Failed(String),
}

impl SubmissionStatus {
    /// Message shown under the form, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Succeeded(s) | Self::Failed(s) => Some(s),
            Self::Idle | Self::Sending => None,
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }
}

/// Provider acknowledgment of a delivered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Error, Debug)]
pub enum SendError {
    #[error("could not reach the delivery provider: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("delivery provider rejected the message ({status}): {body}")]
    Rejected { status: StatusCode, body: String },
    #[error("contact form is not configured")]
    Unconfigured,
}

/// Capability to hand a draft to an external delivery provider.
pub trait MessageSender {
    fn send(&self, draft: &SubmissionDraft) -> impl Future<Output = Result<Ack, SendError>>;
}

/// Contact form state: the draft being edited and the sticky status of the
/// last submission attempt.
///
/// A submission is split in two steps so a UI can run the provider call as a
/// detached task: [`ContactSubmission::begin`] moves to `Sending` and hands
/// out the payload, [`ContactSubmission::resolve`] applies the outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    draft: SubmissionDraft,
    status: SubmissionStatus,
}

impl ContactSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &SubmissionDraft {
        &self.draft
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status.is_sending()
    }

    pub fn update_field(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
    }

    /// Enter `Sending` and return the payload to transmit.
    ///
    /// Returns `None` without changing state when a request is already in
    /// flight or a required field is empty.
    pub fn begin(&mut self) -> Option<SubmissionDraft> {
        if self.is_sending() || !self.draft.is_complete() {
            return None;
        }
        self.status = SubmissionStatus::Sending;
        Some(self.draft.clone())
    }

    /// Apply the provider outcome of the in-flight submission.
    pub fn resolve(&mut self, outcome: Result<Ack, SendError>) {
        if !self.is_sending() {
            log::warn!("ignoring contact submission outcome with no request in flight");
            return;
        }
        match outcome {
            Ok(ack) => {
                log::debug!("contact message delivered ({})", ack.status);
                self.status = SubmissionStatus::Succeeded(SUCCESS_MESSAGE.to_string());
                self.draft.clear();
            }
            Err(err) => {
                log::error!("contact message delivery failed: {err}");
                self.status = SubmissionStatus::Failed(FAILURE_MESSAGE.to_string());
            }
        }
    }

    /// Run a whole submission against `sender`. Does nothing when
    /// [`ContactSubmission::begin`] refuses to start.
    pub async fn submit<S: MessageSender>(&mut self, sender: &S) {
        let Some(draft) = self.begin() else {
            return;
        };
        let outcome = sender.send(&draft).await;
        self.resolve(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct FakeSender {
        fail: bool,
        calls: Cell<usize>,
        seen: RefCell<Vec<SubmissionDraft>>,
    }

    impl FakeSender {
        fn succeeding() -> Self {
            Self {
                fail: false,
                calls: Cell::new(0),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::succeeding()
            }
        }
    }

    impl MessageSender for FakeSender {
        async fn send(&self, draft: &SubmissionDraft) -> Result<Ack, SendError> {
            self.calls.set(self.calls.get() + 1);
            self.seen.borrow_mut().push(draft.clone());
            if self.fail {
                Err(SendError::Rejected {
                    status: StatusCode::BAD_REQUEST,
                    body: "The template ID is invalid".to_string(),
                })
            } else {
                Ok(Ack {
                    status: StatusCode::OK,
                    body: "OK".to_string(),
                })
            }
        }
    }

    fn ada() -> ContactSubmission {
        let mut form = ContactSubmission::new();
        form.update_field(Field::Name, "Ada".to_string());
        form.update_field(Field::Email, "ada@example.com".to_string());
        form.update_field(Field::Message, "Hello".to_string());
        form
    }

    fn ada_draft() -> SubmissionDraft {
        SubmissionDraft {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_field_names() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
        assert_eq!(
            "phone".parse::<Field>(),
            Err(UnknownField("phone".to_string()))
        );
    }

    #[test]
    fn test_last_write_wins_per_field() {
        let edits = [
            (Field::Name, "A"),
            (Field::Email, "a@"),
            (Field::Name, "Ad"),
            (Field::Message, "Hi"),
            (Field::Name, "Ada"),
            (Field::Message, ""),
            (Field::Message, "Hello"),
        ];
        let mut form = ContactSubmission::new();
        for (field, value) in edits {
            form.update_field(field, value.to_string());
        }
        for field in Field::ALL {
            let last = edits
                .iter()
                .rev()
                .find(|(f, _)| *f == field)
                .map(|(_, v)| *v)
                .unwrap();
            assert_eq!(form.draft().get(field), last);
        }
        assert_eq!(form.draft().email, "a@");
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_begin_requires_every_field() {
        for missing in Field::ALL {
            let mut form = ada();
            form.update_field(missing, String::new());
            assert_eq!(form.begin(), None, "{missing} left empty");
            assert_eq!(form.status(), &SubmissionStatus::Idle);
        }

        let mut form = ada();
        assert_eq!(form.begin(), Some(ada_draft()));
        assert!(form.is_sending());
    }

    #[test]
    fn test_begin_refuses_while_in_flight() {
        let mut form = ada();
        assert!(form.begin().is_some());
        assert!(form.begin().is_none());
        assert!(form.is_sending());
    }

    #[test]
    fn test_resolve_without_request_is_ignored() {
        let mut form = ada();
        form.resolve(Err(SendError::Unconfigured));
        assert_eq!(form.status(), &SubmissionStatus::Idle);
        assert_eq!(form.draft(), &ada_draft());
    }

    #[tokio::test]
    async fn test_submit_success_resets_draft() {
        let sender = FakeSender::succeeding();
        let mut form = ada();
        form.submit(&sender).await;

        assert_eq!(sender.seen.borrow().as_slice(), &[ada_draft()]);
        assert_eq!(form.draft(), &SubmissionDraft::default());
        assert_eq!(
            form.status(),
            &SubmissionStatus::Succeeded("Message sent successfully! 🚀".to_string())
        );
        assert_eq!(form.status().message(), Some(SUCCESS_MESSAGE));
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_draft() {
        let sender = FakeSender::failing();
        let mut form = ada();
        form.submit(&sender).await;

        assert_eq!(sender.calls.get(), 1);
        assert_eq!(form.draft(), &ada_draft());
        assert_eq!(
            form.status(),
            &SubmissionStatus::Failed("Something went wrong. Try again!".to_string())
        );
    }

    #[tokio::test]
    async fn test_submit_incomplete_draft_never_sends() {
        let sender = FakeSender::succeeding();
        let mut form = ContactSubmission::new();
        form.update_field(Field::Name, "Ada".to_string());
        form.submit(&sender).await;

        assert_eq!(sender.calls.get(), 0);
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn test_statuses_are_sticky_until_next_submit() {
        let failing = FakeSender::failing();
        let succeeding = FakeSender::succeeding();
        let mut form = ada();

        form.submit(&failing).await;
        assert!(matches!(form.status(), SubmissionStatus::Failed(_)));

        // editing does not clear the failure message
        form.update_field(Field::Message, "Hello again".to_string());
        assert!(matches!(form.status(), SubmissionStatus::Failed(_)));

        form.submit(&succeeding).await;
        assert!(matches!(form.status(), SubmissionStatus::Succeeded(_)));
        assert_eq!(succeeding.seen.borrow()[0].message, "Hello again");

        // empty draft after success: the success message stays
        form.submit(&succeeding).await;
        assert_eq!(succeeding.calls.get(), 1);
        assert!(matches!(form.status(), SubmissionStatus::Succeeded(_)));
    }

    #[tokio::test]
    async fn test_never_left_sending() {
        for sender in [FakeSender::succeeding(), FakeSender::failing()] {
            let mut form = ada();
            form.submit(&sender).await;
            assert!(!form.is_sending());
            assert!(form.status().message().is_some());
        }
    }

    #[test]
    fn test_draft_serializes_as_template_params() {
        let value = serde_json::to_value(ada_draft()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hello",
            })
        );
    }
}
