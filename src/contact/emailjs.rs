use http::StatusCode;
use serde::Serialize;

use super::{Ack, ContactConfig, MessageSender, SendError, SubmissionDraft};

/// JSON body of the EmailJS `email/send` endpoint.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a SubmissionDraft,
}

/// Delivers drafts through the EmailJS REST API.
///
/// Works from the browser as well as natively; reqwest uses `fetch` on wasm32.
#[derive(Debug, Clone)]
pub struct EmailJsSender {
    client: reqwest::Client,
    config: ContactConfig,
}

impl EmailJsSender {
    pub fn new(config: ContactConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ContactConfig {
        &self.config
    }

    fn request<'a>(&'a self, draft: &'a SubmissionDraft) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: draft,
        }
    }
}

fn acknowledge(status: StatusCode, body: String) -> Result<Ack, SendError> {
    if status.is_success() {
        Ok(Ack { status, body })
    } else {
        Err(SendError::Rejected { status, body })
    }
}

impl MessageSender for EmailJsSender {
    async fn send(&self, draft: &SubmissionDraft) -> Result<Ack, SendError> {
        let response = self
            .client
            .post(&self.config.api_url)
            .json(&self.request(draft))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        acknowledge(status, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::config::DEFAULT_API_URL;

    fn sender() -> EmailJsSender {
        EmailJsSender::new(ContactConfig {
            service_id: "service_abc".to_string(),
            template_id: "template_xyz".to_string(),
            public_key: "pk-123".to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        })
    }

    #[test]
    fn test_request_body() {
        let sender = sender();
        let draft = SubmissionDraft {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        };
        let body = serde_json::to_value(sender.request(&draft)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "pk-123",
                "template_params": {
                    "name": "Ada",
                    "email": "ada@example.com",
                    "message": "Hello",
                },
            })
        );
    }

    #[test]
    fn test_acknowledge() {
        let ack = acknowledge(StatusCode::OK, "OK".to_string()).unwrap();
        assert_eq!(ack.body, "OK");

        match acknowledge(StatusCode::BAD_REQUEST, "The Public Key is invalid".to_string()) {
            Err(SendError::Rejected { status, body }) => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(body, "The Public Key is invalid");
            }
            other => panic!("expected rejection, got {other:?}"),
        }

        assert!(matches!(
            acknowledge(StatusCode::TOO_MANY_REQUESTS, String::new()),
            Err(SendError::Rejected { .. })
        ));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_transport_error() {
        let mut config = sender().config().clone();
        config.api_url = "http://127.0.0.1:9/api/v1.0/email/send".to_string();
        let sender = EmailJsSender::new(config);

        let res = sender.send(&SubmissionDraft::default()).await;
        assert!(matches!(res, Err(SendError::Transport(_))));
    }
}
