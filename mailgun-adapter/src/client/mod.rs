mod http;

pub use http::{DEFAULT_BASE_URL, MailgunClient};

use crate::error::ProviderError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Form fields for `POST /v3/{domain}/messages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageForm {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

/// Form fields for `POST /v3/{domain}/messages.mime`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeForm {
    pub to: String,
    pub message: String,
}

/// Body returned by Mailgun once a message is accepted.
///
/// The adapter never inspects it beyond logging; callers get the exact JSON
/// the provider sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderResponse(serde_json::Value);

impl ProviderResponse {
    pub fn new(body: serde_json::Value) -> Self {
        Self(body)
    }

    /// Queue identifier, e.g. `<20240101.1@example.com>`.
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(|v| v.as_str())
    }

    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(|v| v.as_str())
    }

    pub fn body(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for ProviderResponse {
    fn from(body: serde_json::Value) -> Self {
        Self(body)
    }
}

/// The two Mailgun endpoints the adapter talks to.
///
/// [`MailgunClient`] is the HTTP implementation; anything else (a mock, a
/// proxy) can be injected into the adapter instead.
#[async_trait]
pub trait MailgunApi: Send + Sync {
    async fn send_message(&self, form: MessageForm) -> Result<ProviderResponse, ProviderError>;

    async fn send_mime(&self, form: MimeForm) -> Result<ProviderResponse, ProviderError>;
}
