use super::{MailgunApi, MessageForm, MimeForm, ProviderResponse};
use crate::error::ProviderError;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://api.mailgun.net";

/// Mailgun HTTP client authenticated with `api:{api_key}` basic auth.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct MailgunClient {
    http: reqwest::Client,
    api_key: String,
    domain: String,
    base_url: String,
}

impl MailgunClient {
    pub fn new<K: Into<String>, D: Into<String>>(api_key: K, domain: D) -> Self {
        Self::with_base_url(api_key, domain, DEFAULT_BASE_URL)
    }

    /// Point the client at another API host, such as `https://api.eu.mailgun.net`.
    pub fn with_base_url<K, D, U>(api_key: K, domain: D, base_url: U) -> Self
    where
        K: Into<String>,
        D: Into<String>,
        U: Into<String>,
    {
        let base_url: String = base_url.into();

        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            domain: domain.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, resource: &str) -> String {
        format!("{}/v3/{}/{}", self.base_url, self.domain, resource)
    }

    async fn into_response(response: reqwest::Response) -> Result<ProviderResponse, ProviderError> {
        let status = response.status();

        if status.is_success() {
            let body = response.json::<serde_json::Value>().await?;
            return Ok(ProviderResponse::new(body));
        }

        let body = response.text().await?;
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
            .unwrap_or(body);

        Err(ProviderError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

impl fmt::Debug for MailgunClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailgunClient")
            .field("api_key", &"<redacted>")
            .field("domain", &self.domain)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl MailgunApi for MailgunClient {
    async fn send_message(&self, form: MessageForm) -> Result<ProviderResponse, ProviderError> {
        let response = self
            .http
            .post(self.endpoint("messages"))
            .basic_auth("api", Some(&self.api_key))
            .form(&form)
            .send()
            .await?;

        Self::into_response(response).await
    }

    async fn send_mime(&self, form: MimeForm) -> Result<ProviderResponse, ProviderError> {
        // Mailgun expects the document as a file upload named "message"
        let message = Part::text(form.message)
            .file_name("message.mime")
            .mime_str("message/rfc822")?;
        let multipart = Form::new().text("to", form.to).part("message", message);

        let response = self
            .http
            .post(self.endpoint("messages.mime"))
            .basic_auth("api", Some(&self.api_key))
            .multipart(multipart)
            .send()
            .await?;

        Self::into_response(response).await
    }
}
