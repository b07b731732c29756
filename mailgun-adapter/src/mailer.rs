use crate::{MailRequest, MailerError, MailgunAdapter, ProviderResponse};
use async_trait::async_trait;

/// The uniform "send an email" contract.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_mail(&self, mail: MailRequest) -> Result<ProviderResponse, MailerError>;
}

#[async_trait]
impl Mailer for MailgunAdapter {
    async fn send_mail(&self, mail: MailRequest) -> Result<ProviderResponse, MailerError> {
        MailgunAdapter::send_mail(self, mail).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MailgunApi, MessageForm, MimeForm, error::ProviderError};
    use serde_json::json;
    use std::sync::Arc;

    struct EchoApi;

    #[async_trait]
    impl MailgunApi for EchoApi {
        async fn send_message(&self, form: MessageForm) -> Result<ProviderResponse, ProviderError> {
            Ok(ProviderResponse::new(json!({"id": form.subject})))
        }

        async fn send_mime(&self, form: MimeForm) -> Result<ProviderResponse, ProviderError> {
            Ok(ProviderResponse::new(json!({"id": form.to})))
        }
    }

    #[tokio::test]
    async fn test_adapter_as_trait_object() {
        let adapter = MailgunAdapter::builder()
            .from_address("noreply@example.com")
            .client(EchoApi)
            .build()
            .unwrap();
        let mailer: Arc<dyn Mailer> = Arc::new(adapter);

        let response = mailer
            .send_mail(MailRequest::new("test@example.com", "hello", "body"))
            .await
            .unwrap();

        assert_eq!(response.id(), Some("hello"));
    }
}
