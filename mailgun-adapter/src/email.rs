use crate::MailerError;
use serde::{Deserialize, Serialize};

/// One outbound message, as handed to [`MailgunAdapter::send_mail`](crate::MailgunAdapter::send_mail).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailRequest {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: Option<String>,
    /// Overrides the adapter's send mode for this message only.
    pub mime: Option<bool>,
}

impl MailRequest {
    pub fn new<T, S, B>(to: T, subject: S, text: B) -> Self
    where
        T: Into<String>,
        S: Into<String>,
        B: Into<String>,
    {
        Self {
            to: to.into(),
            subject: subject.into(),
            text: text.into(),
            html: None,
            mime: None,
        }
    }

    pub fn builder() -> MailRequestBuilder {
        MailRequestBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct MailRequestBuilder {
    to: Option<String>,
    subject: Option<String>,
    text: Option<String>,
    html: Option<String>,
    mime: Option<bool>,
}

impl MailRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to<S: Into<String>>(mut self, email: S) -> Self {
        self.to = Some(email.into());
        self
    }

    pub fn subject<S: Into<String>>(mut self, subject: S) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn html<S: Into<String>>(mut self, html: S) -> Self {
        self.html = Some(html.into());
        self
    }

    pub fn mime(mut self, mime: bool) -> Self {
        self.mime = Some(mime);
        self
    }

    pub fn build(self) -> Result<MailRequest, MailerError> {
        Ok(MailRequest {
            to: self
                .to
                .ok_or_else(|| MailerError::Builder("Recipient is required".to_string()))?,
            subject: self
                .subject
                .ok_or_else(|| MailerError::Builder("Subject is required".to_string()))?,
            text: self
                .text
                .ok_or_else(|| MailerError::Builder("Text body is required".to_string()))?,
            html: self.html,
            mime: self.mime,
        })
    }
}

/// Anything that knows the address an account email should go to.
pub trait Recipient: Send + Sync {
    fn email(&self) -> &str;
}

impl Recipient for &str {
    fn email(&self) -> &str {
        self
    }
}

impl Recipient for String {
    fn email(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mail_request_builder() {
        let mail = MailRequest::builder()
            .to("recipient@example.com")
            .subject("Test Subject")
            .text("Test content")
            .html("<p>Test content</p>")
            .mime(true)
            .build()
            .unwrap();

        assert_eq!(mail.to, "recipient@example.com");
        assert_eq!(mail.subject, "Test Subject");
        assert_eq!(mail.text, "Test content");
        assert_eq!(mail.html.as_deref(), Some("<p>Test content</p>"));
        assert_eq!(mail.mime, Some(true));
    }

    #[test]
    fn test_builder_requires_recipient() {
        let result = MailRequest::builder().subject("Test").text("Body").build();

        assert!(matches!(result, Err(MailerError::Builder(_))));
    }

    #[test]
    fn test_new_leaves_mode_unset() {
        let mail = MailRequest::new("a@example.com", "Hi", "Body");
        assert_eq!(mail.html, None);
        assert_eq!(mail.mime, None);
    }

    #[test]
    fn test_mode_override_deserializes() {
        let mail: MailRequest = serde_json::from_str(
            r#"{"to": "a@example.com", "subject": "Hi", "text": "Body", "mime": true}"#,
        )
        .unwrap();

        assert_eq!(mail.mime, Some(true));
        assert_eq!(mail.html, None);
    }

    #[test]
    fn test_string_recipients() {
        let owned = String::from("owned@example.com");
        assert_eq!(owned.email(), "owned@example.com");
        assert_eq!("borrowed@example.com".email(), "borrowed@example.com");
    }

    #[test]
    fn test_str_recipient_as_trait_object() {
        let address = "borrowed@example.com";
        let user: &dyn Recipient = &address;
        assert_eq!(user.email(), "borrowed@example.com");
    }
}
