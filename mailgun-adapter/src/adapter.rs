use crate::{
    MailRequest, MailerError,
    client::{DEFAULT_BASE_URL, MailgunApi, MailgunClient, MessageForm, MimeForm, ProviderResponse},
    email_types::{AccountEmailOptions, PasswordResetEmail, VerificationEmail},
    mime::Composition,
    templates::{ResolvedTemplates, TemplatePair},
};
use lettre::Address;
use lettre::message::Mailbox;
use std::fmt;
use std::sync::Arc;

/// Construction options for [`MailgunAdapter`].
///
/// Either inject a client with [`client`](Self::client) or provide both
/// [`api_key`](Self::api_key) and [`domain`](Self::domain). When a client is
/// injected the credentials are ignored.
#[derive(Default)]
pub struct AdapterOptions {
    from_address: Option<String>,
    from_name: Option<String>,
    api_key: Option<String>,
    domain: Option<String>,
    base_url: Option<String>,
    mime: bool,
    client: Option<Arc<dyn MailgunApi>>,
    send_password_reset_email: bool,
    password_reset_templates: Option<TemplatePair>,
    send_verification_email: bool,
    verification_templates: Option<TemplatePair>,
}

impl AdapterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_address<S: Into<String>>(mut self, from_address: S) -> Self {
        self.from_address = Some(from_address.into());
        self
    }

    /// Display name used in the `From` header, as in `Name <address>`.
    pub fn from_name<S: Into<String>>(mut self, from_name: S) -> Self {
        self.from_name = Some(from_name.into());
        self
    }

    pub fn api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn domain<S: Into<String>>(mut self, domain: S) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Defaults to [`DEFAULT_BASE_URL`].
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Send MIME documents by default instead of plain form posts.
    pub fn mime(mut self, mime: bool) -> Self {
        self.mime = mime;
        self
    }

    pub fn client<C: MailgunApi + 'static>(self, client: C) -> Self {
        self.shared_client(Arc::new(client))
    }

    pub fn shared_client(mut self, client: Arc<dyn MailgunApi>) -> Self {
        self.client = Some(client);
        self
    }

    pub fn send_password_reset_email(mut self, enabled: bool) -> Self {
        self.send_password_reset_email = enabled;
        self
    }

    pub fn password_reset_templates(mut self, templates: TemplatePair) -> Self {
        self.password_reset_templates = Some(templates);
        self
    }

    pub fn send_verification_email(mut self, enabled: bool) -> Self {
        self.send_verification_email = enabled;
        self
    }

    pub fn verification_templates(mut self, templates: TemplatePair) -> Self {
        self.verification_templates = Some(templates);
        self
    }

    pub fn build(self) -> Result<MailgunAdapter, MailerError> {
        MailgunAdapter::new(self)
    }
}

/// Sends mail through Mailgun, either as a plain form post or as a
/// prebuilt MIME document.
///
/// The adapter holds no mutable state; clone it or share it behind an `Arc`
/// to send from many tasks at once.
#[derive(Clone)]
pub struct MailgunAdapter {
    client: Arc<dyn MailgunApi>,
    from_address: String,
    sender: String,
    mime: bool,
    password_reset: Option<ResolvedTemplates>,
    verification: Option<ResolvedTemplates>,
}

impl MailgunAdapter {
    pub fn builder() -> AdapterOptions {
        AdapterOptions::default()
    }

    pub fn new(options: AdapterOptions) -> Result<Self, MailerError> {
        let from_address = match options.from_address {
            Some(address) if !address.is_empty() => address,
            _ => return Err(MailerError::Config("fromAddress required".to_string())),
        };

        let client: Arc<dyn MailgunApi> = match options.client {
            Some(client) => client,
            None => {
                let api_key = non_empty(options.api_key);
                let domain = non_empty(options.domain);
                let (Some(api_key), Some(domain)) = (api_key, domain) else {
                    return Err(MailerError::Config(
                        "API key and domain required".to_string(),
                    ));
                };
                let base_url = options
                    .base_url
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

                Arc::new(MailgunClient::with_base_url(api_key, domain, base_url))
            }
        };

        let password_reset = resolve_feature(
            options.send_password_reset_email,
            options.password_reset_templates.as_ref(),
            "password reset templates for text and html required",
        )?;
        let verification = resolve_feature(
            options.send_verification_email,
            options.verification_templates.as_ref(),
            "verification templates for text and html required",
        )?;

        let sender = format_sender(&from_address, options.from_name.as_deref())?;

        Ok(Self {
            client,
            from_address,
            sender,
            mime: options.mime,
            password_reset,
            verification,
        })
    }

    /// The address emails are sent from.
    pub fn from_address(&self) -> &str {
        &self.from_address
    }

    /// The full `From` value, including the display name when one is set.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Default send mode; `true` means MIME documents.
    pub fn mime(&self) -> bool {
        self.mime
    }

    pub fn password_reset_templates(&self) -> Option<TemplatePair> {
        self.password_reset.as_ref().map(ResolvedTemplates::pair)
    }

    pub fn verification_templates(&self) -> Option<TemplatePair> {
        self.verification.as_ref().map(ResolvedTemplates::pair)
    }

    /// Send one message. A per-message `mime` setting takes precedence over
    /// the adapter default.
    pub async fn send_mail(&self, mail: MailRequest) -> Result<ProviderResponse, MailerError> {
        let mime = mail.mime.unwrap_or(self.mime);
        tracing::debug!(to = %mail.to, mime, "Sending mail through Mailgun");

        let result = if mime {
            self.send_mime(mail).await
        } else {
            self.send_plain(mail).await
        };

        match &result {
            Ok(response) => tracing::debug!(id = ?response.id(), "Mailgun accepted message"),
            Err(err) => tracing::warn!(error = %err, "Failed to send mail through Mailgun"),
        }

        result
    }

    async fn send_plain(&self, mail: MailRequest) -> Result<ProviderResponse, MailerError> {
        let form = MessageForm {
            from: self.sender.clone(),
            to: mail.to,
            subject: mail.subject,
            text: mail.text,
        };

        Ok(self.client.send_message(form).await?)
    }

    async fn send_mime(&self, mail: MailRequest) -> Result<ProviderResponse, MailerError> {
        let message = Composition {
            from: &self.sender,
            to: &mail.to,
            subject: &mail.subject,
            body: &mail.text,
            html: mail.html.as_deref(),
        }
        .build()?;

        let form = MimeForm {
            to: mail.to,
            message,
        };

        Ok(self.client.send_mime(form).await?)
    }

    pub async fn send_password_reset_email(
        &self,
        options: &AccountEmailOptions<'_>,
    ) -> Result<ProviderResponse, MailerError> {
        let templates = self
            .password_reset
            .as_ref()
            .ok_or(MailerError::Unsupported("Password reset"))?;
        let mail = PasswordResetEmail::build(templates, &self.from_address, self.mime, options)?;

        self.send_mail(mail).await
    }

    pub async fn send_verification_email(
        &self,
        options: &AccountEmailOptions<'_>,
    ) -> Result<ProviderResponse, MailerError> {
        let templates = self
            .verification
            .as_ref()
            .ok_or(MailerError::Unsupported("Verification"))?;
        let mail = VerificationEmail::build(templates, &self.from_address, self.mime, options)?;

        self.send_mail(mail).await
    }
}

impl fmt::Debug for MailgunAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailgunAdapter")
            .field("from_address", &self.from_address)
            .field("sender", &self.sender)
            .field("mime", &self.mime)
            .field("password_reset", &self.password_reset.is_some())
            .field("verification", &self.verification.is_some())
            .finish_non_exhaustive()
    }
}

/// The `From` value for both send paths. A display name is quoted as needed,
/// so `Acme, Inc.` cannot be read as two addresses.
fn format_sender(from_address: &str, from_name: Option<&str>) -> Result<String, MailerError> {
    let Some(name) = from_name.map(str::trim).filter(|name| !name.is_empty()) else {
        return Ok(from_address.to_string());
    };

    let address = from_address
        .parse::<Address>()
        .map_err(|err| MailerError::Config(format!("invalid fromAddress: {err}")))?;

    Ok(Mailbox::new(Some(name.to_string()), address).to_string())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn resolve_feature(
    enabled: bool,
    templates: Option<&TemplatePair>,
    message: &str,
) -> Result<Option<ResolvedTemplates>, MailerError> {
    if !enabled {
        return Ok(None);
    }

    templates
        .and_then(TemplatePair::resolve)
        .map(Some)
        .ok_or_else(|| MailerError::Config(message.to_string()))
}
