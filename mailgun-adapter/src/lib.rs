//! Send email through the [Mailgun](https://www.mailgun.com) HTTP API.
//!
//! [`MailgunAdapter`] posts messages either as plain form fields
//! (`/v3/{domain}/messages`) or as a MIME document composed locally with
//! `lettre` (`/v3/{domain}/messages.mime`). Optional password-reset and
//! verification flows render their bodies from [`EmailTemplate`]s and go
//! through the same send path.
//!
//! ```no_run
//! # async fn run() -> Result<(), mailgun_adapter::MailerError> {
//! use mailgun_adapter::prelude::*;
//!
//! let adapter = MailgunAdapter::builder()
//!     .from_address("noreply@example.com")
//!     .api_key("key-xxxxxxxx")
//!     .domain("mg.example.com")
//!     .build()?;
//!
//! let response = adapter
//!     .send_mail(MailRequest::new("user@example.com", "Hello", "Hi there!"))
//!     .await?;
//! println!("queued as {:?}", response.id());
//! # Ok(())
//! # }
//! ```
pub mod adapter;
pub mod client;
pub mod config;
pub mod email;
pub mod email_types;
pub mod error;
pub mod mailer;
pub mod mime;
pub mod templates;

pub use adapter::{AdapterOptions, MailgunAdapter};
pub use client::{MailgunApi, MailgunClient, MessageForm, MimeForm, ProviderResponse};
pub use config::MailgunConfig;
pub use email::{MailRequest, MailRequestBuilder, Recipient};
pub use email_types::AccountEmailOptions;
pub use error::{ComposeError, MailerError, ProviderError};
pub use mailer::Mailer;
pub use templates::{BuiltinTemplate, EmailTemplate, TemplateContext, TemplatePair};

pub mod prelude {
    pub use crate::{
        AccountEmailOptions, AdapterOptions, EmailTemplate, MailRequest, Mailer, MailerError,
        MailgunAdapter, MailgunApi, MailgunClient, MailgunConfig, ProviderResponse, Recipient,
        TemplateContext, TemplatePair,
    };
}
