use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum MailerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Email builder error: {0}")]
    Builder(String),

    #[error("MIME composition error: {0}")]
    Composition(#[from] ComposeError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("{0} emails are not enabled on this adapter")]
    Unsupported(&'static str),
}

/// Failure while building the raw MIME document.
#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("Email address error: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Email message error: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("Composed message is not ASCII")]
    NonAscii,
}

/// Errors surfaced by a [`MailgunApi`](crate::MailgunApi) implementation.
///
/// The adapter forwards these untouched inside [`MailerError::Provider`].
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Mailgun API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error(transparent)]
    Other(BoxError),
}

pub type Result<T> = std::result::Result<T, MailerError>;
