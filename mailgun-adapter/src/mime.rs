use crate::error::ComposeError;
use lettre::Message;
use lettre::message::{
    Mailbox, Mailboxes, MultiPart,
    header::{ContentType, To},
};

/// Input for building a raw MIME document.
#[derive(Debug, Clone, Copy)]
pub struct Composition<'a> {
    pub from: &'a str,
    /// One address or a comma-separated list.
    pub to: &'a str,
    pub subject: &'a str,
    pub body: &'a str,
    pub html: Option<&'a str>,
}

impl Composition<'_> {
    /// Build the RFC 2822 message and return it as ASCII text.
    ///
    /// A text-only request produces a single `text/plain` part; with html the
    /// message is `multipart/alternative` with the plain part first.
    pub fn build(&self) -> Result<String, ComposeError> {
        let message = build_message(self)?;
        let bytes = message.formatted();

        if !bytes.is_ascii() {
            return Err(ComposeError::NonAscii);
        }

        String::from_utf8(bytes).map_err(|_| ComposeError::NonAscii)
    }
}

fn build_message(composition: &Composition<'_>) -> Result<Message, ComposeError> {
    let builder = Message::builder()
        .from(composition.from.parse::<Mailbox>()?)
        .mailbox(To::from(composition.to.parse::<Mailboxes>()?))
        .subject(composition.subject);

    let message = match composition.html {
        Some(html) => builder.multipart(MultiPart::alternative_plain_html(
            composition.body.to_string(),
            html.to_string(),
        ))?,
        None => builder
            .header(ContentType::TEXT_PLAIN)
            .body(composition.body.to_string())?,
    };

    Ok(message)
}
