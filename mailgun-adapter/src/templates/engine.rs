use crate::{MailerError, templates::TemplateContext};
use std::fmt;
use std::sync::Arc;

/// Renders one body (text or html) of an account email.
///
/// Closures taking a [`TemplateContext`] and returning a `String` are templates too.
pub trait EmailTemplate: Send + Sync {
    fn render(&self, context: &TemplateContext) -> Result<String, MailerError>;
}

impl<F> EmailTemplate for F
where
    F: Fn(&TemplateContext) -> String + Send + Sync,
{
    fn render(&self, context: &TemplateContext) -> Result<String, MailerError> {
        Ok(self(context))
    }
}

/// Text and html templates for one templated flow.
///
/// Both halves must be present before the adapter accepts the pair.
#[derive(Clone, Default)]
pub struct TemplatePair {
    text: Option<Arc<dyn EmailTemplate>>,
    html: Option<Arc<dyn EmailTemplate>>,
}

impl TemplatePair {
    pub fn new<T, H>(text: T, html: H) -> Self
    where
        T: EmailTemplate + 'static,
        H: EmailTemplate + 'static,
    {
        Self::default().text(text).html(html)
    }

    pub fn text<T: EmailTemplate + 'static>(mut self, template: T) -> Self {
        self.text = Some(Arc::new(template));
        self
    }

    pub fn html<H: EmailTemplate + 'static>(mut self, template: H) -> Self {
        self.html = Some(Arc::new(template));
        self
    }

    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }

    pub fn has_html(&self) -> bool {
        self.html.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.has_text() && self.has_html()
    }

    pub(crate) fn resolve(&self) -> Option<ResolvedTemplates> {
        Some(ResolvedTemplates {
            text: self.text.clone()?,
            html: self.html.clone()?,
        })
    }
}

impl fmt::Debug for TemplatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplatePair")
            .field("text", &self.has_text())
            .field("html", &self.has_html())
            .finish()
    }
}

/// A validated pair; only the adapter builds these.
#[derive(Clone)]
pub(crate) struct ResolvedTemplates {
    pub(crate) text: Arc<dyn EmailTemplate>,
    pub(crate) html: Arc<dyn EmailTemplate>,
}

impl ResolvedTemplates {
    pub(crate) fn pair(&self) -> TemplatePair {
        TemplatePair {
            text: Some(self.text.clone()),
            html: Some(self.html.clone()),
        }
    }
}
