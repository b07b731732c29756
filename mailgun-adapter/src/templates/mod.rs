mod auth_templates;
mod engine;

pub use auth_templates::{
    BuiltinTemplate, PasswordResetHtml, PasswordResetText, VerificationHtml, VerificationText,
};
pub use engine::{EmailTemplate, TemplatePair};
pub(crate) use engine::ResolvedTemplates;

use serde::{Deserialize, Serialize};

/// Everything a password-reset or verification template can reference.
///
/// `from_address` and `mime` are copied from the adapter sending the email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateContext {
    pub app_name: String,
    pub link: String,
    pub user_email: String,
    pub from_address: String,
    pub mime: bool,
}
