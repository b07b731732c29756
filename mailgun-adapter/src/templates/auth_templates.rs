use crate::{
    MailerError,
    templates::{EmailTemplate, TemplateContext},
};
use askama::Template;

#[derive(Template)]
#[template(
    source = "Hi,\n\nYou requested to reset your password for {{ app_name }}.\n\nClick here to reset it:\n{{ link }}",
    ext = "txt"
)]
pub struct PasswordResetText<'a> {
    pub app_name: &'a str,
    pub link: &'a str,
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Password Reset for {{ app_name }}</title>
</head>
<body>
    <p>Hi,</p>
    <p>You requested to reset your password for {{ app_name }}.</p>
    <p><a href="{{ link }}">Click here to reset it</a></p>
</body>
</html>"#,
    ext = "html"
)]
pub struct PasswordResetHtml<'a> {
    pub app_name: &'a str,
    pub link: &'a str,
}

#[derive(Template)]
#[template(
    source = "Hi,\n\nYou are being asked to confirm the e-mail address {{ email }} with {{ app_name }}\n\nClick here to confirm it:\n{{ link }}",
    ext = "txt"
)]
pub struct VerificationText<'a> {
    pub app_name: &'a str,
    pub email: &'a str,
    pub link: &'a str,
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Welcome to {{ app_name }}</title>
</head>
<body>
    <p>Hi,</p>
    <p>You are being asked to confirm the e-mail address {{ email }} with {{ app_name }}.</p>
    <p><a href="{{ link }}">Click here to confirm it</a></p>
</body>
</html>"#,
    ext = "html"
)]
pub struct VerificationHtml<'a> {
    pub app_name: &'a str,
    pub email: &'a str,
    pub link: &'a str,
}

/// The askama templates shipped with the crate, usable wherever an
/// [`EmailTemplate`] is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinTemplate {
    PasswordResetText,
    PasswordResetHtml,
    VerificationText,
    VerificationHtml,
}

impl EmailTemplate for BuiltinTemplate {
    fn render(&self, context: &TemplateContext) -> Result<String, MailerError> {
        let app_name = context.app_name.as_str();
        let link = context.link.as_str();
        let email = context.user_email.as_str();

        let rendered = match self {
            Self::PasswordResetText => PasswordResetText { app_name, link }.render()?,
            Self::PasswordResetHtml => PasswordResetHtml { app_name, link }.render()?,
            Self::VerificationText => VerificationText {
                app_name,
                email,
                link,
            }
            .render()?,
            Self::VerificationHtml => VerificationHtml {
                app_name,
                email,
                link,
            }
            .render()?,
        };

        Ok(rendered)
    }
}

impl crate::templates::TemplatePair {
    /// Built-in password reset templates.
    pub fn password_reset() -> Self {
        Self::new(
            BuiltinTemplate::PasswordResetText,
            BuiltinTemplate::PasswordResetHtml,
        )
    }

    /// Built-in verification templates.
    pub fn verification() -> Self {
        Self::new(
            BuiltinTemplate::VerificationText,
            BuiltinTemplate::VerificationHtml,
        )
    }
}
