use crate::{
    MailRequest, MailerError, Recipient,
    templates::{ResolvedTemplates, TemplateContext},
};

/// Arguments for the templated account emails.
#[derive(Clone, Copy)]
pub struct AccountEmailOptions<'a> {
    pub link: &'a str,
    pub app_name: &'a str,
    pub user: &'a dyn Recipient,
}

impl<'a> AccountEmailOptions<'a> {
    pub fn new(link: &'a str, app_name: &'a str, user: &'a dyn Recipient) -> Self {
        Self {
            link,
            app_name,
            user,
        }
    }

    fn context(&self, from_address: &str, mime: bool) -> TemplateContext {
        TemplateContext {
            app_name: self.app_name.to_string(),
            link: self.link.to_string(),
            user_email: self.user.email().to_string(),
            from_address: from_address.to_string(),
            mime,
        }
    }
}

pub(crate) struct PasswordResetEmail;

impl PasswordResetEmail {
    pub(crate) fn build(
        templates: &ResolvedTemplates,
        from_address: &str,
        mime: bool,
        options: &AccountEmailOptions<'_>,
    ) -> Result<MailRequest, MailerError> {
        let context = options.context(from_address, mime);
        render(
            templates,
            &context,
            format!("Password Reset for {}", options.app_name),
        )
    }
}

pub(crate) struct VerificationEmail;

impl VerificationEmail {
    pub(crate) fn build(
        templates: &ResolvedTemplates,
        from_address: &str,
        mime: bool,
        options: &AccountEmailOptions<'_>,
    ) -> Result<MailRequest, MailerError> {
        let context = options.context(from_address, mime);
        render(
            templates,
            &context,
            format!("Welcome to {}", options.app_name),
        )
    }
}

// The html body is only rendered when the adapter sends MIME documents; the
// plain endpoint has no use for it.
fn render(
    templates: &ResolvedTemplates,
    context: &TemplateContext,
    subject: String,
) -> Result<MailRequest, MailerError> {
    let text = templates.text.render(context)?;
    let html = if context.mime {
        Some(templates.html.render(context)?)
    } else {
        None
    };

    Ok(MailRequest {
        to: context.user_email.clone(),
        subject,
        text,
        html,
        mime: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::TemplatePair;

    struct User {
        email: String,
    }

    impl Recipient for User {
        fn email(&self) -> &str {
            &self.email
        }
    }

    fn user() -> User {
        User {
            email: "my-email".to_string(),
        }
    }

    #[test]
    fn test_password_reset_email() {
        let user = user();
        let options = AccountEmailOptions::new("my-link", "my-app-name", &user);
        let templates = TemplatePair::password_reset().resolve().unwrap();

        let mail =
            PasswordResetEmail::build(&templates, "noreply@example.com", false, &options).unwrap();

        assert_eq!(mail.to, "my-email");
        assert_eq!(mail.subject, "Password Reset for my-app-name");
        assert_eq!(
            mail.text,
            "Hi,\n\nYou requested to reset your password for my-app-name.\n\nClick here to reset it:\nmy-link"
        );
        assert_eq!(mail.html, None);
        assert_eq!(mail.mime, None);
    }

    #[test]
    fn test_verification_email_in_mime_mode() {
        let user = user();
        let options = AccountEmailOptions::new("my-link", "my-app-name", &user);
        let templates = TemplatePair::verification().resolve().unwrap();

        let mail =
            VerificationEmail::build(&templates, "noreply@example.com", true, &options).unwrap();

        assert_eq!(mail.subject, "Welcome to my-app-name");
        assert!(mail.text.contains("my-email"));
        assert!(mail.html.unwrap().contains("my-email"));
    }

    #[test]
    fn test_templates_see_adapter_settings() {
        let user = user();
        let options = AccountEmailOptions::new("my-link", "my-app-name", &user);
        let templates = TemplatePair::new(
            |ctx: &TemplateContext| format!("sent by {} (mime: {})", ctx.from_address, ctx.mime),
            |_: &TemplateContext| String::from("<p>unused</p>"),
        )
        .resolve()
        .unwrap();

        let mail =
            PasswordResetEmail::build(&templates, "noreply@example.com", false, &options).unwrap();

        assert_eq!(mail.text, "sent by noreply@example.com (mime: false)");
    }

    #[test]
    fn test_plain_address_as_user() {
        let user = "plain@example.com";
        let options = AccountEmailOptions::new("my-link", "my-app-name", &user);
        let templates = TemplatePair::verification().resolve().unwrap();

        let mail =
            VerificationEmail::build(&templates, "noreply@example.com", false, &options).unwrap();

        assert_eq!(mail.to, "plain@example.com");
        assert!(mail.text.contains("plain@example.com"));
    }
}
