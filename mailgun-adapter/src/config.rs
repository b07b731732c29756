use crate::{AdapterOptions, MailerError, MailgunAdapter, client::DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};

/// Serializable adapter settings, usually loaded from the environment.
///
/// Templated flows and injected clients are not part of the config; add them
/// to the [`AdapterOptions`] returned by [`into_options`](Self::into_options).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailgunConfig {
    pub from_address: String,
    #[serde(default)]
    pub from_name: Option<String>,
    pub api_key: String,
    pub domain: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub mime: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl MailgunConfig {
    pub fn from_env() -> Result<Self, MailerError> {
        let required = |name: &str| {
            std::env::var(name).map_err(|_| MailerError::Config(format!("{name} not set")))
        };

        Ok(Self {
            from_address: required("MAILGUN_FROM_ADDRESS")?,
            from_name: std::env::var("MAILGUN_FROM_NAME").ok(),
            api_key: required("MAILGUN_API_KEY")?,
            domain: required("MAILGUN_DOMAIN")?,
            base_url: std::env::var("MAILGUN_BASE_URL").unwrap_or_else(|_| default_base_url()),
            mime: std::env::var("MAILGUN_MIME")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        })
    }

    pub fn into_options(self) -> AdapterOptions {
        let mut options = AdapterOptions::new()
            .from_address(self.from_address)
            .api_key(self.api_key)
            .domain(self.domain)
            .base_url(self.base_url)
            .mime(self.mime);

        if let Some(name) = self.from_name {
            options = options.from_name(name);
        }

        options
    }

    pub fn build_adapter(self) -> Result<MailgunAdapter, MailerError> {
        self.into_options().build()
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MailgunConfig {
        MailgunConfig {
            from_address: "noreply@example.com".to_string(),
            from_name: None,
            api_key: "key-test".to_string(),
            domain: "mg.example.com".to_string(),
            base_url: default_base_url(),
            mime: false,
        }
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: MailgunConfig = serde_json::from_str(
            r#"{"from_address": "noreply@example.com", "api_key": "key-test", "domain": "mg.example.com"}"#,
        )
        .unwrap();

        assert_eq!(config, self::config());
    }

    #[test]
    fn test_empty_from_name_is_ignored() {
        let mut config = config();
        config.from_name = Some(String::new());

        let adapter = config.build_adapter().unwrap();
        assert_eq!(adapter.sender(), "noreply@example.com");
    }

    #[test]
    fn test_build_adapter() {
        let mut config = config();
        config.from_name = Some("Test App".to_string());
        config.mime = true;

        let adapter = config.build_adapter().unwrap();
        assert!(adapter.sender().contains("Test App"));
        assert!(adapter.sender().ends_with("<noreply@example.com>"));
        assert!(adapter.mime());
    }

    #[test]
    fn test_build_adapter_rejects_empty_fields() {
        let mut config = config();
        config.domain = String::new();

        assert!(matches!(
            config.build_adapter(),
            Err(MailerError::Config(_))
        ));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" YES "));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }
}
