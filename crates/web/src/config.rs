//! Site-wide settings consumed by the widget builders.

use serde::Deserialize;
use thiserror::Error;

/// External endpoints and addresses the buttons point at.
///
/// Deserializable so deployments can ship it as a JSON fragment next to
/// the rest of the site settings. The defaults are placeholders meant
/// for tests and local development.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Online donation form.
    pub donation_form_url: String,
    /// Membership ("adhésion") signup form.
    pub membership_form_url: String,
    /// Address that contact buttons write to.
    pub contact_email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            donation_form_url: "https://dons.example.org/formulaire".to_string(),
            membership_form_url: "https://dons.example.org/adhesion".to_string(),
            contact_email: "contact@example.org".to_string(),
        }
    }
}

/// Configuration that cannot be used to build widgets.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON fragment did not deserialize.
    #[error("unreadable site config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A form endpoint is not an absolute http(s) URL.
    #[error("not an absolute http(s) url: {0}")]
    InvalidUrl(String),
    /// The contact address is not a plausible email address.
    #[error("invalid contact address: {0}")]
    InvalidEmail(String),
}

impl SiteConfig {
    /// Parses a JSON fragment and validates the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every endpoint is usable in emitted HTML.
    ///
    /// Donation and membership URLs end up verbatim in `href`
    /// attributes on every page, so they must be absolute http(s) URLs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for url in [&self.donation_form_url, &self.membership_form_url] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }

        let mut parts = self.contact_email.splitn(2, '@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();
        if local.is_empty() || domain.is_empty() || !domain.contains('.') {
            return Err(ConfigError::InvalidEmail(self.contact_email.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn parses_a_json_fragment() {
        let config = SiteConfig::from_json(
            r#"{
                "donation_form_url": "https://collect.example.org/don",
                "membership_form_url": "https://collect.example.org/adhesion",
                "contact_email": "bonjour@example.org"
            }"#,
        )
        .unwrap();
        assert_eq!(config.donation_form_url, "https://collect.example.org/don");
    }

    #[test]
    fn rejects_relative_form_urls() {
        let config = SiteConfig {
            donation_form_url: "/don".to_string(),
            ..SiteConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn rejects_addresses_without_a_domain() {
        let config = SiteConfig {
            contact_email: "contact@".to_string(),
            ..SiteConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidEmail(_))
        ));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = SiteConfig::from_json(r#"{"donation_form_url": "https://x", "oops": 1}"#);
        assert!(matches!(err, Err(ConfigError::Parse(_))));
    }
}
