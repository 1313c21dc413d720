//! Message catalogs
//!
//! A catalog maps message keys to localized text for one locale. Keys are the
//! English default strings ("Log In", "Remember me", caller-supplied error
//! keys), so an empty catalog renders every key as itself.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::console_debug;
use crate::utils::platform::DEFAULT_LOCALE;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid catalog JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Catalog locale must not be empty")]
    EmptyLocale,

    #[error("Catalog for {locale} contains an empty message id")]
    EmptyMessageId { locale: String },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageCatalog {
    pub locale: String,
    #[serde(default)]
    pub messages: HashMap<String, String>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::empty(DEFAULT_LOCALE)
    }
}

impl MessageCatalog {
    /// Catalog with no translations; every lookup falls back.
    pub fn empty(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            messages: HashMap::new(),
        }
    }

    /// Parse and validate a catalog document:
    /// `{ "locale": "fr-FR", "messages": { "Log In": "Connexion" } }`
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: MessageCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        console_debug!(
            "Loaded message catalog {} ({} messages)",
            catalog.locale,
            catalog.messages.len()
        );
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.locale.trim().is_empty() {
            return Err(CatalogError::EmptyLocale);
        }
        if self.messages.keys().any(|id| id.is_empty()) {
            return Err(CatalogError::EmptyMessageId {
                locale: self.locale.clone(),
            });
        }
        Ok(())
    }

    pub fn with_message(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.messages.insert(id.into(), text.into());
        self
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.messages.get(id).map(String::as_str)
    }

    /// Localized text for `id`, else `default_message`, else `id` itself.
    pub fn format<'a>(&'a self, id: &'a str, default_message: Option<&'a str>) -> &'a str {
        self.get(id).or(default_message).unwrap_or(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FR: &str = r#"{
        "locale": "fr-FR",
        "messages": {
            "Log In": "Connexion",
            "Remember me": "Se souvenir de moi"
        }
    }"#;

    #[test]
    fn test_from_json() {
        let catalog = MessageCatalog::from_json(FR).unwrap();
        assert_eq!(catalog.locale, "fr-FR");
        assert_eq!(catalog.get("Log In"), Some("Connexion"));
        assert_eq!(catalog.get("Password"), None);
    }

    #[test]
    fn test_messages_field_is_optional() {
        let catalog = MessageCatalog::from_json(r#"{ "locale": "de-DE" }"#).unwrap();
        assert!(catalog.messages.is_empty());
    }

    #[test]
    fn test_invalid_json() {
        let err = MessageCatalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidJson(_)));
    }

    #[test]
    fn test_empty_locale_rejected() {
        let err = MessageCatalog::from_json(r#"{ "locale": " ", "messages": {} }"#).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyLocale));
    }

    #[test]
    fn test_empty_message_id_rejected() {
        let err = MessageCatalog::from_json(r#"{ "locale": "fr-FR", "messages": { "": "x" } }"#)
            .unwrap_err();
        assert!(matches!(err, CatalogError::EmptyMessageId { .. }));
    }

    #[test]
    fn test_format_fallbacks() {
        let catalog = MessageCatalog::default().with_message("Email", "E-mail");

        assert_eq!(catalog.format("Email", Some("Email")), "E-mail");
        assert_eq!(catalog.format("Username", Some("User name")), "User name");
        assert_eq!(catalog.format("Bad password", None), "Bad password");
    }
}
