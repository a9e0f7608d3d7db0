//! Secure API key handling using the secrecy crate
//!
//! The ScraperAPI key travels in a query string, so it must never reach a log
//! line. Wrapping it in `Secret` redacts `Debug` output and zeroes the memory
//! on drop; the key is only readable through `expose_secret()` at the single
//! place the request is built.
//!
//! # Example
//!
//! ```rust
//! use gmaps_scraper::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let key = secret_string("my-api-key".to_string());
//! assert_eq!(key.expose_secret().as_str(), "my-api-key");
//! assert!(!format!("{key:?}").contains("my-api-key"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// String newtype implementing the traits `Secret` requires
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl SecretValue {
    /// Borrow the underlying string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl Serialize for SecretValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretValue)
    }
}

/// A string that is redacted in `Debug` output and zeroized on drop
pub type SecretString = Secret<SecretValue>;

/// Wrap a plain string as a [`SecretString`]
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_secret_string_creation() {
        let secret = secret_string("key-123".to_string());
        assert_eq!(secret.expose_secret().as_str(), "key-123");
        assert!(secret.expose_secret() == "key-123");
    }

    #[test]
    fn test_secret_debug_redacted() {
        let secret = secret_string("sensitive-key".to_string());
        let debug_output = format!("{secret:?}");
        assert!(!debug_output.contains("sensitive-key"));
        assert!(debug_output.contains("REDACTED"));
    }

    #[test]
    fn test_secret_toml_deserialize() {
        #[derive(Deserialize)]
        struct Section {
            api_key: SecretString,
        }

        let section: Section = toml::from_str(r#"api_key = "from-toml""#).unwrap();
        assert_eq!(section.api_key.expose_secret().as_str(), "from-toml");
        assert!(!section.api_key.expose_secret().is_empty());
    }
}
