//! Error types for the restlike SDK.
//!
//! [`ConfigError`] covers everything that can go wrong before a request is
//! made: empty keys or credentials, unusable base URLs and incomplete
//! builders. Request-time failures live in [`crate::api::ApiError`].
//!
//! Validated types reject bad input in their constructors, so a value that
//! exists is always usable.
//!
//! # Example
//!
//! ```rust
//! use restlike::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Rejected configuration input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid API key.")]
    EmptyApiKey,

    /// Stored credentials cannot be empty.
    #[error("Credential cannot be empty. Please provide a non-empty token or password.")]
    EmptyCredential,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}': {reason}. Please provide an absolute URL with a host (e.g., 'https://api.example.com/v1/').")]
    InvalidBaseUrl {
        /// The rejected input.
        url: String,
        /// Why the URL was rejected.
        reason: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_error_message() {
        let error = ConfigError::EmptyApiKey;
        let message = error.to_string();
        assert!(message.contains("API key"));
        assert!(message.contains("empty"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "not a url".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("relative URL without a base"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "base_url" };
        assert!(error.to_string().contains("base_url"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: &dyn std::error::Error = &ConfigError::EmptyCredential;
        assert!(error.to_string().contains("Credential"));
    }
}
