//! Configuration types for the restlike SDK.
//!
//! This module provides the configuration used to assemble every request:
//! the base URL that operation paths are resolved against, and the default
//! headers sent with each call.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ApiConfig`]: The immutable configuration shared by a client
//! - [`ApiConfigBuilder`]: A builder for constructing [`ApiConfig`] instances
//! - [`BaseUrl`]: A validated absolute base URL
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//!
//! # Example
//!
//! ```rust
//! use restlike::{ApiConfig, ApiKey, BaseUrl};
//!
//! let config = ApiConfig::builder()
//!     .base_url(BaseUrl::new("https://example.com/api/").unwrap())
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().host(), "example.com");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl};

use std::collections::BTreeMap;
use std::fmt;

use crate::clients::{HttpHeader, SDK_VERSION};
use crate::error::ConfigError;

/// Configuration for the restlike SDK.
///
/// Holds the base URL and the default headers added to every request before
/// the per-call `accept`, `content-type` and `authorization` headers.
///
/// # Thread Safety
///
/// `ApiConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use restlike::{ApiConfig, ApiKey, BaseUrl, HttpHeader};
///
/// let config = ApiConfig::builder()
///     .base_url(BaseUrl::new("https://example.com/api/").unwrap())
///     .api_key(ApiKey::new("key").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     config.base_headers().get(&HttpHeader::ApiKey).map(String::as_str),
///     Some("key")
/// );
/// ```
#[derive(Clone)]
pub struct ApiConfig {
    base_url: BaseUrl,
    base_headers: BTreeMap<HttpHeader, String>,
}

impl ApiConfig {
    /// Creates a new builder for constructing an `ApiConfig`.
    #[must_use]
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::new()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers sent with every request.
    #[must_use]
    pub const fn base_headers(&self) -> &BTreeMap<HttpHeader, String> {
        &self.base_headers
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: BTreeMap<&str, &str> = self
            .base_headers
            .iter()
            .map(|(name, value)| {
                let value = if name.is_sensitive() { "*****" } else { value.as_str() };
                (name.as_str(), value)
            })
            .collect();
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url.as_ref())
            .field("base_headers", &headers)
            .finish()
    }
}

// Verify ApiConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiConfig>();
};

/// Builder for constructing [`ApiConfig`] instances.
///
/// `base_url` is required. Everything else is optional.
///
/// # Defaults
///
/// - `api_key`: `None` (no `x-api-key` header)
/// - `headers`: Empty
/// - `user_agent_prefix`: `None` (no `user-agent` header)
///
/// # Example
///
/// ```rust
/// use restlike::{ApiConfig, ApiKey, BaseUrl};
///
/// let config = ApiConfig::builder()
///     .base_url(BaseUrl::new("https://example.com/api/").unwrap())
///     .api_key(ApiKey::new("key").unwrap())
///     .header("X-Client-Build", "42")
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<BaseUrl>,
    api_key: Option<ApiKey>,
    headers: BTreeMap<HttpHeader, String>,
    user_agent_prefix: Option<String>,
}

impl ApiConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL (required).
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the API key sent in the `x-api-key` header.
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Adds a default header. Setting the same name twice keeps the last value.
    ///
    /// An `x-api-key` header set here is replaced by [`api_key`](Self::api_key)
    /// when both are given.
    #[must_use]
    pub fn header(mut self, name: impl Into<HttpHeader>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ApiConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set.
    pub fn build(self) -> Result<ApiConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        let mut base_headers = self.headers;
        if let Some(key) = self.api_key {
            base_headers.insert(HttpHeader::ApiKey, key.as_ref().to_string());
        }
        if let Some(prefix) = self.user_agent_prefix {
            base_headers.insert(
                HttpHeader::UserAgent,
                format!("{prefix} | restlike v{SDK_VERSION}"),
            );
        }

        Ok(ApiConfig {
            base_url,
            base_headers,
        })
    }
}
