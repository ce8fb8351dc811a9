//! Per-host lookup of `authorization` header values.

use std::collections::HashMap;

/// Supplies the `authorization` header value for a host.
///
/// The lookup is synchronous and made once per call, while the request is
/// assembled. Returning `None` means no `authorization` header is sent.
///
/// # Example
///
/// ```rust
/// use restlike::auth::AuthenticationStorage;
///
/// struct EnvToken;
///
/// impl AuthenticationStorage for EnvToken {
///     fn authentication_header(&self, host: &str) -> Option<String> {
///         (host == "example.com").then(|| "Bearer from-env".to_string())
///     }
/// }
///
/// assert_eq!(
///     EnvToken.authentication_header("example.com").as_deref(),
///     Some("Bearer from-env")
/// );
/// ```
pub trait AuthenticationStorage: Send + Sync {
    /// Returns the complete header value for `host`, such as
    /// `"Bearer abc123"`.
    fn authentication_header(&self, host: &str) -> Option<String>;
}

/// [`AuthenticationStorage`] that never authenticates.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoAuthentication;

impl AuthenticationStorage for NoAuthentication {
    fn authentication_header(&self, _host: &str) -> Option<String> {
        None
    }
}

/// [`AuthenticationStorage`] backed by a fixed map from host to header value.
///
/// # Example
///
/// ```rust
/// use restlike::auth::{AuthenticationStorage, StaticAuthentication};
///
/// let auth = StaticAuthentication::new().with_header("example.com", "Bearer valid-token");
///
/// assert_eq!(
///     auth.authentication_header("example.com").as_deref(),
///     Some("Bearer valid-token")
/// );
/// assert_eq!(auth.authentication_header("other.com"), None);
/// ```
#[derive(Clone, Default)]
pub struct StaticAuthentication {
    headers: HashMap<String, String>,
}

impl StaticAuthentication {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the header value used for `host`.
    #[must_use]
    pub fn with_header(mut self, host: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(host.into().to_ascii_lowercase(), value.into());
        self
    }
}

impl AuthenticationStorage for StaticAuthentication {
    fn authentication_header(&self, host: &str) -> Option<String> {
        self.headers.get(&host.to_ascii_lowercase()).cloned()
    }
}

impl std::fmt::Debug for StaticAuthentication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut hosts: Vec<&str> = self.headers.keys().map(String::as_str).collect();
        hosts.sort_unstable();
        f.debug_struct("StaticAuthentication")
            .field("hosts", &hosts)
            .finish()
    }
}
