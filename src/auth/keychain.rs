//! Authentication backed by a [`CredentialStore`].

use base64::prelude::*;

use crate::auth::credentials::{Credential, CredentialStore};
use crate::auth::storage::AuthenticationStorage;

/// How a stored secret is turned into an `authorization` header value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthorizationScheme {
    /// `Bearer <secret>`.
    #[default]
    Bearer,
    /// `Basic <base64(account:secret)>`.
    Basic,
}

impl AuthorizationScheme {
    /// Formats the header value for `account` and `secret`.
    #[must_use]
    pub fn header_value(self, account: &str, secret: &str) -> String {
        match self {
            Self::Bearer => format!("Bearer {secret}"),
            Self::Basic => {
                let encoded = BASE64_STANDARD.encode(format!("{account}:{secret}"));
                format!("Basic {encoded}")
            }
        }
    }
}

/// [`AuthenticationStorage`] reading secrets from a [`CredentialStore`].
///
/// Secrets are stored with the request host as the service and a configured
/// account name, so one store can hold credentials for several APIs.
///
/// # Example
///
/// ```rust
/// use restlike::auth::{
///     AuthenticationStorage, AuthorizationScheme, Credential, KeychainAuthentication,
///     MemoryCredentialStore,
/// };
///
/// let auth = KeychainAuthentication::new(MemoryCredentialStore::new(), "me");
/// auth.save_token("example.com", Credential::new("valid-token").unwrap());
///
/// assert_eq!(
///     auth.authentication_header("example.com").as_deref(),
///     Some("Bearer valid-token")
/// );
///
/// auth.clear_token("example.com");
/// assert_eq!(auth.authentication_header("example.com"), None);
/// ```
#[derive(Debug)]
pub struct KeychainAuthentication<S> {
    store: S,
    account: String,
    scheme: AuthorizationScheme,
}

impl<S: CredentialStore> KeychainAuthentication<S> {
    /// Creates an authentication source using the bearer scheme.
    #[must_use]
    pub fn new(store: S, account: impl Into<String>) -> Self {
        Self {
            store,
            account: account.into(),
            scheme: AuthorizationScheme::Bearer,
        }
    }

    /// Sets the scheme used to format stored secrets.
    #[must_use]
    pub const fn with_scheme(mut self, scheme: AuthorizationScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Returns the account name secrets are stored under.
    #[must_use]
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Stores `token` for `host`, replacing any previous token.
    pub fn save_token(&self, host: &str, token: Credential) {
        tracing::debug!(host, account = %self.account, "Saving token");
        self.store.set_password(token, host, &self.account);
    }

    /// Removes the token for `host`, if any.
    pub fn clear_token(&self, host: &str) {
        tracing::debug!(host, account = %self.account, "Clearing token");
        self.store.delete_password(host, &self.account);
    }
}

impl<S: CredentialStore> AuthenticationStorage for KeychainAuthentication<S> {
    fn authentication_header(&self, host: &str) -> Option<String> {
        let secret = self.store.password(host, &self.account)?;
        Some(self.scheme.header_value(&self.account, secret.expose()))
    }
}
