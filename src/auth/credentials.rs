//! Secret storage keyed by service and account.

use std::collections::HashMap;
use std::fmt;

use parking_lot::RwLock;

use crate::error::ConfigError;

/// A validated secret such as a token or password.
///
/// The `Debug` implementation masks the value, displaying only
/// `Credential(*****)`.
///
/// # Example
///
/// ```rust
/// use restlike::auth::Credential;
///
/// let token = Credential::new("valid-token").unwrap();
/// assert_eq!(token.expose(), "valid-token");
/// assert_eq!(format!("{:?}", token), "Credential(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Creates a new credential.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredential`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyCredential);
        }
        Ok(Self(secret))
    }

    /// Returns the secret value.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(*****)")
    }
}

/// A store of secrets keyed by `(service, account)`.
///
/// Implementations might wrap an OS keychain, a secrets manager, or memory.
/// All methods are synchronous and must be safe to call from several tasks.
pub trait CredentialStore: Send + Sync {
    /// Returns the secret for `service` and `account`, if one is stored.
    fn password(&self, service: &str, account: &str) -> Option<Credential>;

    /// Stores `password`, replacing any existing secret for the same key.
    fn set_password(&self, password: Credential, service: &str, account: &str);

    /// Removes the secret for `service` and `account`. Missing entries are
    /// ignored.
    fn delete_password(&self, service: &str, account: &str);
}

/// In-process [`CredentialStore`].
///
/// # Example
///
/// ```rust
/// use restlike::auth::{Credential, CredentialStore, MemoryCredentialStore};
///
/// let store = MemoryCredentialStore::new();
/// store.set_password(Credential::new("s3cret").unwrap(), "example.com", "me");
///
/// assert_eq!(
///     store.password("example.com", "me").map(|c| c.expose().to_string()),
///     Some("s3cret".to_string())
/// );
/// ```
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    entries: RwLock<HashMap<(String, String), Credential>>,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored secrets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if no secrets are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn password(&self, service: &str, account: &str) -> Option<Credential> {
        self.entries
            .read()
            .get(&(service.to_string(), account.to_string()))
            .cloned()
    }

    fn set_password(&self, password: Credential, service: &str, account: &str) {
        self.entries
            .write()
            .insert((service.to_string(), account.to_string()), password);
    }

    fn delete_password(&self, service: &str, account: &str) {
        self.entries
            .write()
            .remove(&(service.to_string(), account.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential(secret: &str) -> Credential {
        Credential::new(secret).unwrap()
    }

    #[test]
    fn test_credential_rejects_empty() {
        assert!(matches!(
            Credential::new(""),
            Err(ConfigError::EmptyCredential)
        ));
    }

    #[test]
    fn test_credential_masks_debug() {
        let debug_output = format!("{:?}", credential("hunter2"));
        assert_eq!(debug_output, "Credential(*****)");
    }

    #[test]
    fn test_store_returns_none_when_missing() {
        let store = MemoryCredentialStore::new();
        assert!(store.password("example.com", "me").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_replaces_existing_entry() {
        let store = MemoryCredentialStore::new();
        store.set_password(credential("first"), "example.com", "me");
        store.set_password(credential("second"), "example.com", "me");

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.password("example.com", "me"),
            Some(credential("second"))
        );
    }

    #[test]
    fn test_entries_are_keyed_by_service_and_account() {
        let store = MemoryCredentialStore::new();
        store.set_password(credential("a"), "example.com", "alice");
        store.set_password(credential("b"), "example.com", "bob");
        store.set_password(credential("c"), "other.com", "alice");

        assert_eq!(store.len(), 3);
        assert_eq!(store.password("example.com", "bob"), Some(credential("b")));
        assert_eq!(store.password("other.com", "alice"), Some(credential("c")));
    }

    #[test]
    fn test_delete_removes_entry() {
        let store = MemoryCredentialStore::new();
        store.set_password(credential("a"), "example.com", "me");
        store.delete_password("example.com", "me");

        assert!(store.password("example.com", "me").is_none());
    }

    #[test]
    fn test_delete_missing_entry_is_noop() {
        let store = MemoryCredentialStore::new();
        store.set_password(credential("a"), "example.com", "me");
        store.delete_password("example.com", "someone-else");

        assert_eq!(store.len(), 1);
    }
}
