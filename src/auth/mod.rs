//! Authentication types for the restlike SDK.
//!
//! This module decides which `authorization` header, if any, accompanies a
//! request to a given host.
//!
//! # Overview
//!
//! - [`AuthenticationStorage`]: Per-host lookup consulted once per call
//! - [`NoAuthentication`]: Never sends an `authorization` header
//! - [`StaticAuthentication`]: A fixed host-to-header map
//! - [`KeychainAuthentication`]: Reads tokens from a [`CredentialStore`]
//! - [`MemoryCredentialStore`]: In-process [`CredentialStore`]
//! - [`Credential`]: A secret with masked debug output
//!
//! # Lookup Rules
//!
//! The lookup key is the host of the fully resolved request URL, without
//! scheme, port or path. The returned string is sent verbatim as the
//! `authorization` header value.
//!
//! # Example
//!
//! ```rust
//! use restlike::auth::{
//!     AuthenticationStorage, Credential, KeychainAuthentication, MemoryCredentialStore,
//! };
//!
//! let auth = KeychainAuthentication::new(MemoryCredentialStore::new(), "default");
//! auth.save_token("api.example.com", Credential::new("abc123").unwrap());
//!
//! assert_eq!(
//!     auth.authentication_header("api.example.com").as_deref(),
//!     Some("Bearer abc123")
//! );
//! ```

mod credentials;
mod keychain;
mod storage;

pub use credentials::{Credential, CredentialStore, MemoryCredentialStore};
pub use keychain::{AuthorizationScheme, KeychainAuthentication};
pub use storage::{AuthenticationStorage, NoAuthentication, StaticAuthentication};
