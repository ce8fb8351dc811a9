//! # restlike
//!
//! A typed client for REST-style resources: describe an operation with a
//! verb, a path and serializable parameters, and get back a decoded result.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ApiConfig`] and [`ApiConfigBuilder`]
//! - Validated newtypes for the base URL and API key
//! - Resource operations ([`ResourceOperation`]) mapped onto HTTP methods
//! - Structural query string encoding for any `serde::Serialize` value
//! - Per-host authentication via [`auth::AuthenticationStorage`]
//! - A pluggable [`Transport`] with a `reqwest`-based default
//! - Request and response logging through `tracing`, with secrets redacted
//!
//! ## Quick Start
//!
//! ```rust
//! use restlike::{ApiConfig, ApiKey, BaseUrl};
//!
//! // Create configuration using the builder pattern
//! let config = ApiConfig::builder()
//!     .base_url(BaseUrl::new("https://example.com/api/").unwrap())
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making Calls
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use restlike::auth::StaticAuthentication;
//! use restlike::{ResourceClient, ResourceOperation, ResourceVerb};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize)]
//! struct Lookup {
//!     d: String,
//! }
//!
//! #[derive(Deserialize)]
//! struct Message {
//!     text: String,
//! }
//!
//! let auth = StaticAuthentication::new().with_header("example.com", "Bearer valid-token");
//! let client = ResourceClient::with_reqwest(config, Arc::new(auth))?;
//!
//! // GET https://example.com/api/message?d=123
//! let operation: ResourceOperation<Lookup, Message> =
//!     ResourceOperation::new(ResourceVerb::Show, "message", Lookup { d: "123".into() });
//! let message = client.call(&operation).await?;
//! ```
//!
//! ## Logging
//!
//! Requests and raw responses are logged at `debug` level on the
//! `restlike::http` target. Values of the `x-api-key` and `authorization`
//! headers never appear in logs, and operations can opt out of body logging
//! with [`ResourceOperation::with_redacted_request_body`] and
//! [`ResourceOperation::with_redacted_response_body`]. The SDK does not
//! install a subscriber.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **One attempt per call**: No hidden retries or caching

pub mod api;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod query;

// Re-export public types at crate root for convenience
pub use api::{ApiError, Parameters, ResourceClient, ResourceOperation, ResourceVerb};
pub use config::{ApiConfig, ApiConfigBuilder, ApiKey, BaseUrl};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    Empty, HttpClient, HttpError, HttpHeader, HttpMethod, HttpRequest, HttpResponse,
    ReqwestTransport, ResponseFormat, Transport, TransportError,
};
