//! Resource operations and the client that performs them.
//!
//! # Overview
//!
//! - [`ResourceOperation`]: A typed request for one action on a resource
//! - [`ResourceVerb`]: `index`, `show`, `create`, `update` or `delete`
//! - [`Parameters`]: Operation parameters, or explicitly none
//! - [`RequestAssembler`]: Turns an operation into an
//!   [`HttpRequest`](crate::clients::HttpRequest)
//! - [`ResourceClient`]: Assembles, sends and decodes in one call
//! - [`ApiError`]: Everything a call can fail with
//!
//! # Parameter Placement
//!
//! `create` and `update` send their parameters as a JSON body. `index`,
//! `show` and `delete` flatten them into query items using bracket notation
//! (see [`query`](crate::query)).
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use restlike::auth::NoAuthentication;
//! use restlike::{ApiConfig, BaseUrl, Empty, ResourceClient, ResourceOperation, ResourceVerb};
//!
//! let config = ApiConfig::builder()
//!     .base_url(BaseUrl::new("https://example.com/api/")?)
//!     .build()?;
//! let client = ResourceClient::with_reqwest(config, Arc::new(NoAuthentication))?;
//!
//! let logout: ResourceOperation<Empty, Empty> =
//!     ResourceOperation::without_parameters(ResourceVerb::Delete, "session");
//! client.call_empty(&logout).await?;
//! ```

mod assembler;
mod client;
mod errors;
mod operation;

pub use assembler::RequestAssembler;
pub use client::ResourceClient;
pub use errors::ApiError;
pub use operation::{Parameters, ResourceOperation, ResourceVerb};
