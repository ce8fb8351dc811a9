//! Error type returned by [`ResourceClient`](crate::api::ResourceClient) calls.

use thiserror::Error;

use crate::clients::HttpError;
use crate::query::QueryEncodeError;

/// Error type for resource calls.
///
/// Assembly failures are reported before the transport is invoked. Anything
/// after that is an [`HttpError`].
///
/// # Example
///
/// ```rust,ignore
/// use restlike::{ApiError, HttpError};
///
/// match client.call(&operation).await {
///     Ok(item) => println!("Got {item:?}"),
///     Err(ApiError::Http(HttpError::Status { code: 404 })) => println!("Not found"),
///     Err(ApiError::InvalidUrl { path, .. }) => println!("Bad path: {path}"),
///     Err(e) => println!("Error: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// The operation path could not be resolved against the base URL.
    #[error("Invalid URL: cannot resolve path '{path}' against base URL '{base_url}'.")]
    InvalidUrl {
        /// The operation path.
        path: String,
        /// The configured base URL.
        base_url: String,
    },

    /// The parameters have a shape that cannot be expressed as query items.
    #[error("Cannot encode parameters as a query string: {0}")]
    EncodingUnsupported(#[from] QueryEncodeError),

    /// Sending the request or decoding the response failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ApiError {
    /// Returns the HTTP status code if the server rejected the request.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http(error) => error.status_code(),
            _ => None,
        }
    }
}
