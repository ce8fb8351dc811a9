//! HTTP-specific error types for the restlike SDK.
//!
//! This module contains the error types produced between the moment a wire
//! request is handed to the transport and the moment a typed response is
//! decoded.
//!
//! # Error Handling
//!
//! - [`TransportError`]: The transport could not complete the exchange
//! - [`InvalidHttpRequestError`]: The wire request could not be encoded
//! - [`EmptyDecodeError`]: A typed body was requested from an empty-format response
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use restlike::clients::HttpError;
//!
//! match client.send::<_, Profile>(&request, ResponseFormat::Json).await {
//!     Ok(response) => println!("Profile: {:?}", response.body),
//!     Err(HttpError::Status { code }) => println!("Server answered {code}"),
//!     Err(HttpError::Transport(e)) => println!("Network problem: {e}"),
//!     Err(e) => println!("Other failure: {e}"),
//! }
//! ```

use std::fmt::Display;

use thiserror::Error;

/// Error reported by a [`Transport`](crate::clients::Transport) when the
/// exchange could not be completed.
///
/// The core never inspects or retries these; they are passed through to the
/// caller unchanged.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network or connection error from the underlying HTTP client.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The exchange was aborted before it completed.
    #[error("The request was cancelled before a response was received.")]
    Cancelled,

    /// Any other transport failure, described by a message.
    #[error("Transport error: {message}")]
    Other {
        /// A description of the failure.
        message: String,
    },
}

impl TransportError {
    /// Creates a [`TransportError::Other`] from any displayable message.
    #[must_use]
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

/// Error returned when an assembled request cannot be turned into bytes on
/// the wire.
///
/// # Example
///
/// ```rust
/// use restlike::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::InvalidHeader {
///     name: "authorization".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid value for header 'authorization'.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The JSON body could not be serialized.
    #[error("Cannot encode request body as JSON: {message}")]
    BodyEncoding {
        /// The serializer's error message.
        message: String,
    },

    /// A header name or value contains characters not allowed on the wire.
    #[error("Invalid value for header '{name}'.")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },
}

/// Error returned when a response declared empty is decoded into a type
/// that needs data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmptyDecodeError {
    /// The target type cannot be produced from an empty body.
    #[error("Expected an empty response body, but the target type requires data.")]
    NotEmpty,

    /// The target type's `Deserialize` implementation reported an error.
    #[error("{message}")]
    Custom {
        /// The deserializer's error message.
        message: String,
    },
}

impl serde::de::Error for EmptyDecodeError {
    fn custom<T: Display>(msg: T) -> Self {
        Self::Custom {
            message: msg.to_string(),
        }
    }
}

/// Unified error type for all HTTP-related errors.
///
/// # Example
///
/// ```rust
/// use restlike::clients::HttpError;
///
/// let error = HttpError::Status { code: 404 };
/// assert_eq!(error.status_code(), Some(404));
/// assert_eq!(error.to_string(), "Request failed with HTTP status 404.");
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// The transport failed to complete the exchange.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with a status of 400 or above.
    ///
    /// The response body is never decoded for these responses.
    #[error("Request failed with HTTP status {code}.")]
    Status {
        /// The HTTP status code.
        code: u16,
    },

    /// The transport completed without a usable status or URL.
    #[error("The transport returned a response without a status or URL.")]
    MalformedResponse,

    /// A typed body was requested from a response declared empty.
    #[error("Response format mismatch: {0}")]
    FormatMismatch(#[from] EmptyDecodeError),

    /// The JSON response body could not be decoded into the requested type.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The wire request could not be encoded.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

impl HttpError {
    /// Returns the HTTP status code for [`HttpError::Status`] errors.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code } => Some(*code),
            _ => None,
        }
    }
}
