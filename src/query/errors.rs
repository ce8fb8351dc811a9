//! Error types for structural query encoding.

use std::fmt::Display;

use thiserror::Error;

/// Error returned when a value cannot be flattened into query items.
///
/// These errors indicate a parameter type whose shape has no query string
/// representation. They are caller bugs and are never retryable.
///
/// # Example
///
/// ```rust
/// use restlike::query::QueryEncodeError;
///
/// let error = QueryEncodeError::Unsupported { kind: "bytes" };
/// assert_eq!(error.to_string(), "Cannot encode bytes as query items.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryEncodeError {
    /// The value contains a shape the encoder cannot represent.
    #[error("Cannot encode {kind} as query items.")]
    Unsupported {
        /// A short description of the offending shape.
        kind: &'static str,
    },

    /// A custom `Serialize` implementation reported an error.
    #[error("Query encoding failed: {message}")]
    Custom {
        /// The message produced by the serializer.
        message: String,
    },
}

impl serde::ser::Error for QueryEncodeError {
    fn custom<T: Display>(msg: T) -> Self {
        Self::Custom {
            message: msg.to_string(),
        }
    }
}
