//! Header names used by the SDK.

use std::fmt;

/// MIME type sent in `accept` and `content-type` headers.
pub const APPLICATION_JSON: &str = "application/json";

/// A request header name.
///
/// Well-known names have their own variants; everything else is a
/// [`HttpHeader::Custom`] holding a lowercase name. Converting from a string
/// normalizes case and maps well-known names onto their variants, so the same
/// header never appears twice in a header map.
///
/// # Example
///
/// ```rust
/// use restlike::clients::HttpHeader;
///
/// assert_eq!(HttpHeader::from("Authorization"), HttpHeader::Authorization);
/// assert_eq!(HttpHeader::from("X-Request-Id").as_str(), "x-request-id");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HttpHeader {
    /// `x-api-key`, carrying the configured API key.
    ApiKey,
    /// `authorization`, carrying the per-host credential.
    Authorization,
    /// `accept`.
    Accept,
    /// `content-type`.
    ContentType,
    /// `user-agent`.
    UserAgent,
    /// Any other header, stored lowercase.
    Custom(String),
}

impl HttpHeader {
    /// Returns the lowercase wire name of this header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ApiKey => "x-api-key",
            Self::Authorization => "authorization",
            Self::Accept => "accept",
            Self::ContentType => "content-type",
            Self::UserAgent => "user-agent",
            Self::Custom(name) => name,
        }
    }

    /// Returns `true` if this header's value must never be logged.
    #[must_use]
    pub const fn is_sensitive(&self) -> bool {
        matches!(self, Self::ApiKey | Self::Authorization)
    }

    /// Returns `true` if a header with the given wire name must never be logged.
    #[must_use]
    pub fn is_sensitive_name(name: &str) -> bool {
        Self::from(name).is_sensitive()
    }
}

impl From<&str> for HttpHeader {
    fn from(name: &str) -> Self {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            "x-api-key" => Self::ApiKey,
            "authorization" => Self::Authorization,
            "accept" => Self::Accept,
            "content-type" => Self::ContentType,
            "user-agent" => Self::UserAgent,
            _ => Self::Custom(name),
        }
    }
}

impl From<String> for HttpHeader {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl fmt::Display for HttpHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
