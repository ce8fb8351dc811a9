//! HTTP response types for the restlike SDK.
//!
//! This module provides the raw result of a transport exchange,
//! [`HttpRawResponse`], and the typed result produced from it,
//! [`HttpResponse`].

use std::collections::HashMap;
use std::fmt;

use reqwest::header::HeaderMap;
use url::Url;

use crate::clients::errors::TransportError;
use crate::clients::http_header::HttpHeader;

/// How the body of a response should be decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseFormat {
    /// The response is not expected to carry data; only "nothing" types can
    /// be produced.
    Empty,
    /// The body is a JSON document. An absent or empty body decodes as `{}`.
    #[default]
    Json,
}

/// The outcome of a transport exchange, before any interpretation.
///
/// Either `error` is set, or `status` and `url` describe the response that
/// was received.
#[derive(Debug, Default)]
pub struct HttpRawResponse {
    /// The HTTP status code, if a response was received.
    pub status: Option<u16>,
    /// The final URL of the response, if a response was received.
    pub url: Option<Url>,
    /// Response headers.
    pub headers: HeaderMap,
    /// The raw body bytes, if any.
    pub body: Option<Vec<u8>>,
    /// The transport failure, if the exchange did not complete.
    pub error: Option<TransportError>,
}

impl HttpRawResponse {
    /// Creates a raw response for a completed exchange.
    #[must_use]
    pub fn new(status: u16, url: Url, headers: HeaderMap, body: Option<Vec<u8>>) -> Self {
        Self {
            status: Some(status),
            url: Some(url),
            headers,
            body,
            error: None,
        }
    }

    /// Creates a raw response for a failed exchange.
    #[must_use]
    pub fn from_error(error: TransportError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    /// Returns a log-friendly view of this response.
    #[must_use]
    pub const fn loggable(&self, redact_body: bool) -> LoggableResponse<'_> {
        LoggableResponse {
            raw: self,
            redact_body,
        }
    }
}

/// Redacting [`Display`](fmt::Display) adapter for [`HttpRawResponse`].
///
/// Lines are prefixed with `==>`. Sensitive header values are replaced by
/// `<redacted>`, and the body is omitted when `redact_body` is set.
#[derive(Debug)]
pub struct LoggableResponse<'a> {
    raw: &'a HttpRawResponse,
    redact_body: bool,
}

impl fmt::Display for LoggableResponse<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = &self.raw.error {
            return write!(f, "==> {error}");
        }
        let (Some(status), Some(url)) = (self.raw.status, &self.raw.url) else {
            return f.write_str("==> <invalid response>");
        };

        write!(f, "==> {status} {url}")?;
        for (name, value) in &self.raw.headers {
            let value = if HttpHeader::is_sensitive_name(name.as_str()) {
                "<redacted>"
            } else {
                value.to_str().unwrap_or("<binary>")
            };
            write!(f, "\n==> headers[{name}]: {value}")?;
        }
        if let Some(body) = &self.raw.body {
            if !self.redact_body && !body.is_empty() {
                write!(f, "\n==> {}", String::from_utf8_lossy(body))?;
            }
        }
        Ok(())
    }
}

/// A successfully decoded response.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use restlike::clients::HttpResponse;
/// use url::Url;
///
/// let response = HttpResponse {
///     status: 200,
///     url: Url::parse("https://example.com/api/items").unwrap(),
///     body: vec![1, 2, 3],
///     headers: HashMap::from([("x-total".to_string(), "3".to_string())]),
/// };
///
/// assert!(response.is_ok());
/// assert_eq!(response.header("X-Total"), Some("3"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse<R> {
    /// The HTTP status code (always below 400).
    pub status: u16,
    /// The final URL of the response.
    pub url: Url,
    /// The decoded body.
    pub body: R,
    /// Response headers with text values, keyed by lowercase name.
    pub headers: HashMap<String, String>,
}

impl<R> HttpResponse<R> {
    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns a header value by name, ignoring case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Discards the metadata and returns the body.
    pub fn into_body(self) -> R {
        self.body
    }
}
