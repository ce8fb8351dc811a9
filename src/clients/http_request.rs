//! HTTP request types for the restlike SDK.
//!
//! This module provides [`HttpRequest`], the fully assembled request handed
//! to the [`HttpClient`](crate::clients::HttpClient), together with
//! [`HttpMethod`] and [`HttpRequestBody`].

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use url::Url;

use crate::clients::http_header::HttpHeader;

/// HTTP methods used by resource operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the uppercase method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Post => Self::POST,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// The body of an [`HttpRequest`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HttpRequestBody<T> {
    /// No body is sent.
    Empty,
    /// The value is sent as a JSON document.
    Json(T),
}

impl<T> HttpRequestBody<T> {
    /// Returns `true` if a JSON body is present.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }
}

/// A fully assembled request, ready to be encoded for the transport.
///
/// `T` is the type of the JSON body; it is usually a reference to the
/// operation's parameters.
///
/// The [`Display`](fmt::Display) implementation renders a log-friendly view
/// of the request: one `<==`-prefixed line for the method and URL, one per
/// header, and one for the body. Values of `x-api-key` and `authorization`
/// are replaced by `<redacted>`, and the body line is omitted when
/// `redact_request_body` is set.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest<T> {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The absolute URL, including any query string.
    pub url: Url,
    /// Request headers keyed by name.
    pub headers: BTreeMap<HttpHeader, String>,
    /// The request body.
    pub body: HttpRequestBody<T>,
    /// Omit the body from logs.
    pub redact_request_body: bool,
    /// Omit the response body from logs.
    pub redact_response_body: bool,
}

impl<T> HttpRequest<T> {
    /// Returns the value of a header, if present.
    #[must_use]
    pub fn header(&self, name: impl Into<HttpHeader>) -> Option<&str> {
        self.headers.get(&name.into()).map(String::as_str)
    }
}

impl<T: Serialize> fmt::Display for HttpRequest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<== {} {}", self.method, self.url)?;
        for (name, value) in &self.headers {
            let value = if name.is_sensitive() {
                "<redacted>"
            } else {
                value.as_str()
            };
            write!(f, "\n<== headers[{name}]: {value}")?;
        }
        if let HttpRequestBody::Json(body) = &self.body {
            if !self.redact_request_body {
                match serde_json::to_string(body) {
                    Ok(json) => write!(f, "\n<== {json}")?,
                    Err(_) => f.write_str("\n<== <unserializable body>")?,
                }
            }
        }
        Ok(())
    }
}
