//! Encoding an [`HttpRequest`] into a [`TransportRequest`].

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::Serialize;
use url::Url;

use crate::clients::errors::InvalidHttpRequestError;
use crate::clients::http_header::APPLICATION_JSON;
use crate::clients::http_request::{HttpMethod, HttpRequest, HttpRequestBody};

/// A request in wire form, as seen by a [`Transport`](crate::clients::Transport).
#[derive(Clone, Debug, PartialEq)]
pub struct TransportRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The absolute URL, including any query string.
    pub url: Url,
    /// Wire headers. Sensitive values are marked sensitive.
    pub headers: HeaderMap,
    /// The encoded body, if any.
    pub body: Option<Vec<u8>>,
}

impl TransportRequest {
    /// Returns a header value as text, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// Turns assembled requests into wire requests.
///
/// The body is serialized with `serde_json`, and `content-type:
/// application/json` is guaranteed whenever a body is present.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpRequestEncoder;

impl HttpRequestEncoder {
    /// Creates a new encoder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Encodes `request` for the transport.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidHeader`] if a header name or
    /// value cannot be sent on the wire, and
    /// [`InvalidHttpRequestError::BodyEncoding`] if the body cannot be
    /// serialized.
    pub fn encode<T: Serialize>(
        &self,
        request: &HttpRequest<T>,
    ) -> Result<TransportRequest, InvalidHttpRequestError> {
        let mut headers = HeaderMap::with_capacity(request.headers.len() + 1);
        for (name, value) in &request.headers {
            let invalid = || InvalidHttpRequestError::InvalidHeader {
                name: name.to_string(),
            };
            let header_name =
                HeaderName::from_bytes(name.as_str().as_bytes()).map_err(|_| invalid())?;
            let mut header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            header_value.set_sensitive(name.is_sensitive());
            headers.insert(header_name, header_value);
        }

        let body = match &request.body {
            HttpRequestBody::Empty => None,
            HttpRequestBody::Json(value) => {
                let bytes = serde_json::to_vec(value).map_err(|e| {
                    InvalidHttpRequestError::BodyEncoding {
                        message: e.to_string(),
                    }
                })?;
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
                Some(bytes)
            }
        };

        Ok(TransportRequest {
            method: request.method,
            url: request.url.clone(),
            headers,
            body,
        })
    }
}
