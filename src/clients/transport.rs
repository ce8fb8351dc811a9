//! The transport boundary between the SDK and the network.
//!
//! A [`Transport`] takes a [`TransportRequest`] and reports the outcome of
//! the exchange as an [`HttpRawResponse`]. The core never talks to the
//! network directly, so tests can substitute an in-memory transport.
//! [`ReqwestTransport`] is the production implementation.

use async_trait::async_trait;

use crate::clients::errors::TransportError;
use crate::clients::http_request_encoder::TransportRequest;
use crate::clients::http_response::HttpRawResponse;

/// Performs one HTTP exchange.
///
/// Implementations must either complete the exchange, filling in status,
/// URL, headers and body, or report a [`TransportError`] through
/// [`HttpRawResponse::from_error`]. Transports must be `Send + Sync` so a
/// single instance can be shared across concurrent calls.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use reqwest::header::HeaderMap;
/// use restlike::clients::{HttpRawResponse, Transport, TransportRequest};
///
/// struct AlwaysNoContent;
///
/// #[async_trait]
/// impl Transport for AlwaysNoContent {
///     async fn send(&self, request: TransportRequest) -> HttpRawResponse {
///         HttpRawResponse::new(204, request.url, HeaderMap::new(), None)
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and returns whatever came back.
    async fn send(&self, request: TransportRequest) -> HttpRawResponse;
}

/// [`Transport`] backed by a [`reqwest::Client`].
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

impl ReqwestTransport {
    /// Creates a transport with a rustls-backed client.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the underlying client cannot be
    /// created, for example when TLS initialization fails.
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;
        Ok(Self { client })
    }

    /// Creates a transport around an existing client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> HttpRawResponse {
        let TransportRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = self.client.request(method.into(), url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(error) => return HttpRawResponse::from_error(error.into()),
        };

        let status = response.status().as_u16();
        let url = response.url().clone();
        let headers = response.headers().clone();

        match response.bytes().await {
            Ok(bytes) => {
                let body = (!bytes.is_empty()).then(|| bytes.to_vec());
                HttpRawResponse::new(status, url, headers, body)
            }
            Err(error) => HttpRawResponse::from_error(error.into()),
        }
    }
}
