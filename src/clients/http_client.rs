//! HTTP client for restlike API communication.
//!
//! This module provides the [`HttpClient`] type, which sends assembled
//! requests through a [`Transport`] and decodes what comes back.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_request_encoder::HttpRequestEncoder;
use crate::clients::http_response::{HttpResponse, ResponseFormat};
use crate::clients::http_response_decoder::HttpResponseDecoder;
use crate::clients::transport::Transport;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// `tracing` target for request and response logs.
pub const LOG_TARGET: &str = "restlike::http";

/// HTTP client for sending assembled requests.
///
/// The client handles:
/// - Encoding the request body and headers for the wire
/// - Logging the request and raw response with secrets redacted
/// - Status checking and body decoding
///
/// Logging happens at `debug` level on the [`LOG_TARGET`] target.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use restlike::clients::{HttpClient, ReqwestTransport, ResponseFormat};
///
/// let client = HttpClient::new(Arc::new(ReqwestTransport::new()?));
/// let response = client.send::<_, Profile>(&request, ResponseFormat::Json).await?;
/// println!("Hello, {}", response.body.name);
/// ```
#[derive(Clone)]
pub struct HttpClient {
    transport: Arc<dyn Transport>,
    encoder: HttpRequestEncoder,
    decoder: HttpResponseDecoder,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client sending through `transport`.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            encoder: HttpRequestEncoder::new(),
            decoder: HttpResponseDecoder::new(),
        }
    }

    /// Sends `request` and decodes the response according to `format`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the request cannot be encoded,
    /// and any error produced by
    /// [`HttpResponseDecoder::decode`](crate::clients::HttpResponseDecoder::decode).
    pub async fn send<T, R>(
        &self,
        request: &HttpRequest<T>,
        format: ResponseFormat,
    ) -> Result<HttpResponse<R>, HttpError>
    where
        T: Serialize + Sync,
        R: DeserializeOwned,
    {
        tracing::debug!(target: LOG_TARGET, "{request}");

        let wire_request = self.encoder.encode(request)?;
        let raw = self.transport.send(wire_request).await;

        tracing::debug!(
            target: LOG_TARGET,
            "{}",
            raw.loggable(request.redact_response_body)
        );

        let result = self.decoder.decode(raw, format);
        if let Err(error) = &result {
            tracing::debug!(target: LOG_TARGET, url = %request.url, "Request failed: {error}");
        }
        result
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient").finish_non_exhaustive()
    }
}
