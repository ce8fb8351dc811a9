//! HTTP client types for restlike API communication.
//!
//! This module provides the layer between an assembled request and the
//! network: encoding requests for the wire, the [`Transport`] boundary,
//! and decoding raw responses into typed values.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: Sends an [`HttpRequest`] and decodes the result
//! - [`HttpRequest`]: A fully assembled request (method, URL, headers, body)
//! - [`HttpResponse`]: A decoded response (status, URL, body, headers)
//! - [`Transport`]: The boundary that performs the exchange
//! - [`ReqwestTransport`]: The production transport, built on `reqwest`
//! - [`ResponseFormat`]: Whether a response is decoded as JSON or as nothing
//! - [`HttpError`]: Everything that can go wrong after assembly
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use restlike::clients::{HttpClient, ReqwestTransport, ResponseFormat};
//!
//! let client = HttpClient::new(Arc::new(ReqwestTransport::new()?));
//! let response = client.send::<_, Profile>(&request, ResponseFormat::Json).await?;
//! ```
//!
//! # Decoding Rules
//!
//! - Transport failures are returned unchanged, before anything else
//! - Responses without a status or URL are malformed
//! - Status codes of 400 and above are errors; the body is not decoded
//! - [`ResponseFormat::Json`] decodes an absent or empty body as `{}`
//! - [`ResponseFormat::Empty`] ignores the body and only produces "nothing"
//!   types such as [`Empty`]

mod empty;
mod empty_decoder;
mod errors;
mod http_client;
mod http_header;
mod http_request;
mod http_request_encoder;
mod http_response;
mod http_response_decoder;
mod transport;

pub use empty::Empty;
pub(crate) use empty::is_nothing;
pub use empty_decoder::EmptyDecoder;
pub use errors::{EmptyDecodeError, HttpError, InvalidHttpRequestError, TransportError};
pub use http_client::{HttpClient, LOG_TARGET, SDK_VERSION};
pub use http_header::{HttpHeader, APPLICATION_JSON};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBody};
pub use http_request_encoder::{HttpRequestEncoder, TransportRequest};
pub use http_response::{HttpRawResponse, HttpResponse, LoggableResponse, ResponseFormat};
pub use http_response_decoder::HttpResponseDecoder;
pub use transport::{ReqwestTransport, Transport};
