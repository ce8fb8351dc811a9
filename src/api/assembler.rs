//! Turning a [`ResourceOperation`] into an [`HttpRequest`].

use std::collections::BTreeMap;

use serde::Serialize;
use url::Url;

use crate::api::errors::ApiError;
use crate::api::operation::{Parameters, ResourceOperation};
use crate::auth::AuthenticationStorage;
use crate::clients::{is_nothing, HttpHeader, HttpRequest, HttpRequestBody, APPLICATION_JSON};
use crate::config::ApiConfig;
use crate::query::{QueryItem, QueryItemEncoder};

/// Builds wire requests from operations.
///
/// Assembly is pure apart from the single authentication lookup:
///
/// 1. Parameters become a JSON body for `create`/`update`, and query items
///    otherwise. Parameters that serialize as nothing, such as
///    [`Empty`](crate::Empty) or `None`, produce neither.
/// 2. The path is resolved against the base URL and query items are
///    appended. No `?` is added when there are none.
/// 3. Headers are layered: configured defaults, then `accept`, then
///    `content-type` for JSON bodies, then `authorization` for the resolved
///    host. Later layers win.
///
/// # Example
///
/// ```rust
/// use restlike::api::RequestAssembler;
/// use restlike::auth::NoAuthentication;
/// use restlike::{ApiConfig, BaseUrl, HttpMethod, ResourceOperation, ResourceVerb};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Lookup {
///     d: String,
/// }
///
/// let config = ApiConfig::builder()
///     .base_url(BaseUrl::new("https://example.com/api/").unwrap())
///     .build()
///     .unwrap();
/// let operation: ResourceOperation<Lookup, serde_json::Value> =
///     ResourceOperation::new(ResourceVerb::Show, "message", Lookup { d: "123".to_string() });
///
/// let request = RequestAssembler::new(&config, &NoAuthentication)
///     .assemble(&operation)
///     .unwrap();
///
/// assert_eq!(request.method, HttpMethod::Get);
/// assert_eq!(request.url.as_str(), "https://example.com/api/message?d=123");
/// ```
#[derive(Clone, Copy)]
pub struct RequestAssembler<'a> {
    config: &'a ApiConfig,
    authentication: &'a dyn AuthenticationStorage,
    encoder: QueryItemEncoder,
}

impl<'a> RequestAssembler<'a> {
    /// Creates an assembler for `config` and `authentication`.
    #[must_use]
    pub const fn new(config: &'a ApiConfig, authentication: &'a dyn AuthenticationStorage) -> Self {
        Self {
            config,
            authentication,
            encoder: QueryItemEncoder::new(),
        }
    }

    /// Assembles the wire request for `operation`.
    ///
    /// The returned request borrows the operation's parameters as its body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EncodingUnsupported`] if the parameters cannot be
    /// expressed as query items, and [`ApiError::InvalidUrl`] if the path is
    /// empty or cannot be resolved against the base URL.
    pub fn assemble<'op, P, R>(
        &self,
        operation: &'op ResourceOperation<P, R>,
    ) -> Result<HttpRequest<&'op P>, ApiError>
    where
        P: Serialize,
    {
        let (body, query_items) = self.make_parameters(operation)?;
        let url = self.make_url(operation.path(), &query_items)?;
        let headers = self.make_headers(&url, &body);

        Ok(HttpRequest {
            method: operation.verb().http_method(),
            url,
            headers,
            body,
            redact_request_body: operation.redacts_request_body(),
            redact_response_body: operation.redacts_response_body(),
        })
    }

    fn make_parameters<'op, P, R>(
        &self,
        operation: &'op ResourceOperation<P, R>,
    ) -> Result<(HttpRequestBody<&'op P>, Vec<QueryItem>), ApiError>
    where
        P: Serialize,
    {
        match operation.parameters() {
            Parameters::Empty => Ok((HttpRequestBody::Empty, Vec::new())),
            Parameters::Value(parameters) if is_nothing(parameters) => {
                Ok((HttpRequestBody::Empty, Vec::new()))
            }
            Parameters::Value(parameters) if operation.verb().sends_body() => {
                Ok((HttpRequestBody::Json(parameters), Vec::new()))
            }
            Parameters::Value(parameters) => {
                let items = self.encoder.encode(parameters)?;
                Ok((HttpRequestBody::Empty, items))
            }
        }
    }

    fn make_url(&self, path: &str, query_items: &[QueryItem]) -> Result<Url, ApiError> {
        let base_url = self.config.base_url();
        let invalid = || ApiError::InvalidUrl {
            path: path.to_string(),
            base_url: base_url.to_string(),
        };

        if path.trim().is_empty() {
            return Err(invalid());
        }
        let mut url = base_url.as_url().join(path).map_err(|_| invalid())?;
        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(invalid());
        }

        if !query_items.is_empty() {
            url.query_pairs_mut().extend_pairs(
                query_items
                    .iter()
                    .map(|item| (item.name.as_str(), item.value.as_str())),
            );
        }
        Ok(url)
    }

    fn make_headers<T>(&self, url: &Url, body: &HttpRequestBody<T>) -> BTreeMap<HttpHeader, String> {
        let mut headers = self.config.base_headers().clone();
        headers.insert(HttpHeader::Accept, APPLICATION_JSON.to_string());
        if body.is_json() {
            headers.insert(HttpHeader::ContentType, APPLICATION_JSON.to_string());
        }
        if let Some(value) = url
            .host_str()
            .and_then(|host| self.authentication.authentication_header(host))
        {
            headers.insert(HttpHeader::Authorization, value);
        }
        headers
    }
}
