//! The [`ResourceClient`] facade.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::task::JoinHandle;

use crate::api::assembler::RequestAssembler;
use crate::api::errors::ApiError;
use crate::api::operation::ResourceOperation;
use crate::auth::AuthenticationStorage;
use crate::clients::{
    Empty, HttpClient, HttpResponse, ReqwestTransport, ResponseFormat, Transport, TransportError,
};
use crate::config::ApiConfig;

/// Client for calling REST resources.
///
/// Each call runs the same fixed pipeline: assemble the request, hand it to
/// the transport exactly once, and decode the response. The first failing
/// stage ends the call; nothing is retried.
///
/// # Thread Safety
///
/// `ResourceClient` is `Clone`, `Send`, and `Sync`. Clones share the
/// configuration, transport and authentication source.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use restlike::auth::NoAuthentication;
/// use restlike::{ApiConfig, BaseUrl, ResourceClient, ResourceOperation, ResourceVerb};
///
/// let config = ApiConfig::builder()
///     .base_url(BaseUrl::new("https://example.com/api/")?)
///     .build()?;
/// let client = ResourceClient::with_reqwest(config, Arc::new(NoAuthentication))?;
///
/// let operation: ResourceOperation<Lookup, Message> =
///     ResourceOperation::new(ResourceVerb::Show, "message", Lookup { d: "123".into() });
/// let message = client.call(&operation).await?;
/// ```
#[derive(Clone)]
pub struct ResourceClient {
    http_client: HttpClient,
    config: Arc<ApiConfig>,
    authentication: Arc<dyn AuthenticationStorage>,
}

// Verify ResourceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceClient>();
};

impl ResourceClient {
    /// Creates a client sending through `transport`.
    #[must_use]
    pub fn new(
        config: ApiConfig,
        transport: Arc<dyn Transport>,
        authentication: Arc<dyn AuthenticationStorage>,
    ) -> Self {
        Self {
            http_client: HttpClient::new(transport),
            config: Arc::new(config),
            authentication,
        }
    }

    /// Creates a client backed by a [`ReqwestTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the HTTP client cannot be created.
    pub fn with_reqwest(
        config: ApiConfig,
        authentication: Arc<dyn AuthenticationStorage>,
    ) -> Result<Self, TransportError> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::new(config, Arc::new(transport), authentication))
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Returns the service name, which is the host of the base URL.
    #[must_use]
    pub fn service(&self) -> &str {
        self.config.base_url().host()
    }

    /// Performs `operation` and decodes the JSON response body as `R`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidUrl`] or [`ApiError::EncodingUnsupported`] if the
    ///   request cannot be assembled; the transport is not invoked
    /// - [`ApiError::Http`] if the exchange or decoding fails
    pub async fn call<P, R>(&self, operation: &ResourceOperation<P, R>) -> Result<R, ApiError>
    where
        P: Serialize + Sync,
        R: DeserializeOwned,
    {
        Ok(self.call_with_response(operation).await?.body)
    }

    /// Performs `operation` for a response that carries no data.
    ///
    /// The response body is never parsed.
    ///
    /// # Errors
    ///
    /// Same as [`call`](Self::call), except that body decoding cannot fail.
    pub async fn call_empty<P>(
        &self,
        operation: &ResourceOperation<P, Empty>,
    ) -> Result<Empty, ApiError>
    where
        P: Serialize + Sync,
    {
        let response = self.execute(operation, ResponseFormat::Empty).await?;
        Ok(response.body)
    }

    /// Performs `operation` and returns the decoded body with the response
    /// status, URL and headers.
    ///
    /// # Errors
    ///
    /// Same as [`call`](Self::call).
    pub async fn call_with_response<P, R>(
        &self,
        operation: &ResourceOperation<P, R>,
    ) -> Result<HttpResponse<R>, ApiError>
    where
        P: Serialize + Sync,
        R: DeserializeOwned,
    {
        self.execute(operation, ResponseFormat::Json).await
    }

    /// Performs `operation` on a background task.
    ///
    /// Aborting the returned handle cancels the in-flight exchange.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    pub fn spawn<P, R>(&self, operation: ResourceOperation<P, R>) -> JoinHandle<Result<R, ApiError>>
    where
        P: Serialize + Send + Sync + 'static,
        R: DeserializeOwned + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move { client.call(&operation).await })
    }

    async fn execute<P, R>(
        &self,
        operation: &ResourceOperation<P, R>,
        format: ResponseFormat,
    ) -> Result<HttpResponse<R>, ApiError>
    where
        P: Serialize + Sync,
        R: DeserializeOwned,
    {
        let request =
            RequestAssembler::new(&self.config, self.authentication.as_ref()).assemble(operation)?;
        let response = self.http_client.send(&request, format).await?;
        Ok(response)
    }
}

impl fmt::Debug for ResourceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
