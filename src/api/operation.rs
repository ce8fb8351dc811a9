//! Resource operations: what a caller asks the client to do.

use std::fmt;
use std::marker::PhantomData;

use crate::clients::{Empty, HttpMethod};

/// The kind of action an operation performs on a resource.
///
/// Each verb maps to exactly one HTTP method and decides whether parameters
/// travel as a JSON body or as query items.
///
/// | Verb     | Method   | Parameters  |
/// |----------|----------|-------------|
/// | `Index`  | `GET`    | query       |
/// | `Show`   | `GET`    | query       |
/// | `Create` | `POST`   | JSON body   |
/// | `Update` | `PUT`    | JSON body   |
/// | `Delete` | `DELETE` | query       |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceVerb {
    /// List a collection.
    Index,
    /// Fetch one resource.
    Show,
    /// Create a resource.
    Create,
    /// Update a resource.
    Update,
    /// Delete a resource.
    Delete,
}

impl ResourceVerb {
    /// Returns the HTTP method for this verb.
    #[must_use]
    pub const fn http_method(self) -> HttpMethod {
        match self {
            Self::Index | Self::Show => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns `true` if parameters are sent as a JSON body.
    #[must_use]
    pub const fn sends_body(self) -> bool {
        matches!(self, Self::Create | Self::Update)
    }
}

impl From<ResourceVerb> for HttpMethod {
    fn from(verb: ResourceVerb) -> Self {
        verb.http_method()
    }
}

impl fmt::Display for ResourceVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Index => "index",
            Self::Show => "show",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// The parameters of an operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Parameters<P> {
    /// No parameters. The query encoder is never invoked.
    Empty,
    /// Parameters sent as a body or query items depending on the verb.
    Value(P),
}

/// A request for one action on a resource, typed by its parameters `P` and
/// its decoded result `R`.
///
/// # Example
///
/// ```rust
/// use restlike::{Empty, ResourceOperation, ResourceVerb};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize)]
/// struct Login {
///     email: String,
///     password: String,
/// }
///
/// #[derive(Deserialize)]
/// struct Session {
///     token: String,
/// }
///
/// let login: ResourceOperation<Login, Session> = ResourceOperation::new(
///     ResourceVerb::Create,
///     "login",
///     Login {
///         email: "user@example.com".to_string(),
///         password: "hunter2".to_string(),
///     },
/// )
/// .with_redacted_request_body();
///
/// let logout: ResourceOperation<Empty, Empty> =
///     ResourceOperation::without_parameters(ResourceVerb::Delete, "session");
///
/// assert!(login.redacts_request_body());
/// assert_eq!(logout.path(), "session");
/// ```
pub struct ResourceOperation<P, R> {
    verb: ResourceVerb,
    path: String,
    parameters: Parameters<P>,
    redact_request_body: bool,
    redact_response_body: bool,
    resource: PhantomData<fn() -> R>,
}

impl<P, R> ResourceOperation<P, R> {
    /// Creates an operation with parameters.
    #[must_use]
    pub fn new(verb: ResourceVerb, path: impl Into<String>, parameters: P) -> Self {
        Self::with_parameters(verb, path, Parameters::Value(parameters))
    }

    /// Creates an operation from explicit [`Parameters`].
    #[must_use]
    pub fn with_parameters(
        verb: ResourceVerb,
        path: impl Into<String>,
        parameters: Parameters<P>,
    ) -> Self {
        Self {
            verb,
            path: path.into(),
            parameters,
            redact_request_body: false,
            redact_response_body: false,
            resource: PhantomData,
        }
    }

    /// Keeps the request body out of logs.
    #[must_use]
    pub const fn with_redacted_request_body(mut self) -> Self {
        self.redact_request_body = true;
        self
    }

    /// Keeps the response body out of logs.
    #[must_use]
    pub const fn with_redacted_response_body(mut self) -> Self {
        self.redact_response_body = true;
        self
    }

    /// Returns the verb.
    #[must_use]
    pub const fn verb(&self) -> ResourceVerb {
        self.verb
    }

    /// Returns the path, relative to the configured base URL.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the parameters.
    #[must_use]
    pub const fn parameters(&self) -> &Parameters<P> {
        &self.parameters
    }

    /// Returns `true` if the request body is kept out of logs.
    #[must_use]
    pub const fn redacts_request_body(&self) -> bool {
        self.redact_request_body
    }

    /// Returns `true` if the response body is kept out of logs.
    #[must_use]
    pub const fn redacts_response_body(&self) -> bool {
        self.redact_response_body
    }
}

impl<R> ResourceOperation<Empty, R> {
    /// Creates an operation without parameters.
    #[must_use]
    pub fn without_parameters(verb: ResourceVerb, path: impl Into<String>) -> Self {
        Self::with_parameters(verb, path, Parameters::Empty)
    }
}

impl<P: Clone, R> Clone for ResourceOperation<P, R> {
    fn clone(&self) -> Self {
        Self {
            verb: self.verb,
            path: self.path.clone(),
            parameters: self.parameters.clone(),
            redact_request_body: self.redact_request_body,
            redact_response_body: self.redact_response_body,
            resource: PhantomData,
        }
    }
}

impl<P, R> fmt::Debug for ResourceOperation<P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceOperation")
            .field("verb", &self.verb)
            .field("path", &self.path)
            .field(
                "parameters",
                &matches!(self.parameters, Parameters::Value(_)),
            )
            .field("redact_request_body", &self.redact_request_body)
            .field("redact_response_body", &self.redact_response_body)
            .finish()
    }
}
