//! Integration tests for the resource client facade.
//!
//! These tests drive [`ResourceClient`] through the public API with an
//! in-memory transport and authentication source, verifying:
//! - Verb to method mapping and parameter placement
//! - Query encoding of nested parameters
//! - Header layering and authentication lookup
//! - Error precedence and short-circuiting
//! - Empty-format responses

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::header::{HeaderMap, HeaderValue};
use restlike::api::RequestAssembler;
use restlike::auth::{
    AuthenticationStorage, Credential, KeychainAuthentication, MemoryCredentialStore,
};
use restlike::clients::{HttpRawResponse, TransportRequest};
use restlike::query::QueryEncodeError;
use restlike::{
    ApiConfig, ApiError, ApiKey, BaseUrl, Empty, HttpError, HttpMethod, ResourceClient,
    ResourceOperation, ResourceVerb, Transport, TransportError,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// Fakes
// ============================================================================

/// Records every request and answers with a canned response.
struct FakeTransport {
    requests: Mutex<Vec<TransportRequest>>,
    respond: Box<dyn Fn(&TransportRequest) -> HttpRawResponse + Send + Sync>,
}

impl FakeTransport {
    fn new(
        respond: impl Fn(&TransportRequest) -> HttpRawResponse + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            respond: Box::new(respond),
        })
    }

    fn json(status: u16, body: &'static str) -> Arc<Self> {
        Self::new(move |request| {
            let mut headers = HeaderMap::new();
            headers.insert("content-type", HeaderValue::from_static("application/json"));
            HttpRawResponse::new(
                status,
                request.url.clone(),
                headers,
                Some(body.as_bytes().to_vec()),
            )
        })
    }

    fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: TransportRequest) -> HttpRawResponse {
        let response = (self.respond)(&request);
        self.requests.lock().push(request);
        response
    }
}

/// Returns a fixed header value for one host and records every lookup.
struct FakeAuthenticationStorage {
    host: &'static str,
    value: Option<&'static str>,
    lookups: Mutex<Vec<String>>,
}

impl FakeAuthenticationStorage {
    fn new(host: &'static str, value: Option<&'static str>) -> Arc<Self> {
        Arc::new(Self {
            host,
            value,
            lookups: Mutex::new(Vec::new()),
        })
    }
}

impl AuthenticationStorage for FakeAuthenticationStorage {
    fn authentication_header(&self, host: &str) -> Option<String> {
        self.lookups.lock().push(host.to_string());
        if host == self.host {
            self.value.map(str::to_string)
        } else {
            None
        }
    }
}

// ============================================================================
// Fixtures
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NestedData {
    is_on: bool,
    foo: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Search {
    name: String,
    nested_data: NestedData,
    array: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Lookup {
    d: String,
}

#[derive(Debug, Serialize)]
struct Login {
    email: String,
    password: String,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Message {
    text: String,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Session {
    token: String,
}

/// Serializes as raw bytes, which have no query representation.
struct Blob(Vec<u8>);

impl Serialize for Blob {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.0)
    }
}

#[derive(Serialize)]
struct Upload {
    data: Blob,
}

fn config() -> ApiConfig {
    ApiConfig::builder()
        .base_url(BaseUrl::new("https://example.com/api/").unwrap())
        .build()
        .unwrap()
}

fn frank() -> Search {
    Search {
        name: "frank".to_string(),
        nested_data: NestedData { is_on: true, foo: 42 },
        array: vec!["one".to_string(), "two".to_string(), "three".to_string()],
    }
}

fn lookup() -> Lookup {
    Lookup {
        d: "123".to_string(),
    }
}

fn query_pairs(request: &TransportRequest) -> Vec<(String, String)> {
    request
        .url
        .query_pairs()
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect()
}

fn pair(name: &str, value: &str) -> (String, String) {
    (name.to_string(), value.to_string())
}

// ============================================================================
// Parameter placement
// ============================================================================

#[tokio::test]
async fn test_show_sends_get_with_query_and_no_body() {
    let transport = FakeTransport::json(200, r#"{"text": "hi"}"#);
    let client = ResourceClient::new(
        config(),
        transport.clone(),
        FakeAuthenticationStorage::new("example.com", None),
    );
    let operation: ResourceOperation<Lookup, Message> =
        ResourceOperation::new(ResourceVerb::Show, "message", lookup());

    let message = client.call(&operation).await.unwrap();

    assert_eq!(message.text, "hi");
    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Get);
    assert_eq!(
        requests[0].url.as_str(),
        "https://example.com/api/message?d=123"
    );
    assert!(requests[0].body.is_none());
    assert_eq!(requests[0].header("content-type"), None);
}

#[tokio::test]
async fn test_index_encodes_nested_parameters_in_order() {
    let transport = FakeTransport::json(200, "[]");
    let client = ResourceClient::new(
        config(),
        transport.clone(),
        FakeAuthenticationStorage::new("example.com", None),
    );
    let operation: ResourceOperation<Search, Vec<Message>> =
        ResourceOperation::new(ResourceVerb::Index, "messages", frank());

    let messages = client.call(&operation).await.unwrap();

    assert!(messages.is_empty());
    assert_eq!(
        query_pairs(&transport.requests()[0]),
        vec![
            pair("name", "frank"),
            pair("nestedData[isOn]", "true"),
            pair("nestedData[foo]", "42"),
            pair("array[]", "one"),
            pair("array[]", "two"),
            pair("array[]", "three"),
        ]
    );
}

#[tokio::test]
async fn test_create_and_update_send_json_bodies() {
    let transport = FakeTransport::json(200, r#"{"token": "abc"}"#);
    let client = ResourceClient::new(
        config(),
        transport.clone(),
        FakeAuthenticationStorage::new("example.com", None),
    );
    let login = || Login {
        email: "user@example.com".to_string(),
        password: "hunter2".to_string(),
    };
    let create: ResourceOperation<Login, Session> =
        ResourceOperation::new(ResourceVerb::Create, "login", login()).with_redacted_request_body();
    let update: ResourceOperation<Login, Session> =
        ResourceOperation::new(ResourceVerb::Update, "login", login());

    let created = client.call(&create).await.unwrap();
    client.call(&update).await.unwrap();

    assert_eq!(created.token, "abc");
    let requests = transport.requests();
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(requests[1].method, HttpMethod::Put);
    for request in &requests {
        assert_eq!(request.url.query(), None);
        assert_eq!(request.header("content-type"), Some("application/json"));
        let body: serde_json::Value =
            serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"email": "user@example.com", "password": "hunter2"})
        );
    }
}

#[tokio::test]
async fn test_delete_sends_query_without_body() {
    let transport = FakeTransport::json(200, "{}");
    let client = ResourceClient::new(
        config(),
        transport.clone(),
        FakeAuthenticationStorage::new("example.com", None),
    );
    let operation: ResourceOperation<Lookup, Empty> =
        ResourceOperation::new(ResourceVerb::Delete, "message", lookup());

    client.call_empty(&operation).await.unwrap();

    let request = &transport.requests()[0];
    assert_eq!(request.method, HttpMethod::Delete);
    assert_eq!(request.url.query(), Some("d=123"));
    assert!(request.body.is_none());
}

#[tokio::test]
async fn test_empty_parameters_produce_no_query_marker() {
    let transport = FakeTransport::json(200, "{}");
    let client = ResourceClient::new(
        config(),
        transport.clone(),
        FakeAuthenticationStorage::new("example.com", None),
    );
    let operation: ResourceOperation<Empty, Empty> =
        ResourceOperation::without_parameters(ResourceVerb::Index, "messages");

    client.call(&operation).await.unwrap();

    assert_eq!(
        transport.requests()[0].url.as_str(),
        "https://example.com/api/messages"
    );
}

// ============================================================================
// Headers and authentication
// ============================================================================

#[tokio::test]
async fn test_authorization_header_is_exact_lookup_value() {
    let transport = FakeTransport::json(200, r#"{"text": "hi"}"#);
    let auth = FakeAuthenticationStorage::new("example.com", Some("Bearer valid-token"));
    let client = ResourceClient::new(config(), transport.clone(), auth.clone());
    let operation: ResourceOperation<Lookup, Message> =
        ResourceOperation::new(ResourceVerb::Show, "message", lookup());

    client.call(&operation).await.unwrap();

    let request = &transport.requests()[0];
    assert_eq!(request.header("authorization"), Some("Bearer valid-token"));
    assert_eq!(request.header("accept"), Some("application/json"));
    assert_eq!(*auth.lookups.lock(), vec!["example.com".to_string()]);
}

#[tokio::test]
async fn test_no_authorization_header_when_lookup_is_empty() {
    let transport = FakeTransport::json(200, r#"{"text": "hi"}"#);
    let client = ResourceClient::new(
        config(),
        transport.clone(),
        FakeAuthenticationStorage::new("other.com", Some("Bearer wrong-host")),
    );
    let operation: ResourceOperation<Lookup, Message> =
        ResourceOperation::new(ResourceVerb::Show, "message", lookup());

    client.call(&operation).await.unwrap();

    assert_eq!(transport.requests()[0].header("authorization"), None);
}

#[tokio::test]
async fn test_configured_headers_are_sent() {
    let transport = FakeTransport::json(200, "{}");
    let config = ApiConfig::builder()
        .base_url(BaseUrl::new("https://example.com/api/").unwrap())
        .api_key(ApiKey::new("key-123").unwrap())
        .header("X-Client-Build", "42")
        .user_agent_prefix("MyApp/1.0")
        .build()
        .unwrap();
    let client = ResourceClient::new(
        config,
        transport.clone(),
        FakeAuthenticationStorage::new("example.com", None),
    );
    let operation: ResourceOperation<Empty, Empty> =
        ResourceOperation::without_parameters(ResourceVerb::Index, "messages");

    client.call(&operation).await.unwrap();

    let request = &transport.requests()[0];
    assert_eq!(request.header("x-api-key"), Some("key-123"));
    assert_eq!(request.header("x-client-build"), Some("42"));
    assert!(request
        .header("user-agent")
        .unwrap()
        .starts_with("MyApp/1.0 | restlike v"));
}

#[tokio::test]
async fn test_keychain_authentication_end_to_end() {
    let transport = FakeTransport::json(200, r#"{"text": "hi"}"#);
    let auth = Arc::new(KeychainAuthentication::new(
        MemoryCredentialStore::new(),
        "default",
    ));
    auth.save_token("example.com", Credential::new("stored-token").unwrap());
    let client = ResourceClient::new(config(), transport.clone(), auth.clone());
    let operation: ResourceOperation<Lookup, Message> =
        ResourceOperation::new(ResourceVerb::Show, "message", lookup());

    client.call(&operation).await.unwrap();
    auth.clear_token("example.com");
    client.call(&operation).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].header("authorization"), Some("Bearer stored-token"));
    assert_eq!(requests[1].header("authorization"), None);
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_not_found_is_status_error_without_decoding() {
    let transport = FakeTransport::json(404, r#"{"text": "would decode fine"}"#);
    let client = ResourceClient::new(
        config(),
        transport,
        FakeAuthenticationStorage::new("example.com", None),
    );
    let operation: ResourceOperation<Lookup, Message> =
        ResourceOperation::new(ResourceVerb::Show, "message", lookup());

    let result = client.call(&operation).await;

    assert!(matches!(
        result,
        Err(ApiError::Http(HttpError::Status { code: 404 }))
    ));
}

#[tokio::test]
async fn test_empty_path_fails_before_transport() {
    let transport = FakeTransport::json(200, "{}");
    let auth = FakeAuthenticationStorage::new("example.com", None);
    let client = ResourceClient::new(config(), transport.clone(), auth.clone());
    let operation: ResourceOperation<Empty, Empty> =
        ResourceOperation::without_parameters(ResourceVerb::Show, "");

    let result = client.call(&operation).await;

    assert!(matches!(result, Err(ApiError::InvalidUrl { .. })));
    assert!(transport.requests().is_empty());
    assert!(auth.lookups.lock().is_empty());
}

#[tokio::test]
async fn test_unencodable_parameters_fail_before_transport() {
    let transport = FakeTransport::json(200, "{}");
    let client = ResourceClient::new(
        config(),
        transport.clone(),
        FakeAuthenticationStorage::new("example.com", None),
    );
    let operation: ResourceOperation<Upload, Empty> = ResourceOperation::new(
        ResourceVerb::Index,
        "uploads",
        Upload {
            data: Blob(vec![1, 2, 3]),
        },
    );

    let result = client.call(&operation).await;

    assert!(matches!(
        result,
        Err(ApiError::EncodingUnsupported(QueryEncodeError::Unsupported { .. }))
    ));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_transport_error_passes_through() {
    let transport = FakeTransport::new(|_| HttpRawResponse::from_error(TransportError::Cancelled));
    let client = ResourceClient::new(
        config(),
        transport,
        FakeAuthenticationStorage::new("example.com", None),
    );
    let operation: ResourceOperation<Lookup, Message> =
        ResourceOperation::new(ResourceVerb::Show, "message", lookup());

    let result = client.call(&operation).await;

    assert!(matches!(
        result,
        Err(ApiError::Http(HttpError::Transport(TransportError::Cancelled)))
    ));
}

#[tokio::test]
async fn test_response_without_status_is_malformed() {
    let transport = FakeTransport::new(|_| HttpRawResponse::default());
    let client = ResourceClient::new(
        config(),
        transport,
        FakeAuthenticationStorage::new("example.com", None),
    );
    let operation: ResourceOperation<Empty, Empty> =
        ResourceOperation::without_parameters(ResourceVerb::Index, "messages");

    let result = client.call_empty(&operation).await;

    assert!(matches!(
        result,
        Err(ApiError::Http(HttpError::MalformedResponse))
    ));
}

#[tokio::test]
async fn test_wrong_json_shape_is_decode_error() {
    let transport = FakeTransport::json(200, r#"{"unexpected": true}"#);
    let client = ResourceClient::new(
        config(),
        transport,
        FakeAuthenticationStorage::new("example.com", None),
    );
    let operation: ResourceOperation<Lookup, Message> =
        ResourceOperation::new(ResourceVerb::Show, "message", lookup());

    let result = client.call(&operation).await;

    assert!(matches!(result, Err(ApiError::Http(HttpError::Decode(_)))));
}

// ============================================================================
// Empty format
// ============================================================================

#[test]
fn test_empty_format_ignores_headers_and_body() {
    let transport = FakeTransport::new(|request| {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("text/html"));
        HttpRawResponse::new(200, request.url.clone(), headers, None)
    });
    let client = ResourceClient::new(
        config(),
        transport,
        FakeAuthenticationStorage::new("example.com", None),
    );
    let operation: ResourceOperation<Empty, Empty> =
        ResourceOperation::without_parameters(ResourceVerb::Delete, "session");

    let result = tokio_test::block_on(client.call_empty(&operation));

    assert_eq!(result.unwrap(), Empty);
}

#[test]
fn test_assembly_is_deterministic() {
    let config = config();
    let auth = FakeAuthenticationStorage::new("example.com", Some("Bearer valid-token"));
    let operation: ResourceOperation<Search, Empty> =
        ResourceOperation::new(ResourceVerb::Index, "search", frank());
    let assembler = RequestAssembler::new(&config, auth.as_ref());

    let first = assembler.assemble(&operation).unwrap();
    let second = assembler.assemble(&operation).unwrap();

    assert_eq!(first.url, second.url);
    assert_eq!(first.headers, second.headers);
}
