//! End-to-end tests for [`ResourceClient`] over [`ReqwestTransport`].
//!
//! These tests use `wiremock` to stand in for a real API server and verify
//! what actually goes over the wire.

use std::sync::Arc;

use restlike::auth::{NoAuthentication, StaticAuthentication};
use restlike::{
    ApiConfig, ApiError, ApiKey, BaseUrl, Empty, HttpError, ResourceClient, ResourceOperation,
    ResourceVerb, TransportError,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Serialize)]
struct Lookup {
    d: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Filter {
    is_on: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Search {
    name: String,
    nested_data: Filter,
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

fn config_for(server: &MockServer) -> ApiConfig {
    ApiConfig::builder()
        .base_url(BaseUrl::new(format!("{}/api/", server.uri())).unwrap())
        .build()
        .unwrap()
}

fn client_for(server: &MockServer) -> ResourceClient {
    let auth = StaticAuthentication::new().with_header("127.0.0.1", "Bearer valid-token");
    ResourceClient::with_reqwest(config_for(server), Arc::new(auth)).unwrap()
}

#[tokio::test]
async fn test_show_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/message"))
        .and(query_param("d", "123"))
        .and(header("authorization", "Bearer valid-token"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "hello"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let operation: ResourceOperation<Lookup, Message> = ResourceOperation::new(
        ResourceVerb::Show,
        "message",
        Lookup {
            d: "123".to_string(),
        },
    );

    let message = client.call(&operation).await.unwrap();

    assert_eq!(
        message,
        Message {
            text: "hello".to_string()
        }
    );
}

#[tokio::test]
async fn test_index_sends_bracketed_query_items() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("name", "frank"))
        .and(query_param("nestedData[isOn]", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let operation: ResourceOperation<Search, Vec<Message>> = ResourceOperation::new(
        ResourceVerb::Index,
        "search",
        Search {
            name: "frank".to_string(),
            nested_data: Filter { is_on: true },
        },
    );

    let messages = client.call(&operation).await.unwrap();

    assert!(messages.is_empty());
}

#[tokio::test]
async fn test_create_posts_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "email": "user@example.com",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"token": "abc"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let operation: ResourceOperation<Login, Session> = ResourceOperation::new(
        ResourceVerb::Create,
        "login",
        Login {
            email: "user@example.com".to_string(),
            password: "hunter2".to_string(),
        },
    )
    .with_redacted_request_body()
    .with_redacted_response_body();

    let response = client.call_with_response(&operation).await.unwrap();

    assert_eq!(response.status, 201);
    assert_eq!(response.body.token, "abc");
    assert_eq!(response.header("Content-Type"), Some("application/json"));
}

#[tokio::test]
async fn test_configured_api_key_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/messages"))
        .and(header("x-api-key", "key-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = ApiConfig::builder()
        .base_url(BaseUrl::new(format!("{}/api/", server.uri())).unwrap())
        .api_key(ApiKey::new("key-123").unwrap())
        .build()
        .unwrap();
    let client = ResourceClient::with_reqwest(config, Arc::new(NoAuthentication)).unwrap();
    let operation: ResourceOperation<Empty, Vec<Message>> =
        ResourceOperation::without_parameters(ResourceVerb::Index, "messages");

    client.call(&operation).await.unwrap();
}

#[tokio::test]
async fn test_not_found_maps_to_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/message"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "missing"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let operation: ResourceOperation<Lookup, Message> = ResourceOperation::new(
        ResourceVerb::Show,
        "message",
        Lookup {
            d: "404".to_string(),
        },
    );

    let result = client.call(&operation).await;

    match result {
        Err(error) => {
            assert_eq!(error.status_code(), Some(404));
            assert!(matches!(
                error,
                ApiError::Http(HttpError::Status { code: 404 })
            ));
        }
        Ok(message) => panic!("Expected status error, got {message:?}"),
    }
}

#[tokio::test]
async fn test_delete_with_no_content_decodes_empty() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/session"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let operation: ResourceOperation<Empty, Empty> =
        ResourceOperation::without_parameters(ResourceVerb::Delete, "session");

    let result = client.call_empty(&operation).await.unwrap();

    assert_eq!(result, Empty);
}

#[tokio::test]
async fn test_spawned_call_completes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/message"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "later"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let operation: ResourceOperation<Lookup, Message> = ResourceOperation::new(
        ResourceVerb::Show,
        "message",
        Lookup {
            d: "1".to_string(),
        },
    );

    let message = client.spawn(operation).await.unwrap().unwrap();

    assert_eq!(message.text, "later");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let config = ApiConfig::builder()
        .base_url(BaseUrl::new("http://127.0.0.1:1/api/").unwrap())
        .build()
        .unwrap();
    let client = ResourceClient::with_reqwest(config, Arc::new(NoAuthentication)).unwrap();
    let operation: ResourceOperation<Empty, Empty> =
        ResourceOperation::without_parameters(ResourceVerb::Index, "messages");

    let result = client.call(&operation).await;

    assert!(matches!(
        result,
        Err(ApiError::Http(HttpError::Transport(TransportError::Network(_))))
    ));
}
