//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Mock servers answer GraphQL operations on `/graphql`, matched by `operationName`
//!
//! # What this does NOT handle
//! - Test-specific assertions or test logic

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};

#[allow(unused_imports)]
pub use infra_admin_client::testing::load_fixture;

#[allow(unused_imports)]
pub use infra_admin_client::endpoints;
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Bearer token used by every test client.
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-token";

/// GraphQL endpoint URL of a mock server.
#[allow(dead_code)]
pub fn graphql_url(server: &MockServer) -> String {
    format!("{}/graphql", server.uri())
}

/// A mock for one GraphQL operation, ready for `.respond_with(...)`.
#[allow(dead_code)]
pub fn graphql_operation(operation_name: &str) -> wiremock::MockBuilder {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "operationName": operation_name })))
}

/// Mount `fixture` as the 200 response for `operation_name`.
#[allow(dead_code)]
pub async fn mount_fixture(server: &MockServer, operation_name: &str, fixture: &str) {
    graphql_operation(operation_name)
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture(fixture)))
        .mount(server)
        .await;
}

/// A client pointed at the mock server.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> infra_admin_client::InfraAdminClient {
    infra_admin_client::InfraAdminClient::builder()
        .base_url(server.uri())
        .api_token(secrecy::SecretString::new(TEST_TOKEN.to_string().into()))
        .build()
        .expect("client builds")
}

/// JSON bodies of every request the server received for `operation_name`.
#[allow(dead_code)]
pub async fn request_bodies(server: &MockServer, operation_name: &str) -> Vec<serde_json::Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter_map(|r| serde_json::from_slice::<serde_json::Value>(&r.body).ok())
        .filter(|body| body["operationName"] == operation_name)
        .collect()
}
