//! Shared test utilities for `infra-admin` integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Mount GraphQL fixtures on a mock server.
//!
//! Invariants / Assumptions:
//! - `INFRA_ADMIN_API_TOKEN` is set to "test-token" unless overridden.

#![allow(dead_code, unused_imports)]

use assert_cmd::Command;
use infra_admin_client::testing::load_fixture;
use wiremock::matchers::{body_partial_json, method, path};
pub use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "test-token";

/// Returns a hermetic `infra-admin` command.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `INFRA_ADMIN_API_TOKEN` is set to a dummy value.
/// - Other connection env vars are cleared so the host cannot leak in.
pub fn cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("infra-admin");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("INFRA_ADMIN_API_TOKEN", TEST_TOKEN);

    cmd.env_remove("INFRA_ADMIN_BASE_URL")
        .env_remove("INFRA_ADMIN_PROFILE")
        .env_remove("INFRA_ADMIN_CONFIG_PATH")
        .env_remove("INFRA_ADMIN_TIMEOUT")
        .env_remove("INFRA_ADMIN_SKIP_VERIFY")
        .env_remove("INFRA_ADMIN_OTLP_ENDPOINT")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic command pointed at `server`.
pub fn cmd_for(server: &MockServer) -> Command {
    let mut cmd = cmd();
    cmd.env("INFRA_ADMIN_BASE_URL", server.uri());
    cmd
}

/// Matches a POST to `/graphql` for the named operation.
pub fn graphql_operation(operation: &str) -> MockBuilder {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(
            serde_json::json!({ "operationName": operation }),
        ))
}

pub async fn mount_fixture(server: &MockServer, operation: &str, fixture: &str) {
    graphql_operation(operation)
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture(fixture)))
        .mount(server)
        .await;
}

/// A server answering both reads from the standard fixtures.
pub async fn loaded_server() -> MockServer {
    let server = MockServer::start().await;
    mount_fixture(&server, "InfraConfigs", "infra_configs/infra_configs.json").await;
    mount_fixture(
        &server,
        "AllowedAuthProviders",
        "infra_configs/allowed_auth_providers.json",
    )
    .await;
    server
}

/// JSON bodies of every request received for `operation`.
pub async fn request_bodies(server: &MockServer, operation: &str) -> Vec<serde_json::Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter_map(|r| serde_json::from_slice::<serde_json::Value>(&r.body).ok())
        .filter(|b| b["operationName"] == operation)
        .collect()
}
