//! Integration tests for structured exit codes.
//!
//! These tests verify that `infra-admin` returns the documented exit codes
//! for different failure modes so scripts can react to them.

mod common;

use common::*;
use predicates::prelude::*;

#[tokio::test]
async fn test_success_returns_exit_code_0() {
    let server = loaded_server().await;
    cmd_for(&server).arg("providers").assert().code(0);
}

#[tokio::test]
async fn test_http_401_returns_exit_code_2() {
    let server = MockServer::start().await;
    graphql_operation("AllowedAuthProviders")
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    cmd_for(&server)
        .env("INFRA_ADMIN_API_TOKEN", "invalid-token")
        .arg("providers")
        .assert()
        .code(2);
}

#[tokio::test]
async fn test_graphql_auth_error_returns_exit_code_2() {
    let server = MockServer::start().await;
    mount_fixture(&server, "InfraConfigs", "infra_configs/graphql_error.json").await;
    mount_fixture(
        &server,
        "AllowedAuthProviders",
        "infra_configs/allowed_auth_providers.json",
    )
    .await;

    cmd_for(&server)
        .arg("show")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to load infra configuration"))
        .stderr(predicate::str::contains("auth/fail"));
}

#[test]
fn test_connection_refused_returns_exit_code_3() {
    cmd()
        .env("INFRA_ADMIN_BASE_URL", "http://127.0.0.1:1")
        .arg("show")
        .assert()
        .code(3);
}

#[tokio::test]
async fn test_forbidden_returns_exit_code_6() {
    let server = MockServer::start().await;
    graphql_operation("AllowedAuthProviders")
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&server)
        .await;

    cmd_for(&server).arg("providers").assert().code(6);
}

#[tokio::test]
async fn test_malformed_response_returns_exit_code_5() {
    let server = MockServer::start().await;
    graphql_operation("AllowedAuthProviders")
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    cmd_for(&server).arg("providers").assert().code(5);
}

#[test]
fn test_missing_token_returns_exit_code_1() {
    cmd()
        .env_remove("INFRA_ADMIN_API_TOKEN")
        .env("INFRA_ADMIN_BASE_URL", "http://127.0.0.1:1")
        .arg("show")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to build configuration"));
}

#[test]
fn test_invalid_section_is_rejected_by_parser() {
    cmd()
        .env("INFRA_ADMIN_BASE_URL", "http://127.0.0.1:1")
        .args(["enable", "twitter"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("twitter"));
}
