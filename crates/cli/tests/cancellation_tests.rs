//! Integration tests for Ctrl+C/SIGINT handling.
//!
//! Unix-only because they send SIGINT to a child process. We assert:
//! - exit code is 130
//! - stderr contains the cancellation message
//! - no mutation is sent after the interrupt

#![cfg(unix)]

mod common;

use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use common::*;
use infra_admin_client::testing::load_fixture;
use tokio::sync::Notify;

fn infra_admin_bin() -> &'static std::path::Path {
    assert_cmd::cargo::cargo_bin!("infra-admin")
}

fn send_sigint(pid: u32) {
    // SAFETY: standard Unix kill syscall
    unsafe {
        libc::kill(pid as i32, libc::SIGINT);
    }
}

#[tokio::test]
async fn test_ctrl_c_during_load_exits_130_with_message() {
    let server = MockServer::start().await;
    mount_fixture(
        &server,
        "AllowedAuthProviders",
        "infra_configs/allowed_auth_providers.json",
    )
    .await;

    let request_seen = Arc::new(Notify::new());
    let request_seen_clone = Arc::clone(&request_seen);
    let body = load_fixture("infra_configs/infra_configs.json");

    graphql_operation("InfraConfigs")
        .respond_with(move |_req: &wiremock::Request| {
            request_seen_clone.notify_one();
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(60))
                .set_body_json(body.clone())
        })
        .mount(&server)
        .await;

    let child = tokio::process::Command::new(infra_admin_bin())
        .env("DOTENV_DISABLED", "1")
        .env("INFRA_ADMIN_BASE_URL", server.uri())
        .env("INFRA_ADMIN_API_TOKEN", TEST_TOKEN)
        .env_remove("INFRA_ADMIN_PROFILE")
        .env_remove("INFRA_ADMIN_CONFIG_PATH")
        .args(["enable", "github"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn infra-admin");

    let pid = child.id().expect("child pid");
    tokio::time::timeout(Duration::from_secs(5), request_seen.notified())
        .await
        .expect("expected infra configs request before SIGINT");
    send_sigint(pid);

    let output = tokio::time::timeout(Duration::from_secs(5), child.wait_with_output())
        .await
        .expect("process should exit promptly")
        .expect("wait_with_output ok");

    assert_eq!(output.status.code(), Some(130));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Operation cancelled by user"));
    assert!(request_bodies(&server, "EnableAndDisableSSO").await.is_empty());
}
