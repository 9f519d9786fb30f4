//! Command implementations.
//!
//! Each submodule runs one subcommand against an [`InfraAdminClient`] built
//! from the loaded connection config. Network calls race the cancellation
//! token so Ctrl+C interrupts them.

pub mod data_sharing;
pub mod edit;
pub mod providers;
pub mod reset;
pub mod show;
pub mod validate;

use anyhow::{Context, Result};
use infra_admin_client::{ConfigHandler, InfraAdminClient, MetricsCollector};

use crate::cancellation::CancellationToken;
use crate::messages::FailureNotifier;

/// Handler whose failures are collected by a borrowed [`FailureNotifier`].
pub type Handler<'n> = ConfigHandler<InfraAdminClient, &'n FailureNotifier>;

pub(crate) fn build_client(config: &infra_admin_config::Config) -> Result<InfraAdminClient> {
    InfraAdminClient::builder()
        .from_config(config)
        .metrics(MetricsCollector::new())
        .build()
        .context("Failed to build client")
}

/// Build a handler and load both reads.
pub(crate) async fn load_handler<'n>(
    config: &infra_admin_config::Config,
    notifier: &'n FailureNotifier,
    cancel: &CancellationToken,
) -> Result<Handler<'n>> {
    let mut handler = ConfigHandler::new(build_client(config)?, notifier);
    cancel
        .run(handler.load())
        .await?
        .context("Failed to load infra configuration")?;
    Ok(handler)
}
