//! `data-sharing` command: toggle anonymous usage data collection.

use anyhow::Result;
use infra_admin_client::{ConfigHandler, MessageKey};
use tracing::info;

use super::build_client;
use crate::cancellation::CancellationToken;
use crate::messages::FailureNotifier;

pub async fn run(
    config: infra_admin_config::Config,
    enabled: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    info!(enabled, "Updating data sharing");
    let notifier = FailureNotifier::new();
    let mut handler = ConfigHandler::new(build_client(&config)?, &notifier);

    if cancel.run(handler.update_data_sharing(enabled)).await? {
        eprintln!(
            "Data sharing {}.",
            if enabled { "enabled" } else { "disabled" }
        );
        Ok(())
    } else {
        Err(notifier
            .take_failure(MessageKey::DataSharingUpdateFailure)
            .into())
    }
}
