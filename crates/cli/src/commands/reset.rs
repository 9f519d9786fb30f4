//! `reset` command: restore server defaults for every infra config.

use anyhow::Result;
use infra_admin_client::{ClientError, ConfigHandler, MessageKey};
use tracing::info;

use super::build_client;
use crate::cancellation::CancellationToken;
use crate::messages::FailureNotifier;

pub async fn run(
    config: infra_admin_config::Config,
    yes: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    if !yes {
        return Err(ClientError::Validation(
            "reset overwrites every infra config; pass --yes to confirm".to_string(),
        )
        .into());
    }

    info!("Resetting infra configs");
    let notifier = FailureNotifier::new();
    let handler = ConfigHandler::new(build_client(&config)?, &notifier);

    if cancel.run(handler.reset_infra_configs()).await? {
        eprintln!("Infra configs reset to defaults.");
        Ok(())
    } else {
        Err(notifier.take_failure(MessageKey::ResetFailure).into())
    }
}
