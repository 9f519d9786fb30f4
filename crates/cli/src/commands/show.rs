//! `show` command: print the loaded configuration.

use anyhow::Result;
use tracing::info;

use super::load_handler;
use crate::cancellation::CancellationToken;
use crate::formatters::{OutputFormat, get_formatter, mask_secrets, output_result};
use crate::messages::FailureNotifier;

pub async fn run(
    config: infra_admin_config::Config,
    show_secrets: bool,
    format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    info!("Loading infra configuration");
    let notifier = FailureNotifier::new();
    let handler = load_handler(&config, &notifier, cancel).await?;

    let current = handler.current()?;
    let output = if show_secrets {
        get_formatter(format).format_config(current)?
    } else {
        get_formatter(format).format_config(&mask_secrets(current))?
    };
    output_result(&output);
    Ok(())
}
