//! `providers` command: list the auth providers the server allows.

use anyhow::{Context, Result};
use infra_admin_client::InfraConfigApi;
use tracing::info;

use super::build_client;
use crate::cancellation::CancellationToken;
use crate::formatters::{OutputFormat, get_formatter, output_result};

pub async fn run(
    config: infra_admin_config::Config,
    format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    info!("Listing allowed auth providers");
    let client = build_client(&config)?;

    let providers = cancel
        .run(client.allowed_auth_providers())
        .await?
        .context("Failed to fetch allowed auth providers")?;

    output_result(&get_formatter(format).format_providers(&providers)?);
    Ok(())
}
