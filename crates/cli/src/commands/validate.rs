//! `validate` command: report empty fields in enabled sections.
//!
//! Prints the empty fields and exits with a validation error when there
//! are any. Sends no mutations.

use anyhow::Result;
use infra_admin_client::MessageKey;
use infra_admin_client::settings::empty_fields;
use tracing::info;

use super::load_handler;
use crate::cancellation::CancellationToken;
use crate::formatters::{OutputFormat, get_formatter, output_result};
use crate::messages::{CommandFailure, FailureNotifier};

pub async fn run(
    config: infra_admin_config::Config,
    format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    info!("Validating infra configuration");
    let notifier = FailureNotifier::new();
    let handler = load_handler(&config, &notifier, cancel).await?;

    let empty = empty_fields(handler.current()?);
    output_result(&get_formatter(format).format_empty_fields(&empty)?);

    if empty.is_empty() {
        Ok(())
    } else {
        Err(CommandFailure::new(MessageKey::ValidationEmptyFields, None).into())
    }
}
