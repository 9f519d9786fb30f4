//! `set`, `enable` and `disable` commands.
//!
//! Responsibilities:
//! - Apply one edit to the working copy of a freshly loaded configuration.
//! - Save through the handler (validation, provider directives, bulk update).
//!
//! Does NOT handle:
//! - Data sharing (see `data_sharing`), which is its own mutation.
//!
//! Invariants:
//! - Nothing is sent when the edit leaves the configuration unchanged.
//! - An unknown field aborts before any request is sent.
//! - Sections without a provider directive (OIDC) cannot be toggled.

use anyhow::Result;
use infra_admin_client::{ClientError, Config, MessageKey, SaveOutcome, Section};
use tracing::info;

use super::load_handler;
use crate::cancellation::CancellationToken;
use crate::messages::FailureNotifier;

/// Set each `name=value` pair on `section`, then save.
pub async fn run_set(
    config: infra_admin_config::Config,
    section: Section,
    fields: Vec<(String, String)>,
    cancel: &CancellationToken,
) -> Result<()> {
    info!(%section, fields = fields.len(), "Setting fields");
    edit_and_save(&config, cancel, |working| {
        for (name, value) in fields {
            working.set_field(section, &name, value)?;
        }
        if !working.is_enabled(section) {
            eprintln!(
                "Warning: {section} is disabled; its fields are not sent until it is enabled."
            );
        }
        Ok(())
    })
    .await
}

/// Enable or disable `section`, then save.
pub async fn run_toggle(
    config: infra_admin_config::Config,
    section: Section,
    enabled: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    if !section.has_directive() {
        return Err(ClientError::Validation(format!(
            "{section} cannot be toggled here; it is turned on through the server's allowed provider list"
        ))
        .into());
    }

    info!(%section, enabled, "Toggling section");
    edit_and_save(&config, cancel, |working| {
        working.set_enabled(section, enabled);
        Ok(())
    })
    .await
}

async fn edit_and_save<F>(
    config: &infra_admin_config::Config,
    cancel: &CancellationToken,
    edit: F,
) -> Result<()>
where
    F: FnOnce(&mut Config) -> infra_admin_client::Result<()>,
{
    let notifier = FailureNotifier::new();
    let mut handler = load_handler(config, &notifier, cancel).await?;

    edit(handler.working_mut()?)?;

    if !handler.is_dirty() {
        eprintln!("No changes to save.");
        return Ok(());
    }

    match cancel.run(handler.save()).await? {
        SaveOutcome::Saved => {
            eprintln!("Configuration saved.");
            Ok(())
        }
        SaveOutcome::Invalid(empty) => {
            let listed: Vec<String> = empty
                .iter()
                .map(|f| format!("{}.{}", f.section, f.field))
                .collect();
            Err(notifier
                .take_failure(MessageKey::ValidationEmptyFields)
                .with_detail(listed.join(", "))
                .into())
        }
        SaveOutcome::Failed => Err(notifier
            .take_failure(MessageKey::InfraConfigsUpdateFailure)
            .into()),
    }
}

