//! Display text for failure notifications.
//!
//! Responsibilities:
//! - Translate `MessageKey`s into English messages.
//! - Collect handler notifications so commands can turn them into errors.
//!
//! Does NOT handle:
//! - Printing (errors are printed once, by `main`).
//!
//! Invariants:
//! - Only the first failure of a command is kept; later ones are logged.

use std::fmt;
use std::sync::Mutex;

use infra_admin_client::{ClientError, MessageKey, Notifier};

use crate::error::ExitCode;

/// English text for a message key.
pub fn message_text(key: MessageKey) -> &'static str {
    match key {
        MessageKey::AuthProvidersUpdateFailure => "Failed to update auth providers",
        MessageKey::InfraConfigsUpdateFailure => "Failed to update infra configs",
        MessageKey::ResetFailure => "Failed to reset infra configs",
        MessageKey::DataSharingUpdateFailure => "Failed to update data sharing",
        MessageKey::ValidationEmptyFields => "Some enabled sections have empty fields",
    }
}

/// A failed mutation, as reported to the user.
#[derive(Debug)]
pub struct CommandFailure {
    pub key: MessageKey,
    pub detail: Option<String>,
    pub exit_code: ExitCode,
}

impl CommandFailure {
    pub fn new(key: MessageKey, cause: Option<&ClientError>) -> Self {
        Self {
            key,
            detail: cause.map(ToString::to_string),
            exit_code: match cause {
                Some(e) => ExitCode::from(e),
                None if key == MessageKey::ValidationEmptyFields => ExitCode::ValidationError,
                None => ExitCode::GeneralError,
            },
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl fmt::Display for CommandFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(message_text(self.key))?;
        if let Some(ref detail) = self.detail {
            write!(f, ": {detail}")?;
        }
        Ok(())
    }
}

impl std::error::Error for CommandFailure {}

/// Notifier that keeps the first failure for the running command.
#[derive(Debug, Default)]
pub struct FailureNotifier {
    failure: Mutex<Option<CommandFailure>>,
}

impl FailureNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the recorded failure, falling back to a bare one for `key`.
    pub fn take_failure(&self, key: MessageKey) -> CommandFailure {
        self.failure
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
            .unwrap_or_else(|| CommandFailure::new(key, None))
    }
}

impl Notifier for FailureNotifier {
    fn notify_error(&self, key: MessageKey, error: Option<&ClientError>) {
        tracing::debug!(message_key = key.as_str(), "Recording failure notification");
        let Ok(mut slot) = self.failure.lock() else {
            return;
        };
        if slot.is_none() {
            *slot = Some(CommandFailure::new(key, error));
        } else {
            tracing::warn!(message_key = key.as_str(), "Additional failure after the first");
        }
    }
}
