//! User-facing failure notifications.
//!
//! Mutations report failures through a [`Notifier`] using a [`MessageKey`];
//! front ends translate the key into display text.

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::error::ClientError;

/// Translation keys for failure notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    AuthProvidersUpdateFailure,
    InfraConfigsUpdateFailure,
    ResetFailure,
    DataSharingUpdateFailure,
    ValidationEmptyFields,
}

impl MessageKey {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AuthProvidersUpdateFailure => "configs.auth_providers.update_failure",
            Self::InfraConfigsUpdateFailure => "configs.infra_configs.update_failure",
            Self::ResetFailure => "configs.reset.failure",
            Self::DataSharingUpdateFailure => "configs.data_sharing.update_failure",
            Self::ValidationEmptyFields => "configs.validation.empty_fields",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives failure notifications.
pub trait Notifier {
    /// Report a failure. `error` is the underlying cause when there is one.
    fn notify_error(&self, key: MessageKey, error: Option<&ClientError>);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify_error(&self, key: MessageKey, error: Option<&ClientError>) {
        (**self).notify_error(key, error);
    }
}

/// Logs notifications through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_error(&self, key: MessageKey, error: Option<&ClientError>) {
        match error {
            Some(e) => tracing::error!(message_key = key.as_str(), error = %e, "Operation failed"),
            None => tracing::error!(message_key = key.as_str(), "Operation failed"),
        }
    }
}

/// Collects message keys in memory, in the order they were raised.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    keys: Arc<Mutex<Vec<MessageKey>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys recorded so far.
    pub fn keys(&self) -> Vec<MessageKey> {
        self.keys
            .lock()
            .map(|keys| keys.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_error(&self, key: MessageKey, _error: Option<&ClientError>) {
        if let Ok(mut keys) = self.keys.lock() {
            keys.push(key);
        }
    }
}
