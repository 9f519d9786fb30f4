//! Configuration handler.
//!
//! Responsibilities:
//! - Issue the infra config and allowed provider reads, tracking each in a
//!   [`ReadState`].
//! - Build the immutable `current` view-model and the editable `working` copy.
//! - Run the four mutations through [`execute_mutation`] with their message keys.
//!
//! Does NOT handle:
//! - Translating message keys into text (front ends own that).
//! - Reloading after a successful save; call [`ConfigHandler::load`] again.
//!
//! Invariants:
//! - `current` is replaced only by `load` and never edited.
//! - A failed mutation leaves `working` unchanged.

use tracing::{debug, info};

use crate::api::InfraConfigApi;
use crate::error::{ClientError, Result};
use crate::models::{AuthProvider, InfraConfigEntry, InfraConfigKey, ServiceStatus};
use crate::mutation::execute_mutation;
use crate::notify::{MessageKey, Notifier};
use crate::settings::{
    Config, EmptyField, auth_provider_directives, build_config, empty_fields,
    infra_config_updates,
};

/// Outcome of the most recent read.
///
/// A read in flight is the pending [`ConfigHandler::load`] future; this
/// records only what it settled to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadState<T> {
    loaded: bool,
    pub error: Option<String>,
    pub data: Vec<T>,
}

impl<T> Default for ReadState<T> {
    fn default() -> Self {
        Self {
            loaded: false,
            error: None,
            data: Vec::new(),
        }
    }
}

impl<T> ReadState<T> {
    fn settle(&mut self, result: Result<Vec<T>>) -> Result<()> {
        match result {
            Ok(data) => {
                self.loaded = true;
                self.error = None;
                self.data = data;
                Ok(())
            }
            Err(e) => {
                self.loaded = false;
                self.error = Some(e.to_string());
                self.data.clear();
                Err(e)
            }
        }
    }

    /// True once the last read completed without error.
    pub fn is_ready(&self) -> bool {
        self.loaded
    }
}

/// Result of [`ConfigHandler::save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Both mutations succeeded.
    Saved,
    /// Enabled sections have blank fields; nothing was sent.
    Invalid(Vec<EmptyField>),
    /// A mutation failed and was reported through the notifier.
    Failed,
}

/// Owns the loaded configuration and the working copy for one editing session.
pub struct ConfigHandler<A, N> {
    api: A,
    notifier: N,
    infra_configs: ReadState<InfraConfigEntry>,
    allowed_providers: ReadState<AuthProvider>,
    current: Option<Config>,
    working: Option<Config>,
}

impl<A: InfraConfigApi, N: Notifier> ConfigHandler<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            infra_configs: ReadState::default(),
            allowed_providers: ReadState::default(),
            current: None,
            working: None,
        }
    }

    /// Fetch both reads concurrently and rebuild `current` and `working`.
    ///
    /// # Errors
    /// Returns the first read error. The handler is left unloaded.
    pub async fn load(&mut self) -> Result<()> {
        self.current = None;
        self.working = None;

        let (entries, providers) = tokio::join!(
            self.api.infra_configs(&InfraConfigKey::ALL),
            self.api.allowed_auth_providers()
        );

        let entries_result = self.infra_configs.settle(entries);
        let providers_result = self.allowed_providers.settle(providers);
        entries_result?;
        providers_result?;

        let config = build_config(&self.infra_configs.data, &self.allowed_providers.data);
        info!(
            entries = self.infra_configs.data.len(),
            providers = self.allowed_providers.data.len(),
            "Loaded infra configuration"
        );
        self.working = Some(config.clone());
        self.current = Some(config);
        Ok(())
    }

    pub fn infra_configs_state(&self) -> &ReadState<InfraConfigEntry> {
        &self.infra_configs
    }

    pub fn allowed_providers_state(&self) -> &ReadState<AuthProvider> {
        &self.allowed_providers
    }

    /// The configuration as last loaded from the server.
    pub fn current(&self) -> Result<&Config> {
        self.current.as_ref().ok_or(ClientError::NotLoaded)
    }

    pub fn working(&self) -> Result<&Config> {
        self.working.as_ref().ok_or(ClientError::NotLoaded)
    }

    /// Mutable access to the working copy, the only edit target.
    pub fn working_mut(&mut self) -> Result<&mut Config> {
        self.working.as_mut().ok_or(ClientError::NotLoaded)
    }

    /// True when the working copy differs from `current`.
    pub fn is_dirty(&self) -> bool {
        self.current != self.working
    }

    /// Reset the working copy to `current`.
    pub fn discard_changes(&mut self) {
        self.working = self.current.clone();
    }

    /// Send provider enable/disable directives derived from the working copy.
    pub async fn update_auth_providers(&self) -> bool {
        let Some(working) = self.working.as_ref() else {
            self.notify_not_loaded(MessageKey::AuthProvidersUpdateFailure);
            return false;
        };
        let directives = auth_provider_directives(working);
        debug!(?directives, "Updating auth providers");
        execute_mutation(
            self.api.enable_and_disable_sso(&directives),
            MessageKey::AuthProvidersUpdateFailure,
            &self.notifier,
        )
        .await
    }

    /// Send the enabled sections' fields as a bulk infra config update.
    pub async fn update_infra_configs(&self) -> bool {
        let Some(working) = self.working.as_ref() else {
            self.notify_not_loaded(MessageKey::InfraConfigsUpdateFailure);
            return false;
        };
        let updates = infra_config_updates(working);
        debug!(entries = updates.len(), "Updating infra configs");
        execute_mutation(
            self.api.update_infra_configs(&updates),
            MessageKey::InfraConfigsUpdateFailure,
            &self.notifier,
        )
        .await
    }

    /// Restore server defaults. Does not require a loaded configuration.
    pub async fn reset_infra_configs(&self) -> bool {
        execute_mutation(
            self.api.reset_infra_configs(),
            MessageKey::ResetFailure,
            &self.notifier,
        )
        .await
    }

    /// Switch data sharing and, on success, record the new value in the working copy.
    pub async fn update_data_sharing(&mut self, enabled: bool) -> bool {
        let ok = execute_mutation(
            self.api.toggle_analytics_collection(ServiceStatus::from(enabled)),
            MessageKey::DataSharingUpdateFailure,
            &self.notifier,
        )
        .await;
        if ok && let Some(working) = self.working.as_mut() {
            working.set_data_sharing(enabled);
        }
        ok
    }

    /// Validate the working copy, then send the provider and infra config
    /// mutations in that order, stopping at the first failure.
    pub async fn save(&self) -> SaveOutcome {
        let Some(working) = self.working.as_ref() else {
            self.notify_not_loaded(MessageKey::InfraConfigsUpdateFailure);
            return SaveOutcome::Failed;
        };

        let empty = empty_fields(working);
        if !empty.is_empty() {
            self.notifier.notify_error(MessageKey::ValidationEmptyFields, None);
            return SaveOutcome::Invalid(empty);
        }

        if !self.update_auth_providers().await {
            return SaveOutcome::Failed;
        }
        if !self.update_infra_configs().await {
            return SaveOutcome::Failed;
        }
        info!("Saved infra configuration");
        SaveOutcome::Saved
    }

    fn notify_not_loaded(&self, key: MessageKey) {
        self.notifier.notify_error(key, Some(&ClientError::NotLoaded));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProviderDirective;
    use crate::notify::RecordingNotifier;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeApi {
        entries: Vec<InfraConfigEntry>,
        providers: Vec<AuthProvider>,
        fail_reads: bool,
        fail_mutations: bool,
        directives: Mutex<Vec<Vec<ProviderDirective>>>,
        updates: Mutex<Vec<Vec<InfraConfigEntry>>>,
    }

    impl FakeApi {
        fn result<T>(&self, fail: bool, value: T) -> Result<T> {
            if fail {
                Err(ClientError::InvalidResponse("forced failure".to_string()))
            } else {
                Ok(value)
            }
        }
    }

    impl InfraConfigApi for FakeApi {
        async fn infra_configs(&self, _names: &[InfraConfigKey]) -> Result<Vec<InfraConfigEntry>> {
            self.result(self.fail_reads, self.entries.clone())
        }

        async fn allowed_auth_providers(&self) -> Result<Vec<AuthProvider>> {
            self.result(self.fail_reads, self.providers.clone())
        }

        async fn enable_and_disable_sso(&self, directives: &[ProviderDirective]) -> Result<bool> {
            self.directives.lock().unwrap().push(directives.to_vec());
            self.result(self.fail_mutations, true)
        }

        async fn update_infra_configs(
            &self,
            entries: &[InfraConfigEntry],
        ) -> Result<Vec<InfraConfigEntry>> {
            self.updates.lock().unwrap().push(entries.to_vec());
            self.result(self.fail_mutations, entries.to_vec())
        }

        async fn reset_infra_configs(&self) -> Result<bool> {
            self.result(self.fail_mutations, true)
        }

        async fn toggle_analytics_collection(&self, _status: ServiceStatus) -> Result<bool> {
            self.result(self.fail_mutations, true)
        }
    }

    fn google_api() -> FakeApi {
        FakeApi {
            entries: vec![
                InfraConfigEntry::new(InfraConfigKey::GoogleClientId, "id"),
                InfraConfigEntry::new(InfraConfigKey::GoogleClientSecret, "secret"),
                InfraConfigEntry::new(InfraConfigKey::GoogleCallbackUrl, "https://cb"),
                InfraConfigEntry::new(InfraConfigKey::GoogleScope, "email"),
            ],
            providers: vec![AuthProvider::Google],
            ..FakeApi::default()
        }
    }

    #[tokio::test]
    async fn test_load_builds_current_and_working() {
        let mut handler = ConfigHandler::new(google_api(), RecordingNotifier::new());
        assert!(matches!(handler.current(), Err(ClientError::NotLoaded)));
        assert!(!handler.infra_configs_state().is_ready());
        assert!(!handler.allowed_providers_state().is_ready());

        handler.load().await.unwrap();

        assert!(handler.current().unwrap().google.enabled);
        assert_eq!(handler.current().unwrap(), handler.working().unwrap());
        assert!(!handler.is_dirty());
        assert!(handler.infra_configs_state().is_ready());
        assert_eq!(handler.allowed_providers_state().data, vec![AuthProvider::Google]);
    }

    #[tokio::test]
    async fn test_load_failure_records_error() {
        let api = FakeApi {
            fail_reads: true,
            ..FakeApi::default()
        };
        let mut handler = ConfigHandler::new(api, RecordingNotifier::new());

        assert!(handler.load().await.is_err());
        assert!(handler.infra_configs_state().error.is_some());
        assert!(!handler.infra_configs_state().is_ready());
        assert!(handler.working().is_err());
    }

    #[tokio::test]
    async fn test_edits_touch_only_working_copy() {
        let mut handler = ConfigHandler::new(google_api(), RecordingNotifier::new());
        handler.load().await.unwrap();

        handler.working_mut().unwrap().google.fields.scope = "profile".to_string();

        assert!(handler.is_dirty());
        assert_eq!(handler.current().unwrap().google.fields.scope, "email");

        handler.discard_changes();
        assert!(!handler.is_dirty());
    }

    #[tokio::test]
    async fn test_save_sends_directives_then_updates() {
        let notifier = RecordingNotifier::new();
        let mut handler = ConfigHandler::new(google_api(), notifier.clone());
        handler.load().await.unwrap();

        assert_eq!(handler.save().await, SaveOutcome::Saved);

        assert!(notifier.keys().is_empty());
        assert_eq!(handler.api.directives.lock().unwrap().len(), 1);
        let updates = handler.api.updates.lock().unwrap();
        assert_eq!(updates[0].len(), 4);
        assert_eq!(updates[0][0].name, "GOOGLE_CLIENT_ID");
    }

    #[tokio::test]
    async fn test_save_rejects_blank_fields() {
        let notifier = RecordingNotifier::new();
        let mut handler = ConfigHandler::new(google_api(), notifier.clone());
        handler.load().await.unwrap();
        handler.working_mut().unwrap().google.fields.client_secret = " ".to_string();

        let outcome = handler.save().await;

        assert_eq!(
            outcome,
            SaveOutcome::Invalid(vec![EmptyField {
                section: "google",
                field: "client_secret"
            }])
        );
        assert_eq!(notifier.keys(), vec![MessageKey::ValidationEmptyFields]);
        assert!(handler.api.directives.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_stops_after_provider_failure() {
        let api = FakeApi {
            fail_mutations: true,
            ..google_api()
        };
        let notifier = RecordingNotifier::new();
        let mut handler = ConfigHandler::new(api, notifier.clone());
        handler.load().await.unwrap();
        let before = handler.working().unwrap().clone();

        assert_eq!(handler.save().await, SaveOutcome::Failed);

        assert_eq!(notifier.keys(), vec![MessageKey::AuthProvidersUpdateFailure]);
        assert!(handler.api.updates.lock().unwrap().is_empty());
        assert_eq!(handler.working().unwrap(), &before);
    }

    #[tokio::test]
    async fn test_data_sharing_failure_keeps_working_copy() {
        let api = FakeApi {
            fail_mutations: true,
            ..google_api()
        };
        let notifier = RecordingNotifier::new();
        let mut handler = ConfigHandler::new(api, notifier.clone());
        handler.load().await.unwrap();

        assert!(!handler.update_data_sharing(true).await);

        assert!(!handler.working().unwrap().data_sharing.enabled);
        assert_eq!(notifier.keys(), vec![MessageKey::DataSharingUpdateFailure]);
    }

    #[tokio::test]
    async fn test_data_sharing_success_updates_working_copy() {
        let mut handler = ConfigHandler::new(google_api(), RecordingNotifier::new());
        handler.load().await.unwrap();

        assert!(handler.update_data_sharing(true).await);

        assert!(handler.working().unwrap().data_sharing.enabled);
        assert!(!handler.current().unwrap().data_sharing.enabled);
    }

    #[tokio::test]
    async fn test_reset_failure_uses_reset_key() {
        let api = FakeApi {
            fail_mutations: true,
            ..FakeApi::default()
        };
        let notifier = RecordingNotifier::new();
        let handler = ConfigHandler::new(api, notifier.clone());

        assert!(!handler.reset_infra_configs().await);
        assert_eq!(notifier.keys(), vec![MessageKey::ResetFailure]);
    }

    #[tokio::test]
    async fn test_mutations_before_load_fail() {
        let notifier = RecordingNotifier::new();
        let handler = ConfigHandler::new(FakeApi::default(), notifier.clone());

        assert!(!handler.update_auth_providers().await);
        assert!(!handler.update_infra_configs().await);
        assert_eq!(
            notifier.keys(),
            vec![
                MessageKey::AuthProvidersUpdateFailure,
                MessageKey::InfraConfigsUpdateFailure
            ]
        );
    }
}
