//! Seam between the configuration handler and the GraphQL transport.
//!
//! [`crate::handler::ConfigHandler`] talks to the server only through
//! [`InfraConfigApi`], so it can run against [`crate::InfraAdminClient`] or
//! an in-memory double.

use std::future::Future;

use crate::error::Result;
use crate::models::{
    AuthProvider, InfraConfigEntry, InfraConfigKey, ProviderDirective, ServiceStatus,
};

/// The two reads and four mutations the configuration screen needs.
pub trait InfraConfigApi {
    /// Read the named infra config entries.
    fn infra_configs(
        &self,
        names: &[InfraConfigKey],
    ) -> impl Future<Output = Result<Vec<InfraConfigEntry>>> + Send;

    /// Read the providers currently allowed.
    fn allowed_auth_providers(&self) -> impl Future<Output = Result<Vec<AuthProvider>>> + Send;

    /// Enable or disable providers.
    fn enable_and_disable_sso(
        &self,
        directives: &[ProviderDirective],
    ) -> impl Future<Output = Result<bool>> + Send;

    /// Bulk update infra config entries.
    fn update_infra_configs(
        &self,
        entries: &[InfraConfigEntry],
    ) -> impl Future<Output = Result<Vec<InfraConfigEntry>>> + Send;

    /// Restore all infra config entries to server defaults.
    fn reset_infra_configs(&self) -> impl Future<Output = Result<bool>> + Send;

    /// Switch anonymous analytics collection on or off.
    fn toggle_analytics_collection(
        &self,
        status: ServiceStatus,
    ) -> impl Future<Output = Result<bool>> + Send;
}
