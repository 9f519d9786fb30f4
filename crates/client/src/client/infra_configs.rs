//! Infra config and auth provider methods for [`InfraAdminClient`].
//!
//! # What this module does NOT handle:
//! - Low-level GraphQL calls (in [`crate::endpoints::infra_configs`])

use crate::api::InfraConfigApi;
use crate::client::InfraAdminClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{
    AuthProvider, InfraConfigEntry, InfraConfigKey, ProviderDirective, ServiceStatus,
};

impl InfraConfigApi for InfraAdminClient {
    async fn infra_configs(&self, names: &[InfraConfigKey]) -> Result<Vec<InfraConfigEntry>> {
        endpoints::fetch_infra_configs(
            &self.http,
            &self.graphql_url,
            self.token(),
            names,
            self.metrics.as_ref(),
        )
        .await
    }

    async fn allowed_auth_providers(&self) -> Result<Vec<AuthProvider>> {
        endpoints::fetch_allowed_auth_providers(
            &self.http,
            &self.graphql_url,
            self.token(),
            self.metrics.as_ref(),
        )
        .await
    }

    async fn enable_and_disable_sso(&self, directives: &[ProviderDirective]) -> Result<bool> {
        endpoints::enable_and_disable_sso(
            &self.http,
            &self.graphql_url,
            self.token(),
            directives,
            self.metrics.as_ref(),
        )
        .await
    }

    async fn update_infra_configs(
        &self,
        entries: &[InfraConfigEntry],
    ) -> Result<Vec<InfraConfigEntry>> {
        endpoints::update_infra_configs(
            &self.http,
            &self.graphql_url,
            self.token(),
            entries,
            self.metrics.as_ref(),
        )
        .await
    }

    async fn reset_infra_configs(&self) -> Result<bool> {
        endpoints::reset_infra_configs(
            &self.http,
            &self.graphql_url,
            self.token(),
            self.metrics.as_ref(),
        )
        .await
    }

    async fn toggle_analytics_collection(&self, status: ServiceStatus) -> Result<bool> {
        endpoints::toggle_analytics_collection(
            &self.http,
            &self.graphql_url,
            self.token(),
            status,
            self.metrics.as_ref(),
        )
        .await
    }
}
