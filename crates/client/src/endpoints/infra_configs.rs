//! Infra config and auth provider operations.
//!
//! Responsibilities:
//! - Hold the GraphQL documents for the two reads and four mutations.
//! - Shape variables and unwrap the named root field of each response.
//!
//! Does NOT handle:
//! - Turning results into the view-model (see [`crate::settings`]).
//! - Failure notification (see [`crate::mutation`]).

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::endpoints::request::{Operation, send_graphql};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{
    AuthProvider, InfraConfigEntry, InfraConfigKey, ProviderDirective, ServiceStatus,
};
use crate::serde_helpers::known_auth_providers;

pub const INFRA_CONFIGS_QUERY: Operation = Operation {
    name: "InfraConfigs",
    document: "query InfraConfigs($configNames: [InfraConfigEnum!]!) { infraConfigs(configNames: $configNames) { name value } }",
};

pub const ALLOWED_AUTH_PROVIDERS_QUERY: Operation = Operation {
    name: "AllowedAuthProviders",
    document: "query AllowedAuthProviders { allowedAuthProviders }",
};

pub const ENABLE_AND_DISABLE_SSO_MUTATION: Operation = Operation {
    name: "EnableAndDisableSSO",
    document: "mutation EnableAndDisableSSO($providerInfo: [EnableAndDisableSSOArgs!]!) { enableAndDisableSSO(providerInfo: $providerInfo) }",
};

pub const UPDATE_INFRA_CONFIGS_MUTATION: Operation = Operation {
    name: "UpdateInfraConfigs",
    document: "mutation UpdateInfraConfigs($infraConfigs: [InfraConfigArgs!]!) { updateInfraConfigs(infraConfigs: $infraConfigs) { name value } }",
};

pub const RESET_INFRA_CONFIGS_MUTATION: Operation = Operation {
    name: "ResetInfraConfigs",
    document: "mutation ResetInfraConfigs { resetInfraConfigs }",
};

pub const TOGGLE_ANALYTICS_COLLECTION_MUTATION: Operation = Operation {
    name: "ToggleAnalyticsCollection",
    document: "mutation ToggleAnalyticsCollection($status: ServiceStatus!) { toggleAnalyticsCollection(status: $status) }",
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InfraConfigsData {
    #[serde(default)]
    infra_configs: Vec<InfraConfigEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AllowedAuthProvidersData {
    #[serde(default, deserialize_with = "known_auth_providers")]
    allowed_auth_providers: Vec<AuthProvider>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnableAndDisableSsoData {
    #[serde(rename = "enableAndDisableSSO")]
    enable_and_disable_sso: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateInfraConfigsData {
    #[serde(default)]
    update_infra_configs: Vec<InfraConfigEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResetInfraConfigsData {
    reset_infra_configs: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ToggleAnalyticsCollectionData {
    toggle_analytics_collection: bool,
}

/// Fetch the named infra config entries.
pub async fn fetch_infra_configs(
    client: &Client,
    graphql_url: &str,
    auth_token: &str,
    names: &[InfraConfigKey],
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<InfraConfigEntry>> {
    let data: InfraConfigsData = send_graphql(
        client,
        graphql_url,
        auth_token,
        INFRA_CONFIGS_QUERY,
        Some(json!({ "configNames": names })),
        metrics,
    )
    .await?;
    Ok(data.infra_configs)
}

/// Fetch the providers the server currently allows.
pub async fn fetch_allowed_auth_providers(
    client: &Client,
    graphql_url: &str,
    auth_token: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<AuthProvider>> {
    let data: AllowedAuthProvidersData = send_graphql(
        client,
        graphql_url,
        auth_token,
        ALLOWED_AUTH_PROVIDERS_QUERY,
        None,
        metrics,
    )
    .await?;
    Ok(data.allowed_auth_providers)
}

pub async fn enable_and_disable_sso(
    client: &Client,
    graphql_url: &str,
    auth_token: &str,
    directives: &[ProviderDirective],
    metrics: Option<&MetricsCollector>,
) -> Result<bool> {
    let data: EnableAndDisableSsoData = send_graphql(
        client,
        graphql_url,
        auth_token,
        ENABLE_AND_DISABLE_SSO_MUTATION,
        Some(json!({ "providerInfo": directives })),
        metrics,
    )
    .await?;
    Ok(data.enable_and_disable_sso)
}

/// Bulk update infra config entries, returning the entries the server stored.
pub async fn update_infra_configs(
    client: &Client,
    graphql_url: &str,
    auth_token: &str,
    entries: &[InfraConfigEntry],
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<InfraConfigEntry>> {
    let data: UpdateInfraConfigsData = send_graphql(
        client,
        graphql_url,
        auth_token,
        UPDATE_INFRA_CONFIGS_MUTATION,
        Some(json!({ "infraConfigs": entries })),
        metrics,
    )
    .await?;
    Ok(data.update_infra_configs)
}

pub async fn reset_infra_configs(
    client: &Client,
    graphql_url: &str,
    auth_token: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<bool> {
    let data: ResetInfraConfigsData = send_graphql(
        client,
        graphql_url,
        auth_token,
        RESET_INFRA_CONFIGS_MUTATION,
        None,
        metrics,
    )
    .await?;
    Ok(data.reset_infra_configs)
}

pub async fn toggle_analytics_collection(
    client: &Client,
    graphql_url: &str,
    auth_token: &str,
    status: ServiceStatus,
    metrics: Option<&MetricsCollector>,
) -> Result<bool> {
    let data: ToggleAnalyticsCollectionData = send_graphql(
        client,
        graphql_url,
        auth_token,
        TOGGLE_ANALYTICS_COLLECTION_MUTATION,
        Some(json!({ "status": status })),
        metrics,
    )
    .await?;
    Ok(data.toggle_analytics_collection)
}
