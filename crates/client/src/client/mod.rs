//! GraphQL admin API client.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `infra_configs`: infra config and auth provider operations
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - View-model building and validation (see [`crate::settings`])
//!
//! # Invariants
//! - Every operation is sent once; failures are returned, never retried

pub mod builder;
mod infra_configs;

use secrecy::{ExposeSecret, SecretString};

use crate::metrics::MetricsCollector;

/// Admin API client.
///
/// Use [`InfraAdminClient::builder()`] to create one.
#[derive(Debug)]
pub struct InfraAdminClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) graphql_url: String,
    pub(crate) api_token: SecretString,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl InfraAdminClient {
    pub fn builder() -> builder::InfraAdminClientBuilder {
        builder::InfraAdminClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the GraphQL endpoint.
    pub fn graphql_url(&self) -> &str {
        &self.graphql_url
    }

    pub(crate) fn token(&self) -> &str {
        self.api_token.expose_secret()
    }
}
