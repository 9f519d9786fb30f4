//! Data models for the GraphQL admin API.
//!
//! Types are organized by concern in submodules and re-exported here
//! for convenient access.

pub mod graphql;
pub mod infra_configs;

pub use graphql::{GraphQlError, GraphQlRequest, GraphQlResponse};
pub use infra_configs::{
    AuthProvider, InfraConfigEntry, InfraConfigKey, ProviderDirective, ServiceStatus,
};
