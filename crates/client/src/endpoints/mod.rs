//! Low-level GraphQL operations.
//!
//! Functions here take the raw HTTP client, endpoint URL and token so they
//! can be exercised directly against a mock server.

pub mod infra_configs;
pub mod request;

pub use infra_configs::{
    enable_and_disable_sso, fetch_allowed_auth_providers, fetch_infra_configs,
    reset_infra_configs, toggle_analytics_collection, update_infra_configs,
};
pub use request::{Operation, send_graphql};
