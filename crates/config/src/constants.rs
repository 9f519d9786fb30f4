//! Centralized constants for the Infra Admin workspace.
//!
//! Default values shared by the config, client and CLI crates.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default admin API origin used for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3170";

/// Path of the GraphQL endpoint relative to the base URL.
pub const GRAPHQL_PATH: &str = "/graphql";

// =============================================================================
// Environment Variables
// =============================================================================

/// Base URL of the admin backend.
pub const ENV_BASE_URL: &str = "INFRA_ADMIN_BASE_URL";

/// Bearer token used for admin API calls.
pub const ENV_API_TOKEN: &str = "INFRA_ADMIN_API_TOKEN";

/// Skip TLS verification (`true`/`false`).
pub const ENV_SKIP_VERIFY: &str = "INFRA_ADMIN_SKIP_VERIFY";

/// Request timeout in seconds.
pub const ENV_TIMEOUT: &str = "INFRA_ADMIN_TIMEOUT";

/// Profile name to load from the config file.
pub const ENV_PROFILE: &str = "INFRA_ADMIN_PROFILE";

/// Override for the config file location.
pub const ENV_CONFIG_PATH: &str = "INFRA_ADMIN_CONFIG_PATH";

/// Set to `1` or `true` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

/// Service name used for keyring storage.
pub const KEYRING_SERVICE: &str = "infra-admin";
