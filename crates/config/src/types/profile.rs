//! Named connection profiles.
//!
//! Invariants:
//! - All fields are optional so a profile may set only what it overrides.
//! - Tokens use `SecureValue` (plain or keyring).

use crate::types::auth::SecureValue;
use serde::{Deserialize, Serialize};

/// A named connection profile stored in the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Base URL of the admin backend
    pub base_url: Option<String>,
    /// Bearer token for the admin API
    pub api_token: Option<SecureValue>,
    /// Whether to skip TLS verification
    pub skip_verify: Option<bool>,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
}
