//! JSON formatter implementation.

use anyhow::Result;
use infra_admin_client::{AuthProvider, Config, EmptyField};

use super::Formatter;

/// Pretty-printed JSON.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_config(&self, config: &Config) -> Result<String> {
        Ok(serde_json::to_string_pretty(config)?)
    }

    fn format_providers(&self, providers: &[AuthProvider]) -> Result<String> {
        Ok(serde_json::to_string_pretty(providers)?)
    }

    fn format_empty_fields(&self, fields: &[EmptyField]) -> Result<String> {
        Ok(serde_json::to_string_pretty(fields)?)
    }
}
