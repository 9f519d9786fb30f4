//! Serde helpers for loosely typed GraphQL payloads.
//!
//! Responsibilities:
//! - Read infra config values that the server may report as `null`, strings,
//!   numbers or booleans into a plain `String`.
//! - Read the allowed provider list while skipping identifiers this client
//!   does not know.
//!
//! Explicitly does NOT handle:
//! - Deciding what an empty value means (the view-model builder does that).
//!
//! Invariants / assumptions:
//! - Values are never logged here; they may contain client secrets.

use serde::Deserialize;

use crate::models::AuthProvider;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LooseValue {
    String(String),
    Bool(bool),
    U64(u64),
    I64(i64),
    F64(f64),
}

/// Deserialize a scalar into a `String`, mapping `null` to `""`.
pub fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<LooseValue>::deserialize(deserializer)?;
    Ok(match value {
        None => String::new(),
        Some(LooseValue::String(s)) => s,
        Some(LooseValue::Bool(b)) => b.to_string(),
        Some(LooseValue::U64(n)) => n.to_string(),
        Some(LooseValue::I64(n)) => n.to_string(),
        Some(LooseValue::F64(n)) => n.to_string(),
    })
}

/// Deserialize a list of provider identifiers, dropping unrecognised ones.
pub fn known_auth_providers<'de, D>(deserializer: D) -> Result<Vec<AuthProvider>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .iter()
        .filter_map(|name| match name.parse::<AuthProvider>() {
            Ok(provider) => Some(provider),
            Err(_) => {
                tracing::debug!(provider = %name, "Ignoring unrecognised auth provider");
                None
            }
        })
        .collect())
}
