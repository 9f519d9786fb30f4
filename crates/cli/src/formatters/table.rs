//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format configuration, providers and empty fields as tab-separated tables.
//!
//! Does NOT handle:
//! - Secret masking (callers pass an already masked config).

use anyhow::Result;
use infra_admin_client::{AuthProvider, Config, EmptyField, Section};

use super::Formatter;

const EMPTY_VALUE: &str = "(empty)";

/// Tab-separated tables for terminals.
pub struct TableFormatter;

fn yes_no(enabled: bool) -> &'static str {
    if enabled { "yes" } else { "no" }
}

impl Formatter for TableFormatter {
    fn format_config(&self, config: &Config) -> Result<String> {
        let mut output = String::from("Section\tEnabled\tField\tValue\n");

        for section in Section::ALL {
            let enabled = yes_no(config.is_enabled(section));
            let fields = config.fields(section);
            for (name, _) in section.field_keys() {
                let value = match fields.get(name) {
                    Some(v) if !v.is_empty() => v,
                    _ => EMPTY_VALUE,
                };
                output.push_str(&format!("{section}\t{enabled}\t{name}\t{value}\n"));
            }
        }

        output.push_str(&format!(
            "{}\t{}\t\t\n",
            config.data_sharing.name,
            yes_no(config.data_sharing.enabled)
        ));

        Ok(output)
    }

    fn format_providers(&self, providers: &[AuthProvider]) -> Result<String> {
        if providers.is_empty() {
            return Ok("No auth providers allowed.".to_string());
        }

        let mut output = String::from("Provider\n");
        for provider in providers {
            output.push_str(provider.as_str());
            output.push('\n');
        }
        Ok(output)
    }

    fn format_empty_fields(&self, fields: &[EmptyField]) -> Result<String> {
        if fields.is_empty() {
            return Ok("All enabled sections are complete.".to_string());
        }

        let mut output = String::from("Section\tField\n");
        for field in fields {
            output.push_str(&format!("{}\t{}\n", field.section, field.field));
        }
        Ok(output)
    }
}
