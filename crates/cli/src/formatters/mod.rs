//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Render configuration, providers and validation results as JSON or tables.
//! - Mask secret field values unless asked not to.
//!
//! Does NOT handle:
//! - Loading or saving configuration (see `commands`).
//!
//! Invariants:
//! - Tables are tab-separated.
//! - JSON output is always valid JSON, including for empty lists.
//! - Empty values are shown as `(empty)` in tables and `""` in JSON.

mod json;
mod table;

use anyhow::Result;
use clap::ValueEnum;
use infra_admin_client::{AuthProvider, Config, EmptyField, Section};

pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Replacement shown for non-empty secret values.
pub const MASKED_VALUE: &str = "********";

/// Fields whose values are credentials.
const SECRET_FIELDS: [&str; 2] = ["client_secret", "mailer_smtp_url"];

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Renders command results.
pub trait Formatter {
    fn format_config(&self, config: &Config) -> Result<String>;

    fn format_providers(&self, providers: &[AuthProvider]) -> Result<String>;

    fn format_empty_fields(&self, fields: &[EmptyField]) -> Result<String>;
}

pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}

/// Copy of `config` with every non-empty secret replaced by [`MASKED_VALUE`].
pub fn mask_secrets(config: &Config) -> Config {
    let mut masked = config.clone();
    for section in Section::ALL {
        let fields = masked.fields_mut(section);
        for name in SECRET_FIELDS {
            if let Some(value) = fields.get_mut(name)
                && !value.is_empty()
            {
                *value = MASKED_VALUE.to_string();
            }
        }
    }
    masked
}

/// Print formatted output to stdout, adding a trailing newline if missing.
pub fn output_result(output: &str) {
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }
}
