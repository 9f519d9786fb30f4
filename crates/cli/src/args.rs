//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read connection settings from flags or `INFRA_ADMIN_*` environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not build the connection config (see `main`).

use clap::{Parser, Subcommand, ValueEnum};
use infra_admin_client::Section;
use std::path::PathBuf;

use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "infra-admin")]
#[command(
    about = "Manage server infrastructure configuration: SSO providers, mailer and data sharing",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  infra-admin show\n  infra-admin -o json show --show-secrets\n  infra-admin set github --field client_id=abc --field client_secret=xyz\n  infra-admin enable microsoft\n  infra-admin data-sharing disable\n  infra-admin reset --yes\n"
)]
pub struct Cli {
    /// Base URL of the backend (e.g., http://localhost:3170)
    #[arg(short, long, global = true, env = "INFRA_ADMIN_BASE_URL")]
    pub base_url: Option<String>,

    /// Admin access token
    #[arg(short, long, global = true, env = "INFRA_ADMIN_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "INFRA_ADMIN_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true)]
    pub skip_verify: bool,

    /// Profile name to load from the config file
    #[arg(long, global = true, env = "INFRA_ADMIN_PROFILE")]
    pub profile: Option<String>,

    /// Path to a custom configuration file (overrides default location)
    #[arg(long, global = true, env = "INFRA_ADMIN_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Export traces to this OTLP gRPC endpoint (e.g., http://localhost:4317)
    #[arg(long, global = true, env = "INFRA_ADMIN_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,

    /// Serve Prometheus metrics on this address (e.g., 127.0.0.1:9090)
    #[arg(long, global = true, value_name = "ADDR")]
    pub metrics_bind: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the current configuration of every section
    Show {
        /// Print secrets instead of masking them
        #[arg(long)]
        show_secrets: bool,
    },

    /// List the auth providers the server currently allows
    Providers,

    /// Set fields of a section and save
    Set {
        /// Section to edit (google, microsoft, github, oidc, email)
        section: Section,

        /// Field assignment as NAME=VALUE; repeatable
        #[arg(
            short,
            long = "field",
            value_name = "NAME=VALUE",
            required = true,
            value_parser = parse_assignment
        )]
        fields: Vec<(String, String)>,
    },

    /// Enable a section and save
    Enable {
        /// Section to enable (google, microsoft, github, email)
        section: Section,
    },

    /// Disable a section and save
    Disable {
        /// Section to disable (google, microsoft, github, email)
        section: Section,
    },

    /// Report empty fields in enabled sections without saving
    Validate,

    /// Restore server defaults for all infra configs
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Turn anonymous data sharing on or off
    DataSharing {
        #[arg(value_enum)]
        state: Toggle,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    Enable,
    Disable,
}

impl Toggle {
    pub fn is_enabled(self) -> bool {
        self == Toggle::Enable
    }
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing field name in '{raw}'"));
    }
    Ok((name.to_string(), value.to_string()))
}
