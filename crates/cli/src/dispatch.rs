//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).
//!
//! Invariants:
//! - Every command receives the same cancellation token.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands;

pub(crate) async fn run_command(
    cli: Cli,
    config: infra_admin_config::Config,
    cancel: &CancellationToken,
) -> Result<()> {
    let format = cli.output;
    match cli.command {
        Commands::Show { show_secrets } => {
            commands::show::run(config, show_secrets, format, cancel).await
        }
        Commands::Providers => commands::providers::run(config, format, cancel).await,
        Commands::Set { section, fields } => {
            commands::edit::run_set(config, section, fields, cancel).await
        }
        Commands::Enable { section } => {
            commands::edit::run_toggle(config, section, true, cancel).await
        }
        Commands::Disable { section } => {
            commands::edit::run_toggle(config, section, false, cancel).await
        }
        Commands::Validate => commands::validate::run(config, format, cancel).await,
        Commands::Reset { yes } => commands::reset::run(config, yes, cancel).await,
        Commands::DataSharing { state } => {
            commands::data_sharing::run(config, state.is_enabled(), cancel).await
        }
    }
}
