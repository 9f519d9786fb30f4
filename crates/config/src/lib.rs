//! Configuration management for the Infra Admin client.
//!
//! This crate provides types and loaders for the admin API connection
//! settings, read from `.env` files, environment variables and a JSON
//! profile file.

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use persistence::{ConfigFile, ConfigFileError, default_config_path, read_config_file};
pub use types::{AuthConfig, Config, ConnectionConfig, ProfileConfig, SecureValue};
