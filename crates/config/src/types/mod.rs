//! Configuration type definitions for the Infra Admin client.
//!
//! Responsibilities:
//! - Define connection, authentication and profile configuration types.
//! - Provide serialization helpers for sensitive types (secrets, durations).
//!
//! Does NOT handle:
//! - Loading from files or environment variables (see `loader` module).
//! - Reading the profile file from disk (see `persistence` module).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.

mod auth;
pub(crate) mod connection;
mod profile;

pub use auth::{AuthConfig, SecureValue};
pub use connection::{Config, ConnectionConfig};
pub use profile::ProfileConfig;
