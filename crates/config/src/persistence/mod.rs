//! Config file location and reading.
//!
//! Responsibilities:
//! - Determine the standard configuration file path.
//! - Read and parse the JSON profile file.
//!
//! Does NOT handle:
//! - Writing profiles (profiles are edited by hand or by deployment tooling).
//! - Merging profile values with env/CLI values (see `loader`).

mod file;
mod path;

pub use file::{ConfigFile, ConfigFileError, read_config_file};
pub use path::default_config_path;
