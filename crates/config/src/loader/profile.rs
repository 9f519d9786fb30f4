//! Profile file loading for configuration.
//!
//! Invariants:
//! - Missing profiles are recorded for later error handling in `build()`.
//! - A missing config file is treated the same as a missing profile.
//! - Profile values only fill settings not already provided by env or CLI.

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::persistence::{default_config_path, read_config_file};
use crate::types::ProfileConfig;

/// Apply the selected profile from the config file to the loader.
pub fn apply_profile(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let profile_name = match loader.profile_name() {
        Some(name) => name.clone(),
        None => return Ok(()),
    };

    let config_path = if let Some(path) = loader.config_path() {
        path.clone()
    } else {
        default_config_path().map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))?
    };

    if !config_path.exists() {
        loader.set_profile_missing(Some(profile_name));
        return Ok(());
    }

    let file = read_config_file(&config_path)?;

    match file.profiles.get(&profile_name) {
        Some(profile) => apply_profile_config(loader, profile),
        None => {
            tracing::debug!(profile = %profile_name, path = %config_path.display(), "Profile not found");
            loader.set_profile_missing(Some(profile_name));
            Ok(())
        }
    }
}

/// Apply profile values to the loader.
fn apply_profile_config(
    loader: &mut ConfigLoader,
    profile: &ProfileConfig,
) -> Result<(), ConfigError> {
    if loader.base_url().is_none()
        && let Some(url) = &profile.base_url
    {
        loader.set_base_url(Some(url.clone()));
    }
    if !loader.has_api_token()
        && let Some(token) = &profile.api_token
    {
        loader.set_api_token(Some(token.resolve()?));
    }
    if loader.skip_verify().is_none()
        && let Some(skip) = profile.skip_verify
    {
        loader.set_skip_verify(Some(skip));
    }
    if loader.timeout().is_none()
        && let Some(secs) = profile.timeout_seconds
    {
        loader.set_timeout(Some(std::time::Duration::from_secs(secs)));
    }
    Ok(())
}
