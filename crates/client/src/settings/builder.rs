use std::collections::HashMap;

use crate::models::{AuthProvider, InfraConfigEntry, InfraConfigKey};
use crate::settings::{Config, Section};

/// Build the view-model from the fetched entries and allowed providers.
///
/// Missing keys read as `""`; names outside the known key set are ignored.
/// Data sharing is on only when `ALLOW_ANALYTICS_COLLECTION` is exactly `"true"`.
pub fn build_config(entries: &[InfraConfigEntry], providers: &[AuthProvider]) -> Config {
    let values: HashMap<&str, &str> = entries
        .iter()
        .map(|entry| (entry.name.as_str(), entry.value.as_str()))
        .collect();
    let value_of = |key: InfraConfigKey| values.get(key.as_str()).copied().unwrap_or_default();

    let mut config = Config::default();
    for section in Section::ALL {
        config.set_enabled(section, providers.contains(&section.auth_provider()));
        let fields = config.fields_mut(section);
        for (field, key) in section.field_keys() {
            if let Some(slot) = fields.get_mut(field) {
                *slot = value_of(*key).to_string();
            }
        }
    }
    config.data_sharing.enabled = value_of(InfraConfigKey::AllowAnalyticsCollection) == "true";
    config
}
