use crate::models::{InfraConfigEntry, ProviderDirective, ServiceStatus};
use crate::settings::{Config, Section};

/// Flatten the enabled sections into `{name, value}` pairs for the bulk update.
///
/// Sections are emitted google, microsoft, github, oidc, mail; fields in
/// declaration order. Disabled sections contribute nothing.
pub fn infra_config_updates(config: &Config) -> Vec<InfraConfigEntry> {
    Section::ALL
        .into_iter()
        .filter(|section| config.is_enabled(*section))
        .flat_map(|section| {
            let fields = config.fields(section);
            section.field_keys().iter().map(move |(field, key)| {
                InfraConfigEntry::new(*key, fields.get(field).unwrap_or_default())
            })
        })
        .filter(|entry| !entry.name.is_empty())
        .collect()
}

/// Exactly four directives, `GOOGLE, MICROSOFT, GITHUB, EMAIL`, mirroring
/// each section's enabled flag.
pub fn auth_provider_directives(config: &Config) -> Vec<ProviderDirective> {
    Section::WITH_DIRECTIVE
        .into_iter()
        .map(|section| ProviderDirective {
            provider: section.auth_provider(),
            status: ServiceStatus::from(config.is_enabled(section)),
        })
        .collect()
}
