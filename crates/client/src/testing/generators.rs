//! Test data generators.
//!
//! Proptest strategies for arbitrary wire inputs and a `fake`-backed
//! generator for realistic, fully populated settings.

use std::collections::BTreeMap;

use fake::Fake;
use fake::faker::internet::en::{DomainSuffix, SafeEmail};
use fake::faker::lorem::en::Word;
use proptest::prelude::*;

use crate::models::{AuthProvider, InfraConfigEntry, InfraConfigKey};
use crate::settings::Section;

/// Values a server might hold: empty, whitespace-only, or printable text.
pub fn arb_config_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        "[a-zA-Z0-9:/._@-]{1,40}",
    ]
}

/// A subset of the known keys, each with an arbitrary value and unique names.
pub fn arb_infra_config_entries() -> impl Strategy<Value = Vec<InfraConfigEntry>> {
    proptest::collection::btree_map(
        proptest::sample::select(InfraConfigKey::ALL.to_vec()).prop_map(|k| k.as_str()),
        arb_config_value(),
        0..=InfraConfigKey::ALL.len(),
    )
    .prop_map(|map: BTreeMap<&'static str, String>| {
        map.into_iter()
            .map(|(name, value)| InfraConfigEntry {
                name: name.to_string(),
                value,
            })
            .collect()
    })
}

/// A subset of the provider identifiers, without duplicates.
pub fn arb_auth_providers() -> impl Strategy<Value = Vec<AuthProvider>> {
    proptest::sample::subsequence(
        vec![
            AuthProvider::Google,
            AuthProvider::Microsoft,
            AuthProvider::Github,
            AuthProvider::Oidc,
            AuthProvider::Email,
        ],
        0..=5,
    )
}

/// Generates a complete, valid set of entries and the matching provider list.
///
/// # Example
/// ```ignore
/// let (entries, providers) = SettingsGenerator::new()
///     .with_sections(&[Section::Google, Section::Mail])
///     .generate();
/// ```
#[derive(Debug, Clone)]
pub struct SettingsGenerator {
    sections: Vec<Section>,
    analytics: bool,
}

impl Default for SettingsGenerator {
    fn default() -> Self {
        Self {
            sections: Section::ALL.to_vec(),
            analytics: false,
        }
    }
}

impl SettingsGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sections to enable. All sections are populated regardless.
    pub fn with_sections(mut self, sections: &[Section]) -> Self {
        self.sections = sections.to_vec();
        self
    }

    pub fn with_analytics(mut self, enabled: bool) -> Self {
        self.analytics = enabled;
        self
    }

    pub fn generate(&self) -> (Vec<InfraConfigEntry>, Vec<AuthProvider>) {
        let domain = format!(
            "{}.{}",
            Word().fake::<String>(),
            DomainSuffix().fake::<String>()
        );

        let mut entries: Vec<InfraConfigEntry> = Section::ALL
            .iter()
            .flat_map(|section| section.field_keys().iter())
            .map(|(field, key)| InfraConfigEntry::new(*key, sample_value(field, &domain)))
            .collect();
        entries.push(InfraConfigEntry::new(
            InfraConfigKey::AllowAnalyticsCollection,
            self.analytics.to_string(),
        ));

        let providers = self.sections.iter().map(|s| s.auth_provider()).collect();
        (entries, providers)
    }
}

fn sample_value(field: &str, domain: &str) -> String {
    match field {
        "client_id" => format!("{}", (10_000_000u64..99_999_999u64).fake::<u64>()),
        "client_secret" => format!(
            "{}{}",
            Word().fake::<String>(),
            (1_000u32..9_999u32).fake::<u32>()
        ),
        "callback_url" => format!("https://{domain}/v1/auth/callback"),
        "scope" => "openid email profile".to_string(),
        "tenant" => "common".to_string(),
        "mailer_smtp_url" => format!("smtps://mailer:{}@smtp.{domain}", Word().fake::<String>()),
        "mailer_from_address" => SafeEmail().fake(),
        url_field => format!("https://id.{domain}/{url_field}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{are_any_config_fields_empty, build_config};

    #[test]
    fn test_generated_settings_are_valid() {
        let (entries, providers) = SettingsGenerator::new().generate();
        let config = build_config(&entries, &providers);
        assert!(!are_any_config_fields_empty(&config));
        for section in Section::ALL {
            assert!(config.is_enabled(section));
        }
    }

    #[test]
    fn test_with_sections_limits_providers() {
        let (_, providers) = SettingsGenerator::new()
            .with_sections(&[Section::Github])
            .generate();
        assert_eq!(providers, vec![AuthProvider::Github]);
    }
}
