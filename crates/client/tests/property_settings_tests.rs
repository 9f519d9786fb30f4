//! Property-based tests for the view-model builder, reverse transformers and validator.
//!
//! # Invariants
//! - Building never fails and always yields every field of every section
//! - Disabled sections never reach the bulk update
//! - Provider directives are always the same four providers in the same order
//! - Data sharing is on only for an exact `"true"`

use infra_admin_client::settings::{
    are_any_config_fields_empty, auth_provider_directives, build_config, empty_fields,
    infra_config_updates,
};
use infra_admin_client::testing::generators::{
    arb_auth_providers, arb_config_value, arb_infra_config_entries,
};
use infra_admin_client::{AuthProvider, InfraConfigEntry, InfraConfigKey, Section, ServiceStatus};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_built_fields_match_entries(
        entries in arb_infra_config_entries(),
        providers in arb_auth_providers(),
    ) {
        let config = build_config(&entries, &providers);

        for section in Section::ALL {
            prop_assert_eq!(
                config.is_enabled(section),
                providers.contains(&section.auth_provider())
            );
            for (field, key) in section.field_keys() {
                let expected = entries
                    .iter()
                    .find(|e| e.name == key.as_str())
                    .map(|e| e.value.as_str())
                    .unwrap_or("");
                prop_assert_eq!(config.fields(section).get(field), Some(expected));
            }
        }
    }

    #[test]
    fn prop_round_trip_preserves_enabled_values(
        entries in arb_infra_config_entries(),
        providers in arb_auth_providers(),
    ) {
        let config = build_config(&entries, &providers);
        let updates = infra_config_updates(&config);

        for update in &updates {
            prop_assert!(!update.name.is_empty());
            let original = entries
                .iter()
                .find(|e| e.name == update.name)
                .map(|e| e.value.as_str())
                .unwrap_or("");
            prop_assert_eq!(update.value.as_str(), original);
        }
    }

    #[test]
    fn prop_disabled_sections_excluded(
        entries in arb_infra_config_entries(),
        providers in arb_auth_providers(),
    ) {
        let config = build_config(&entries, &providers);
        let updates = infra_config_updates(&config);

        let expected: usize = Section::ALL
            .iter()
            .filter(|s| config.is_enabled(**s))
            .map(|s| s.field_keys().len())
            .sum();
        prop_assert_eq!(updates.len(), expected);

        for section in Section::ALL.into_iter().filter(|s| !config.is_enabled(*s)) {
            for (_, key) in section.field_keys() {
                prop_assert!(updates.iter().all(|u| u.name != key.as_str()));
            }
        }
        prop_assert!(updates.iter().all(|u| u.name != "ALLOW_ANALYTICS_COLLECTION"));
    }

    #[test]
    fn prop_always_four_directives(
        entries in arb_infra_config_entries(),
        providers in arb_auth_providers(),
    ) {
        let config = build_config(&entries, &providers);
        let directives = auth_provider_directives(&config);

        let order: Vec<AuthProvider> = directives.iter().map(|d| d.provider).collect();
        prop_assert_eq!(
            order,
            vec![AuthProvider::Google, AuthProvider::Microsoft, AuthProvider::Github, AuthProvider::Email]
        );
        for directive in directives {
            let expected = ServiceStatus::from(providers.contains(&directive.provider));
            prop_assert_eq!(directive.status, expected);
        }
    }

    #[test]
    fn prop_data_sharing_exact_true(value in prop_oneof![Just("true".to_string()), arb_config_value()]) {
        let entries = vec![InfraConfigEntry::new(InfraConfigKey::AllowAnalyticsCollection, value.clone())];
        let config = build_config(&entries, &[]);
        prop_assert_eq!(config.data_sharing.enabled, value == "true");
    }

    #[test]
    fn prop_validator_agrees_with_empty_fields(
        entries in arb_infra_config_entries(),
        providers in arb_auth_providers(),
    ) {
        let config = build_config(&entries, &providers);
        let empty = empty_fields(&config);

        prop_assert_eq!(are_any_config_fields_empty(&config), !empty.is_empty());
        for field in &empty {
            prop_assert_ne!(field.section, "oidc");
            let section: Section = field.section.parse().unwrap();
            prop_assert!(config.is_enabled(section));
            let value = config.fields(section).get(field.field).unwrap_or("");
            prop_assert!(value.trim().is_empty());
        }
    }
}
