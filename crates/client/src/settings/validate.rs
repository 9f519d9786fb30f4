use serde::Serialize;

use crate::settings::{Config, Section};

/// Sections checked for empty fields, in scan order. OIDC is not checked.
const VALIDATED_SECTIONS: [Section; 4] = [
    Section::Github,
    Section::Google,
    Section::Microsoft,
    Section::Mail,
];

/// A required field left blank in an enabled section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmptyField {
    pub section: &'static str,
    pub field: &'static str,
}

/// Every blank (after trimming) field of the enabled, validated sections.
pub fn empty_fields(config: &Config) -> Vec<EmptyField> {
    VALIDATED_SECTIONS
        .into_iter()
        .filter(|section| config.is_enabled(*section))
        .flat_map(|section| {
            let fields = config.fields(section);
            section
                .field_keys()
                .iter()
                .filter(move |(field, _)| fields.get(field).is_none_or(|v| v.trim().is_empty()))
                .map(move |(field, _)| EmptyField {
                    section: section.name(),
                    field: *field,
                })
        })
        .collect()
}

/// True iff an enabled github, google, microsoft or mail section has a blank field.
pub fn are_any_config_fields_empty(config: &Config) -> bool {
    !empty_fields(config).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_google() -> Config {
        let mut config = Config::default();
        config.google.enabled = true;
        config.google.fields.client_id = "id".to_string();
        config.google.fields.client_secret = "secret".to_string();
        config.google.fields.callback_url = "https://cb".to_string();
        config.google.fields.scope = "email".to_string();
        config
    }

    #[test]
    fn test_filled_section_passes() {
        let config = filled_google();
        assert!(!are_any_config_fields_empty(&config));
        assert!(empty_fields(&config).is_empty());
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let mut config = filled_google();
        config.google.fields.scope = "   ".to_string();
        assert!(are_any_config_fields_empty(&config));
        assert_eq!(
            empty_fields(&config),
            vec![EmptyField {
                section: "google",
                field: "scope"
            }]
        );
    }

    #[test]
    fn test_disabled_sections_ignored() {
        let mut config = Config::default();
        config.microsoft.fields.client_id = String::new();
        assert!(!are_any_config_fields_empty(&config));
    }

    #[test]
    fn test_enabled_mail_with_empty_smtp_url() {
        let mut config = Config::default();
        config.mail.enabled = true;
        config.mail.fields.mailer_from_address = "noreply@example.com".to_string();
        assert!(are_any_config_fields_empty(&config));
        assert_eq!(
            empty_fields(&config),
            vec![EmptyField {
                section: "email",
                field: "mailer_smtp_url"
            }]
        );
    }

    #[test]
    fn test_oidc_not_checked() {
        let mut config = Config::default();
        config.oidc.enabled = true;
        assert!(!are_any_config_fields_empty(&config));
        assert!(empty_fields(&config).is_empty());
    }

    #[test]
    fn test_scan_order_github_first() {
        let mut config = Config::default();
        config.google.enabled = true;
        config.github.enabled = true;
        let fields = empty_fields(&config);
        assert_eq!(fields[0].section, "github");
        assert_eq!(fields[4].section, "google");
    }
}
