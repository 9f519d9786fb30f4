//! Editable view-model of the server's authentication and mail settings.
//!
//! Responsibilities:
//! - Typed per-section field records ([`OAuthFields`], [`MicrosoftFields`],
//!   [`OidcFields`], [`MailFields`]) grouped into a [`Config`].
//! - The fixed mapping between section fields and [`InfraConfigKey`]s.
//! - Building the view-model from wire data ([`build_config`]) and folding it
//!   back into mutation arguments ([`infra_config_updates`],
//!   [`auth_provider_directives`]).
//! - Empty-field validation ([`are_any_config_fields_empty`]).
//!
//! Does NOT handle:
//! - Network access or failure notification.
//!
//! Invariants:
//! - Every section always carries its full field set; unset values are `""`.
//! - Section names are fixed literals and never change after construction.

mod builder;
mod transform;
mod validate;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ClientError, Result};
use crate::models::{AuthProvider, InfraConfigKey};

pub use builder::build_config;
pub use transform::{auth_provider_directives, infra_config_updates};
pub use validate::{EmptyField, are_any_config_fields_empty, empty_fields};

/// Read and write access to a field record by field name.
pub trait FieldSet {
    /// Look up a field's value.
    fn get(&self, field: &str) -> Option<&str>;

    /// Mutable access to a field's value.
    fn get_mut(&mut self, field: &str) -> Option<&mut String>;
}

macro_rules! field_set {
    ($ty:ident { $($field:ident),+ $(,)? }) => {
        impl FieldSet for $ty {
            fn get(&self, field: &str) -> Option<&str> {
                match field {
                    $(stringify!($field) => Some(self.$field.as_str()),)+
                    _ => None,
                }
            }

            fn get_mut(&mut self, field: &str) -> Option<&mut String> {
                match field {
                    $(stringify!($field) => Some(&mut self.$field),)+
                    _ => None,
                }
            }
        }
    };
}

/// OAuth client settings shared by Google and GitHub.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OAuthFields {
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,
    pub scope: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MicrosoftFields {
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,
    pub scope: String,
    pub tenant: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OidcFields {
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,
    pub scope: String,
    pub issuer: String,
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MailFields {
    pub mailer_smtp_url: String,
    pub mailer_from_address: String,
}

field_set!(OAuthFields {
    client_id,
    client_secret,
    callback_url,
    scope
});
field_set!(MicrosoftFields {
    client_id,
    client_secret,
    callback_url,
    scope,
    tenant
});
field_set!(OidcFields {
    client_id,
    client_secret,
    callback_url,
    scope,
    issuer,
    auth_url,
    token_url,
    userinfo_url
});
field_set!(MailFields {
    mailer_smtp_url,
    mailer_from_address
});

/// One provider or mail section: a fixed name, an enabled flag and its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionConfig<F> {
    pub name: &'static str,
    pub enabled: bool,
    pub fields: F,
}

impl<F: Default> SectionConfig<F> {
    fn empty(section: Section) -> Self {
        Self {
            name: section.name(),
            enabled: false,
            fields: F::default(),
        }
    }
}

/// Anonymous usage data sharing toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataSharingConfig {
    pub name: &'static str,
    pub enabled: bool,
}

impl Default for DataSharingConfig {
    fn default() -> Self {
        Self {
            name: DATA_SHARING_NAME,
            enabled: false,
        }
    }
}

/// Name of the data sharing section.
pub const DATA_SHARING_NAME: &str = "data_sharing";

/// The full editable configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub google: SectionConfig<OAuthFields>,
    pub github: SectionConfig<OAuthFields>,
    pub microsoft: SectionConfig<MicrosoftFields>,
    pub oidc: SectionConfig<OidcFields>,
    pub mail: SectionConfig<MailFields>,
    pub data_sharing: DataSharingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            google: SectionConfig::empty(Section::Google),
            github: SectionConfig::empty(Section::Github),
            microsoft: SectionConfig::empty(Section::Microsoft),
            oidc: SectionConfig::empty(Section::Oidc),
            mail: SectionConfig::empty(Section::Mail),
            data_sharing: DataSharingConfig::default(),
        }
    }
}

impl Config {
    pub fn is_enabled(&self, section: Section) -> bool {
        match section {
            Section::Google => self.google.enabled,
            Section::Microsoft => self.microsoft.enabled,
            Section::Github => self.github.enabled,
            Section::Oidc => self.oidc.enabled,
            Section::Mail => self.mail.enabled,
        }
    }

    pub fn set_enabled(&mut self, section: Section, enabled: bool) {
        match section {
            Section::Google => self.google.enabled = enabled,
            Section::Microsoft => self.microsoft.enabled = enabled,
            Section::Github => self.github.enabled = enabled,
            Section::Oidc => self.oidc.enabled = enabled,
            Section::Mail => self.mail.enabled = enabled,
        }
    }

    pub fn fields(&self, section: Section) -> &dyn FieldSet {
        match section {
            Section::Google => &self.google.fields,
            Section::Microsoft => &self.microsoft.fields,
            Section::Github => &self.github.fields,
            Section::Oidc => &self.oidc.fields,
            Section::Mail => &self.mail.fields,
        }
    }

    pub fn fields_mut(&mut self, section: Section) -> &mut dyn FieldSet {
        match section {
            Section::Google => &mut self.google.fields,
            Section::Microsoft => &mut self.microsoft.fields,
            Section::Github => &mut self.github.fields,
            Section::Oidc => &mut self.oidc.fields,
            Section::Mail => &mut self.mail.fields,
        }
    }

    /// Set one field of a section.
    ///
    /// # Errors
    /// Returns [`ClientError::UnknownField`] if the section has no such field.
    pub fn set_field(
        &mut self,
        section: Section,
        field: &str,
        value: impl Into<String>,
    ) -> Result<()> {
        let slot = self
            .fields_mut(section)
            .get_mut(field)
            .ok_or_else(|| ClientError::UnknownField {
                section: section.name().to_string(),
                field: field.to_string(),
            })?;
        *slot = value.into();
        Ok(())
    }

    pub fn set_data_sharing(&mut self, enabled: bool) {
        self.data_sharing.enabled = enabled;
    }
}

/// Sections of [`Config`] that carry fields, in reverse-transform order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Google,
    Microsoft,
    Github,
    Oidc,
    Mail,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Google,
        Section::Microsoft,
        Section::Github,
        Section::Oidc,
        Section::Mail,
    ];

    /// Sections whose enabled flag is sent with the provider mutation, in order.
    pub const WITH_DIRECTIVE: [Section; 4] = [
        Section::Google,
        Section::Microsoft,
        Section::Github,
        Section::Mail,
    ];

    /// Whether saving carries this section's enabled flag to the server.
    ///
    /// OIDC is switched on through the server's allowed provider list only.
    pub fn has_directive(self) -> bool {
        Self::WITH_DIRECTIVE.contains(&self)
    }

    /// Fixed section name as shown to users.
    pub const fn name(self) -> &'static str {
        match self {
            Section::Google => "google",
            Section::Microsoft => "microsoft",
            Section::Github => "github",
            Section::Oidc => "oidc",
            Section::Mail => "email",
        }
    }

    /// Provider whose presence in the allowed list enables this section.
    pub const fn auth_provider(self) -> AuthProvider {
        match self {
            Section::Google => AuthProvider::Google,
            Section::Microsoft => AuthProvider::Microsoft,
            Section::Github => AuthProvider::Github,
            Section::Oidc => AuthProvider::Oidc,
            Section::Mail => AuthProvider::Email,
        }
    }

    /// Field names and their infra config keys, in declaration order.
    pub const fn field_keys(self) -> &'static [(&'static str, InfraConfigKey)] {
        use InfraConfigKey as K;
        match self {
            Section::Google => &[
                ("client_id", K::GoogleClientId),
                ("client_secret", K::GoogleClientSecret),
                ("callback_url", K::GoogleCallbackUrl),
                ("scope", K::GoogleScope),
            ],
            Section::Microsoft => &[
                ("client_id", K::MicrosoftClientId),
                ("client_secret", K::MicrosoftClientSecret),
                ("callback_url", K::MicrosoftCallbackUrl),
                ("scope", K::MicrosoftScope),
                ("tenant", K::MicrosoftTenant),
            ],
            Section::Github => &[
                ("client_id", K::GithubClientId),
                ("client_secret", K::GithubClientSecret),
                ("callback_url", K::GithubCallbackUrl),
                ("scope", K::GithubScope),
            ],
            Section::Oidc => &[
                ("client_id", K::OidcClientId),
                ("client_secret", K::OidcClientSecret),
                ("callback_url", K::OidcCallbackUrl),
                ("scope", K::OidcScope),
                ("issuer", K::OidcIssuer),
                ("auth_url", K::OidcAuthUrl),
                ("token_url", K::OidcTokenUrl),
                ("userinfo_url", K::OidcUserinfoUrl),
            ],
            Section::Mail => &[
                ("mailer_smtp_url", K::MailerSmtpUrl),
                ("mailer_from_address", K::MailerAddressFrom),
            ],
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "google" => Ok(Section::Google),
            "microsoft" => Ok(Section::Microsoft),
            "github" => Ok(Section::Github),
            "oidc" => Ok(Section::Oidc),
            "email" | "mail" => Ok(Section::Mail),
            other => Err(format!(
                "unknown section '{other}' (expected google, microsoft, github, oidc or email)"
            )),
        }
    }
}
