//! Wire models for infrastructure configuration reads and mutations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::serde_helpers::string_or_null;

/// Names of the server-side infrastructure configuration entries managed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InfraConfigKey {
    GoogleClientId,
    GoogleClientSecret,
    GoogleCallbackUrl,
    GoogleScope,
    MicrosoftClientId,
    MicrosoftClientSecret,
    MicrosoftCallbackUrl,
    MicrosoftScope,
    MicrosoftTenant,
    GithubClientId,
    GithubClientSecret,
    GithubCallbackUrl,
    GithubScope,
    OidcClientId,
    OidcClientSecret,
    OidcCallbackUrl,
    OidcScope,
    OidcIssuer,
    OidcAuthUrl,
    OidcTokenUrl,
    OidcUserinfoUrl,
    MailerSmtpUrl,
    MailerAddressFrom,
    AllowAnalyticsCollection,
}

impl InfraConfigKey {
    /// Every key, in the order the read query requests them.
    pub const ALL: [InfraConfigKey; 24] = [
        Self::GoogleClientId,
        Self::GoogleClientSecret,
        Self::GoogleCallbackUrl,
        Self::GoogleScope,
        Self::MicrosoftClientId,
        Self::MicrosoftClientSecret,
        Self::MicrosoftCallbackUrl,
        Self::MicrosoftScope,
        Self::MicrosoftTenant,
        Self::GithubClientId,
        Self::GithubClientSecret,
        Self::GithubCallbackUrl,
        Self::GithubScope,
        Self::OidcClientId,
        Self::OidcClientSecret,
        Self::OidcCallbackUrl,
        Self::OidcScope,
        Self::OidcIssuer,
        Self::OidcAuthUrl,
        Self::OidcTokenUrl,
        Self::OidcUserinfoUrl,
        Self::MailerSmtpUrl,
        Self::MailerAddressFrom,
        Self::AllowAnalyticsCollection,
    ];

    /// The wire name of this key.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GoogleClientId => "GOOGLE_CLIENT_ID",
            Self::GoogleClientSecret => "GOOGLE_CLIENT_SECRET",
            Self::GoogleCallbackUrl => "GOOGLE_CALLBACK_URL",
            Self::GoogleScope => "GOOGLE_SCOPE",
            Self::MicrosoftClientId => "MICROSOFT_CLIENT_ID",
            Self::MicrosoftClientSecret => "MICROSOFT_CLIENT_SECRET",
            Self::MicrosoftCallbackUrl => "MICROSOFT_CALLBACK_URL",
            Self::MicrosoftScope => "MICROSOFT_SCOPE",
            Self::MicrosoftTenant => "MICROSOFT_TENANT",
            Self::GithubClientId => "GITHUB_CLIENT_ID",
            Self::GithubClientSecret => "GITHUB_CLIENT_SECRET",
            Self::GithubCallbackUrl => "GITHUB_CALLBACK_URL",
            Self::GithubScope => "GITHUB_SCOPE",
            Self::OidcClientId => "OIDC_CLIENT_ID",
            Self::OidcClientSecret => "OIDC_CLIENT_SECRET",
            Self::OidcCallbackUrl => "OIDC_CALLBACK_URL",
            Self::OidcScope => "OIDC_SCOPE",
            Self::OidcIssuer => "OIDC_ISSUER",
            Self::OidcAuthUrl => "OIDC_AUTH_URL",
            Self::OidcTokenUrl => "OIDC_TOKEN_URL",
            Self::OidcUserinfoUrl => "OIDC_USERINFO_URL",
            Self::MailerSmtpUrl => "MAILER_SMTP_URL",
            Self::MailerAddressFrom => "MAILER_ADDRESS_FROM",
            Self::AllowAnalyticsCollection => "ALLOW_ANALYTICS_COLLECTION",
        }
    }
}

impl fmt::Display for InfraConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InfraConfigKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown infra config key '{s}'"))
    }
}

/// A single `{name, value}` pair as exchanged with the server.
///
/// The server reports unset entries as `null`; those read as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfraConfigEntry {
    pub name: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub value: String,
}

impl InfraConfigEntry {
    pub fn new(key: InfraConfigKey, value: impl Into<String>) -> Self {
        Self {
            name: key.as_str().to_string(),
            value: value.into(),
        }
    }
}

/// Authentication providers the server can allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuthProvider {
    Google,
    Microsoft,
    Github,
    Oidc,
    Email,
}

impl AuthProvider {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "GOOGLE",
            Self::Microsoft => "MICROSOFT",
            Self::Github => "GITHUB",
            Self::Oidc => "OIDC",
            Self::Email => "EMAIL",
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GOOGLE" => Ok(Self::Google),
            "MICROSOFT" => Ok(Self::Microsoft),
            "GITHUB" => Ok(Self::Github),
            "OIDC" => Ok(Self::Oidc),
            "EMAIL" => Ok(Self::Email),
            other => Err(format!("unknown auth provider '{other}'")),
        }
    }
}

/// Enable/disable switch shared by provider directives and the analytics toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ServiceStatus {
    Enable,
    Disable,
}

impl From<bool> for ServiceStatus {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Enable } else { Self::Disable }
    }
}

/// One element of the provider enable/disable mutation argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDirective {
    pub provider: AuthProvider,
    pub status: ServiceStatus,
}
