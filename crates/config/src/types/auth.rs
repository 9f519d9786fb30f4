//! Authentication types for the admin API.
//!
//! Responsibilities:
//! - Hold the bearer token used for admin API calls.
//! - Provide secure value storage (plain text or keyring).
//!
//! Does NOT handle:
//! - Sending credentials (see client crate).
//! - Keyring entry creation (only retrieval).
//!
//! Invariants:
//! - Tokens are `secrecy::SecretString` at runtime.
//! - `KEYRING_SERVICE` is the canonical service name for keyring lookups.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::constants::KEYRING_SERVICE;

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Bearer token sent with every admin API request.
    #[serde(with = "secret_string")]
    pub token: SecretString,
}

/// A value that can be stored either in plain text or in the system keyring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SecureValue {
    /// Value stored in the system keyring.
    Keyring {
        /// The account name in the keyring.
        keyring_account: String,
    },
    /// Value stored in plain text.
    #[serde(with = "secret_string")]
    Plain(SecretString),
}

impl SecureValue {
    /// Resolve the secure value to a SecretString.
    ///
    /// Keyring-backed values are fetched on every call.
    pub fn resolve(&self) -> Result<SecretString, keyring::Error> {
        match self {
            Self::Plain(secret) => Ok(secret.clone()),
            Self::Keyring { keyring_account } => {
                let entry = keyring::Entry::new(KEYRING_SERVICE, keyring_account)?;
                let token = entry.get_password()?;
                Ok(SecretString::new(token.into()))
            }
        }
    }
}
