/// Runtime configuration: the static credential plus endpoint and client identity overrides.
///
/// Values come from the process environment after an optional `.env` file has been
/// loaded. Variables already present in the environment take precedence over `.env`.
use std::env::VarError;
use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Environment variable holding the long-lived GitHub credential.
pub const CREDENTIAL_VAR: &str = "GITHUB_TOKEN";
/// Override for the token authority base URL.
pub const AUTHORITY_VAR: &str = "COPILOT_AUTHORITY_URL";
/// Override for the `editor-version` header.
pub const EDITOR_VERSION_VAR: &str = "COPILOT_EDITOR_VERSION";
/// Override for the `User-Agent` header on the listing request.
pub const USER_AGENT_VAR: &str = "COPILOT_USER_AGENT";

pub const DEFAULT_AUTHORITY: &str = "https://api.github.com";
pub const DEFAULT_EDITOR_VERSION: &str = "vscode/1.97.2";
pub const DEFAULT_USER_AGENT: &str = "VSCode/1.97.2";

/// Number of leading characters kept when a secret is shown.
const REDACT_KEEP: usize = 10;

/// Errors raised while reading configuration. All of them abort before any network call.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is absent.
    #[error("{name} not found in environment or .env file")]
    Missing {
        /// Variable name.
        name: &'static str,
    },

    /// A required variable is present but blank.
    #[error("{name} is set but empty")]
    Empty {
        /// Variable name.
        name: &'static str,
    },

    /// A variable holds bytes that are not valid UTF-8.
    #[error("{name} is not valid unicode")]
    NotUnicode {
        /// Variable name.
        name: &'static str,
    },
}

/// An opaque credential whose `Debug` output never shows the value.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw value, for building request headers.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// The first few characters followed by `...`.
    #[must_use]
    pub fn redacted(&self) -> String {
        redact(&self.0)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// Keep the first `REDACT_KEEP` characters of `value` and append `...`.
#[must_use]
pub fn redact(value: &str) -> String {
    let head: String = value.chars().take(REDACT_KEEP).collect();
    format!("{head}...")
}

/// Fully resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Long-lived credential exchanged for a session token.
    pub credential: Secret,
    /// Base URL of the token authority, without a trailing slash.
    pub authority_url: String,
    /// Value of the `editor-version` header.
    pub editor_version: String,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Config {
    /// Load `.env` (if any) and read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the credential is missing, empty, or not unicode.
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(err) if err.not_found() => tracing::debug!("no .env file found"),
            Err(err) => tracing::warn!(error = %err, "ignoring unreadable .env file"),
        }
        Self::from_lookup(std::env::var)
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the credential is missing, empty, or not unicode.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<String, VarError>,
    {
        let credential = match lookup(CREDENTIAL_VAR) {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::Empty {
                    name: CREDENTIAL_VAR,
                });
            }
            Ok(value) => Secret::new(value.trim()),
            Err(VarError::NotPresent) => {
                return Err(ConfigError::Missing {
                    name: CREDENTIAL_VAR,
                });
            }
            Err(VarError::NotUnicode(_)) => {
                return Err(ConfigError::NotUnicode {
                    name: CREDENTIAL_VAR,
                });
            }
        };

        let authority_url = optional(&lookup, AUTHORITY_VAR, DEFAULT_AUTHORITY)?
            .trim_end_matches('/')
            .to_owned();

        Ok(Self {
            credential,
            authority_url,
            editor_version: optional(&lookup, EDITOR_VERSION_VAR, DEFAULT_EDITOR_VERSION)?,
            user_agent: optional(&lookup, USER_AGENT_VAR, DEFAULT_USER_AGENT)?,
        })
    }
}

/// Read an optional variable, falling back to `default` when absent or blank.
fn optional<F>(lookup: &F, name: &'static str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&'static str) -> Result<String, VarError>,
{
    match lookup(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_owned()),
        Ok(_) | Err(VarError::NotPresent) => Ok(default.to_owned()),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { name }),
    }
}
