//! Request access and cross-origin settings.

use crate::{env_optional, env_or_default, ConfigError, FromEnv};
use std::fmt;
use std::str::FromStr;

/// Which requests the HTTP layer lets through.
///
/// Only `permit_all` exists: every endpoint is reachable without
/// credentials. Any other configured value is rejected at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessPolicy {
    #[default]
    PermitAll,
}

impl AccessPolicy {
    pub const SUPPORTED: &'static [&'static str] = &["permit_all"];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessPolicy::PermitAll => "permit_all",
        }
    }

    pub fn permits_anonymous(&self) -> bool {
        matches!(self, AccessPolicy::PermitAll)
    }
}

impl fmt::Display for AccessPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "permit_all" => Ok(AccessPolicy::PermitAll),
            other => Err(ConfigError::UnsupportedValue {
                key: "ACCESS_POLICY".to_string(),
                value: other.to_string(),
                expected: Self::SUPPORTED.join(", "),
            }),
        }
    }
}

/// HTTP-level security settings
#[derive(Clone, Debug, Default)]
pub struct SecurityConfig {
    pub access_policy: AccessPolicy,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
}

impl FromEnv for SecurityConfig {
    /// - `ACCESS_POLICY`: defaults to `permit_all`
    /// - `CORS_ALLOWED_ORIGIN`: comma-separated origins, unset allows any
    fn from_env() -> Result<Self, ConfigError> {
        let access_policy = env_or_default("ACCESS_POLICY", "permit_all").parse()?;
        let cors_allowed_origins = env_optional("CORS_ALLOWED_ORIGIN")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            access_policy,
            cors_allowed_origins,
        })
    }
}
