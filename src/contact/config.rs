use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SERVICE_ID_VAR: &str = "CONTACT_EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "CONTACT_EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "CONTACT_EMAILJS_PUBLIC_KEY";
pub const API_URL_VAR: &str = "CONTACT_EMAILJS_API_URL";

pub const DEFAULT_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),
}

/// Routing identifiers for the email delivery provider.
///
/// None of these are secrets: the public key is meant to ship to browsers.
/// They are still deployment-scoped and come from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub api_url: String,
}

impl ContactConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |key: &'static str| value(key).ok_or(ConfigError::Missing(key));

        Ok(Self {
            service_id: required(SERVICE_ID_VAR)?,
            template_id: required(TEMPLATE_ID_VAR)?,
            public_key: required(PUBLIC_KEY_VAR)?,
            api_url: value(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }
}
