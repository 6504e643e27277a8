//! API configuration and credential resolution

use forgotten_prompt_core::{ForgottenPromptError, Result};
use std::fmt;

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "FORGOTTEN_PROMPT_API_KEY";

/// Environment variable overriding the API base URL
pub const API_URL_VAR: &str = "FORGOTTEN_PROMPT_API_URL";

/// Default game API endpoint
pub const DEFAULT_BASE_URL: &str = "https://adventure.wietsevenema.eu/game";

/// Where the API credential comes from
#[derive(Clone)]
pub enum CredentialSource {
    /// Read from the named environment variable on every call
    Env(String),
    /// Fixed value
    Static(String),
}

impl CredentialSource {
    /// Resolve the credential, failing if it is absent or empty
    pub fn resolve(&self) -> Result<String> {
        match self {
            CredentialSource::Env(var) => match std::env::var(var) {
                Ok(value) if !value.is_empty() => Ok(value),
                _ => Err(ForgottenPromptError::Configuration(format!(
                    "{} environment variable is not set.",
                    var
                ))),
            },
            CredentialSource::Static(value) if !value.is_empty() => Ok(value.clone()),
            CredentialSource::Static(_) => Err(ForgottenPromptError::Configuration(
                "API key is empty.".into(),
            )),
        }
    }
}

// Never print a static credential
impl fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Env(var) => f.debug_tuple("Env").field(var).finish(),
            CredentialSource::Static(_) => f.debug_tuple("Static").field(&"[REDACTED]").finish(),
        }
    }
}

/// Configuration for the game API backend
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL without trailing slash
    pub base_url: String,
    /// API key source
    pub credential: CredentialSource,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            credential: CredentialSource::Env(API_KEY_VAR.into()),
        }
    }
}

impl ApiConfig {
    /// Create a config, validating the base URL
    pub fn new(base_url: &str, credential: CredentialSource) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/');
        reqwest::Url::parse(base_url).map_err(|e| {
            ForgottenPromptError::Configuration(format!("Invalid API base URL {}: {}", base_url, e))
        })?;
        Ok(Self {
            base_url: base_url.to_string(),
            credential,
        })
    }

    /// Build from the process environment.
    ///
    /// The API key is not read here; it is resolved on each call.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url, CredentialSource::Env(API_KEY_VAR.into()))
    }
}
