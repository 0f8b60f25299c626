//! Session state and precondition validation

use serde::{Deserialize, Serialize};

use super::error::AtlasError;

/// Static SDK configuration supplied by the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasConfig {
    base_url: String,
}

impl AtlasConfig {
    /// Create a configuration pointing at the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// The configured backend base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a backend function endpoint.
    pub fn function_url(&self, function: &str) -> String {
        format!(
            "{}/functions/v1/{}",
            self.base_url.trim_end_matches('/'),
            function
        )
    }
}

/// Mutable per-instance session state.
///
/// Overwritten wholesale by `configure`; there are no merge semantics. The
/// client wraps this in a mutex so validation reads every field in one
/// critical section and hands back an owned snapshot, which in-flight
/// operations keep using across later reconfiguration.
#[derive(Debug, Default)]
pub struct Session {
    config: Option<AtlasConfig>,
    api_key: Option<String>,
    user_id: Option<String>,
}

/// Snapshot of the fields needed for an unauthenticated backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSnapshot {
    pub config: AtlasConfig,
    pub api_key: String,
}

/// Snapshot of the fields needed for an authenticated backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub config: AtlasConfig,
    pub api_key: String,
    pub user_id: String,
}

impl Session {
    /// Replace the configuration and API key. The API key is trimmed.
    pub fn configure(&mut self, config: AtlasConfig, api_key: &str) {
        self.config = Some(config);
        self.api_key = Some(api_key.trim().to_string());
    }

    /// Record the logged-in user. The user ID is trimmed.
    pub fn log_in(&mut self, user_id: &str) {
        self.user_id = Some(user_id.trim().to_string());
    }

    /// Forget all configuration and authentication state.
    pub fn reset(&mut self) {
        self.config = None;
        self.api_key = None;
        self.user_id = None;
    }

    /// Validate the preconditions for an unauthenticated call.
    pub fn validated_config(&self) -> Result<ConfigSnapshot, AtlasError> {
        let config = self.config.clone().ok_or(AtlasError::NotConfigured)?;
        let api_key = match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => return Err(AtlasError::NotConfigured),
        };
        Ok(ConfigSnapshot { config, api_key })
    }

    /// Validate the preconditions for an authenticated call.
    pub fn validated_auth(&self) -> Result<AuthSnapshot, AtlasError> {
        let ConfigSnapshot { config, api_key } = self.validated_config()?;
        let user_id = match self.user_id.as_deref() {
            Some(user) if !user.is_empty() => user.to_string(),
            _ => return Err(AtlasError::NotLoggedIn),
        };
        Ok(AuthSnapshot {
            config,
            api_key,
            user_id,
        })
    }
}
