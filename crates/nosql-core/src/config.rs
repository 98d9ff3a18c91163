//! Configuration for NoSQL API clients.
//!
//! [`NosqlClientConfig`] collects the endpoint, credentials and zone needed to
//! talk to the appliance API. It can be built in code, deserialized from a file,
//! or loaded from the standard `SAKURACLOUD_*` environment variables.

use crate::error::{Error, Result};
use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use validator::Validate;

/// Default root URL of the appliance API.
pub const DEFAULT_API_ROOT_URL: &str = "https://secure.sakura.ad.jp/cloud/zone/tk1b/api/cloud/1.1";

/// Environment variable holding the access token.
pub const ENV_ACCESS_TOKEN: &str = "SAKURACLOUD_ACCESS_TOKEN";
/// Environment variable holding the access token secret.
pub const ENV_ACCESS_TOKEN_SECRET: &str = "SAKURACLOUD_ACCESS_TOKEN_SECRET";
/// Environment variable holding the default zone.
pub const ENV_ZONE: &str = "SAKURACLOUD_ZONE";
/// Environment variable overriding the API root URL.
pub const ENV_API_ROOT_URL: &str = "SAKURACLOUD_API_ROOT_URL";

const CONFIG_LABEL: &str = "NosqlClientConfig";

/// Configuration for a NoSQL client instance.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NosqlClientConfig {
    /// Root URL of the API
    #[validate(url)]
    #[serde(default = "default_api_root_url")]
    pub api_root_url: String,

    /// Access token used for basic authentication
    #[serde(default)]
    pub access_token: Option<SecretString>,

    /// Access token secret used for basic authentication
    #[serde(default)]
    pub access_token_secret: Option<SecretString>,

    /// Zone name, required for node addition
    #[validate(length(min = 1))]
    #[serde(default)]
    pub zone: Option<String>,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Whether to verify TLS certificates
    #[serde(default = "default_tls_verify")]
    pub tls_verify: bool,
}

fn default_api_root_url() -> String {
    DEFAULT_API_ROOT_URL.to_string()
}

const fn default_request_timeout_secs() -> u64 {
    crate::client::NOSQL_DEFAULT_TIMEOUT
}

const fn default_tls_verify() -> bool {
    true
}

impl NosqlClientConfig {
    /// Create a configuration for the given API root URL.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if validation fails.
    pub fn new(api_root_url: impl Into<String>) -> Result<Self> {
        let config = Self {
            api_root_url: api_root_url.into(),
            ..Self::default()
        };
        config.check()?;
        Ok(config)
    }

    /// Load the configuration from `SAKURACLOUD_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if validation fails.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if validation fails.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = Self::default();
        if let Some(url) = non_empty(ENV_API_ROOT_URL) {
            config.api_root_url = url;
        }
        config.access_token = non_empty(ENV_ACCESS_TOKEN).map(SecretString::from);
        config.access_token_secret = non_empty(ENV_ACCESS_TOKEN_SECRET).map(SecretString::from);
        config.zone = non_empty(ENV_ZONE);

        debug!(
            api_root_url = %config.api_root_url,
            zone = ?config.zone,
            has_credentials = config.has_credentials(),
            "loaded NoSQL client configuration from environment"
        );

        config.check()?;
        Ok(config)
    }

    /// Set the access token and secret.
    #[must_use]
    pub fn with_credentials(
        mut self,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        self.access_token = Some(SecretString::from(access_token.into()));
        self.access_token_secret = Some(SecretString::from(access_token_secret.into()));
        self
    }

    /// Set the zone.
    #[must_use]
    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Set whether to verify TLS certificates.
    #[must_use]
    pub const fn with_tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    /// Returns true when both the token and its secret are present.
    #[must_use]
    pub const fn has_credentials(&self) -> bool {
        self.access_token.is_some() && self.access_token_secret.is_some()
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error describing the invalid fields.
    pub fn check(&self) -> Result<()> {
        self.validate()
            .map_err(|e| Error::new(CONFIG_LABEL, Some(e.into())))?;
        if self.access_token.is_some() != self.access_token_secret.is_some() {
            return Err(Error::config(
                CONFIG_LABEL,
                "access token and access token secret must be set together",
            ));
        }
        Ok(())
    }
}

impl Default for NosqlClientConfig {
    fn default() -> Self {
        Self {
            api_root_url: default_api_root_url(),
            access_token: None,
            access_token_secret: None,
            zone: None,
            request_timeout_secs: default_request_timeout_secs(),
            tls_verify: default_tls_verify(),
        }
    }
}
