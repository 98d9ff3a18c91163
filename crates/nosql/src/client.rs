//! Client construction.
//!
//! Every client built here identifies itself with [`user_agent`] and force-sets
//! [`BIGINT_AS_INT_HEADER`] to `0` so the API keeps 64-bit identifiers as
//! strings instead of turning them into JSON numbers.

use nosql_apis::{RequestCustomizer, V1Client, V1ClientBuilder};
use nosql_core::client::ClientConfig;
use nosql_core::config::{NosqlClientConfig, DEFAULT_API_ROOT_URL};
use nosql_core::{Error, Result, TransportError};
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Request;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Header controlling how the API renders large integers.
pub const BIGINT_AS_INT_HEADER: &str = "X-Sakura-Bigint-As-Int";

const CLIENT_LABEL: &str = "NewClientWithApiUrl";
const REPOSITORY: &str = "https://github.com/sacloud/nosql-api-rust";

/// User agent sent with every request.
///
/// Composed of the library identity, the runtime platform and the HTTP stack,
/// for example `nosql-api-rust/0.1.0 (linux/x86_64; +https://github.com/sacloud/nosql-api-rust) reqwest/0.12`.
#[must_use]
pub fn user_agent() -> String {
    format!(
        "nosql-api-rust/{} ({}/{}; +{}) reqwest/0.12",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH,
        REPOSITORY,
    )
}

fn suppress_bigint_coercion(request: &mut Request) -> std::result::Result<(), TransportError> {
    request.headers_mut().insert(
        HeaderName::from_static("x-sakura-bigint-as-int"),
        HeaderValue::from_static("0"),
    );
    Ok(())
}

/// Builder for NoSQL transport clients.
#[derive(Clone)]
pub struct NosqlClientBuilder {
    api_root_url: String,
    http_config: ClientConfig,
    customizers: Vec<RequestCustomizer>,
    credentials: Option<(String, SecretString)>,
    tls_verify: bool,
}

impl fmt::Debug for NosqlClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NosqlClientBuilder")
            .field("api_root_url", &self.api_root_url)
            .field("http_config", &self.http_config)
            .field("customizers", &self.customizers.len())
            .field("has_credentials", &self.credentials.is_some())
            .field("tls_verify", &self.tls_verify)
            .finish()
    }
}

impl Default for NosqlClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NosqlClientBuilder {
    /// Create a builder targeting [`DEFAULT_API_ROOT_URL`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_root_url: DEFAULT_API_ROOT_URL.to_string(),
            http_config: ClientConfig::new(),
            customizers: Vec::new(),
            credentials: None,
            tls_verify: true,
        }
    }

    /// Create a builder from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the configuration is invalid.
    pub fn from_config(config: &NosqlClientConfig) -> Result<Self> {
        config.check()?;

        let mut builder = Self::new()
            .with_api_root_url(config.api_root_url.clone())
            .with_http_config(ClientConfig::new().with_timeout(config.timeout()))
            .with_tls_verify(config.tls_verify);

        if let (Some(token), Some(secret)) = (&config.access_token, &config.access_token_secret) {
            builder = builder.with_credentials(token.expose_secret(), secret.clone());
        }

        Ok(builder)
    }

    /// Override the API root URL.
    #[must_use]
    pub fn with_api_root_url(mut self, url: impl Into<String>) -> Self {
        self.api_root_url = url.into();
        self
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Add a request customizer. It runs before the big-integer header is set.
    #[must_use]
    pub fn with_customizer<F>(mut self, customizer: F) -> Self
    where
        F: Fn(&mut Request) -> std::result::Result<(), TransportError> + Send + Sync + 'static,
    {
        self.customizers.push(Arc::new(customizer));
        self
    }

    /// Use HTTP basic authentication.
    #[must_use]
    pub fn with_credentials(
        mut self,
        access_token: impl Into<String>,
        access_token_secret: SecretString,
    ) -> Self {
        self.credentials = Some((access_token.into(), access_token_secret));
        self
    }

    /// Set whether to verify TLS certificates.
    #[must_use]
    pub const fn with_tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    /// Build the transport client.
    ///
    /// # Errors
    ///
    /// Returns an error labelled `NewClientWithApiUrl` if the URL is invalid or
    /// the HTTP client cannot be constructed.
    pub fn build(self) -> Result<V1Client> {
        let wrap = |err: TransportError| Error::new(CLIENT_LABEL, Some(err.into()));

        let mut builder = V1ClientBuilder::new(&self.api_root_url)
            .map_err(wrap)?
            .with_user_agent(user_agent())
            .with_http_config(self.http_config)
            .with_tls_verify(self.tls_verify);

        if let Some((token, secret)) = self.credentials {
            builder = builder.with_credentials(token, secret);
        }
        for customizer in self.customizers {
            builder = builder.with_customizer(move |request| customizer(request));
        }
        builder = builder.with_customizer(suppress_bigint_coercion);

        debug!(
            api_root_url = %self.api_root_url,
            tls_verify = self.tls_verify,
            "building NoSQL client"
        );

        builder.build().map_err(wrap)
    }
}

/// Create a client for [`DEFAULT_API_ROOT_URL`].
///
/// # Errors
///
/// Returns an error labelled `NewClientWithApiUrl` if the client cannot be built.
pub fn new_client() -> Result<V1Client> {
    new_client_with_api_url(DEFAULT_API_ROOT_URL)
}

/// Create a client for the given API root URL.
///
/// # Errors
///
/// Returns an error labelled `NewClientWithApiUrl` if the URL is invalid or the
/// client cannot be built.
pub fn new_client_with_api_url(api_url: &str) -> Result<V1Client> {
    NosqlClientBuilder::new().with_api_root_url(api_url).build()
}

/// Create a client from a configuration, for example one loaded with
/// [`NosqlClientConfig::from_env`].
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the client cannot be built.
pub fn new_client_from_config(config: &NosqlClientConfig) -> Result<V1Client> {
    NosqlClientBuilder::from_config(config)?.build()
}
