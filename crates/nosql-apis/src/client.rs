//! Asynchronous v1 transport client.
//!
//! [`NosqlApi`] exposes one method per remote action. Each method performs a
//! single HTTP request and reports the response as an [`ApiResponse`] shape;
//! only network, URL and decoding problems become a [`TransportError`].

use crate::models::{
    ErrorResponse, GetParameterResponse, ListDbParams, NodeHealth, NosqlBackupResponse,
    NosqlCreateRequest, NosqlCreateResponse, NosqlGetResponse, NosqlGetVersionResponse,
    NosqlListResponse, NosqlOkResponse, NosqlPutVersionRequest, NosqlRepairRequest,
    NosqlStatusResponse, NosqlUpdateRequest, PutParameterRequest, RecoverStatus,
};
use crate::response::{ApiResponse, Documented};
use crate::TransportResult;
use async_trait::async_trait;
use nosql_core::client::ClientConfig;
use nosql_core::query::QueryParams;
use nosql_core::{ApplianceId, BackupUuid, TransportError};
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Client, ClientBuilder, Method, Request, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

const DEFAULT_USER_AGENT: &str = concat!("nosql-apis/", env!("CARGO_PKG_VERSION"));

/// Hook run on every outgoing request after it has been built.
pub type RequestCustomizer =
    Arc<dyn Fn(&mut Request) -> Result<(), TransportError> + Send + Sync>;

/// Remote actions of the NoSQL appliance API.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait NosqlApi: Send + Sync {
    /// `GET /appliance`
    async fn list_db(&self, params: &ListDbParams) -> TransportResult<ApiResponse<NosqlListResponse>>;

    /// `POST /appliance`
    async fn create_db(
        &self,
        request: &NosqlCreateRequest,
    ) -> TransportResult<ApiResponse<NosqlCreateResponse>>;

    /// `GET /appliance/{id}`
    async fn get_db(&self, id: &ApplianceId) -> TransportResult<ApiResponse<NosqlGetResponse>>;

    /// `PUT /appliance/{id}`
    async fn update_db(
        &self,
        id: &ApplianceId,
        request: &NosqlUpdateRequest,
    ) -> TransportResult<ApiResponse<NosqlOkResponse>>;

    /// `DELETE /appliance/{id}`
    async fn delete_db(&self, id: &ApplianceId) -> TransportResult<ApiResponse<NosqlOkResponse>>;

    /// `PUT /appliance/{id}/config`
    async fn update_config_db(
        &self,
        id: &ApplianceId,
    ) -> TransportResult<ApiResponse<NosqlOkResponse>>;

    /// `GET /appliance/{id}/status`
    async fn confirm_status_db(
        &self,
        id: &ApplianceId,
    ) -> TransportResult<ApiResponse<NosqlStatusResponse>>;

    /// `GET /appliance/{id}/nosql/backups`
    async fn get_backups(
        &self,
        id: &ApplianceId,
    ) -> TransportResult<ApiResponse<NosqlBackupResponse>>;

    /// `POST /appliance/{id}/nosql/backups`
    async fn create_backup(&self, id: &ApplianceId)
        -> TransportResult<ApiResponse<NosqlOkResponse>>;

    /// `PUT /appliance/{id}/nosql/backups/{backup}/restore`
    async fn restore_backup(
        &self,
        id: &ApplianceId,
        backup: BackupUuid,
    ) -> TransportResult<ApiResponse<NosqlOkResponse>>;

    /// `DELETE /appliance/{id}/nosql/backups/{backup}`
    async fn delete_backup(
        &self,
        id: &ApplianceId,
        backup: BackupUuid,
    ) -> TransportResult<ApiResponse<NosqlOkResponse>>;

    /// `GET /appliance/{id}/nosql/version`
    async fn get_version(
        &self,
        id: &ApplianceId,
    ) -> TransportResult<ApiResponse<NosqlGetVersionResponse>>;

    /// `PUT /appliance/{id}/nosql/version`
    async fn put_version(
        &self,
        id: &ApplianceId,
        request: &NosqlPutVersionRequest,
    ) -> TransportResult<ApiResponse<NosqlOkResponse>>;

    /// `GET /appliance/{id}/nosql/parameters`
    async fn get_parameter(
        &self,
        id: &ApplianceId,
    ) -> TransportResult<ApiResponse<GetParameterResponse>>;

    /// `PUT /appliance/{id}/nosql/parameters`
    async fn put_parameter(
        &self,
        id: &ApplianceId,
        request: &PutParameterRequest,
    ) -> TransportResult<ApiResponse<NosqlOkResponse>>;

    /// `GET /appliance/{id}/nosql/node_health`
    async fn get_node_health(&self, id: &ApplianceId) -> TransportResult<ApiResponse<NodeHealth>>;

    /// `PUT /appliance/{id}/nosql/recover`
    async fn recover_node(&self, id: &ApplianceId) -> TransportResult<ApiResponse<RecoverStatus>>;

    /// `POST /appliance/{id}/nosql/repair`
    async fn post_repair(
        &self,
        id: &ApplianceId,
        request: &NosqlRepairRequest,
    ) -> TransportResult<ApiResponse<NosqlRepairRequest>>;

    /// `PUT /appliance/{id}/power`
    async fn put_power(&self, id: &ApplianceId) -> TransportResult<ApiResponse<NosqlOkResponse>>;

    /// `DELETE /appliance/{id}/power`
    async fn delete_power(&self, id: &ApplianceId)
        -> TransportResult<ApiResponse<NosqlOkResponse>>;
}

#[derive(Clone)]
struct BasicCredentials {
    access_token: String,
    access_token_secret: SecretString,
}

/// Builder for [`V1Client`].
#[derive(Clone)]
pub struct V1ClientBuilder {
    base_url: Url,
    http_config: ClientConfig,
    user_agent: String,
    customizers: Vec<RequestCustomizer>,
    credentials: Option<BasicCredentials>,
    tls_verify: bool,
}

impl fmt::Debug for V1ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("V1ClientBuilder")
            .field("base_url", &self.base_url.as_str())
            .field("http_config", &self.http_config)
            .field("user_agent", &self.user_agent)
            .field("customizers", &self.customizers.len())
            .field("has_credentials", &self.credentials.is_some())
            .field("tls_verify", &self.tls_verify)
            .finish()
    }
}

impl V1ClientBuilder {
    /// Create a builder for the specified API root URL.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidEndpoint`] if the URL cannot be parsed.
    pub fn new(base_url: impl AsRef<str>) -> TransportResult<Self> {
        let mut base_url = Url::parse(base_url.as_ref())?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            base_url,
            http_config: ClientConfig::new(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            customizers: Vec::new(),
            credentials: None,
            tls_verify: true,
        })
    }

    /// Override the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Append a request customizer. Customizers run in insertion order.
    #[must_use]
    pub fn with_customizer<F>(mut self, customizer: F) -> Self
    where
        F: Fn(&mut Request) -> Result<(), TransportError> + Send + Sync + 'static,
    {
        self.customizers.push(Arc::new(customizer));
        self
    }

    /// Configure HTTP basic authentication with an access token and secret.
    #[must_use]
    pub fn with_credentials(
        mut self,
        access_token: impl Into<String>,
        access_token_secret: SecretString,
    ) -> Self {
        self.credentials = Some(BasicCredentials {
            access_token: access_token.into(),
            access_token_secret,
        });
        self
    }

    /// Set whether to verify TLS certificates.
    #[must_use]
    pub const fn with_tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(self) -> TransportResult<V1Client> {
        let mut builder = ClientBuilder::new()
            .user_agent(self.user_agent.as_str())
            .timeout(self.http_config.timeout)
            .connect_timeout(self.http_config.connect_timeout)
            .pool_idle_timeout(self.http_config.pool_idle_timeout)
            .pool_max_idle_per_host(self.http_config.pool_max_idle_per_host)
            .gzip(self.http_config.enable_compression);

        if !self.tls_verify {
            warn!("TLS verification disabled for NoSQL API client");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder.build()?;

        Ok(V1Client {
            http,
            base_url: self.base_url,
            user_agent: self.user_agent,
            customizers: self.customizers.into(),
            credentials: self.credentials,
        })
    }
}

/// reqwest-backed implementation of [`NosqlApi`].
#[derive(Clone)]
pub struct V1Client {
    http: Client,
    base_url: Url,
    user_agent: String,
    customizers: Arc<[RequestCustomizer]>,
    credentials: Option<BasicCredentials>,
}

impl fmt::Debug for V1Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("V1Client")
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .field("customizers", &self.customizers.len())
            .finish_non_exhaustive()
    }
}

impl V1Client {
    /// Construct a client directly from the API root URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be built.
    pub fn new(base_url: impl AsRef<str>) -> TransportResult<Self> {
        V1ClientBuilder::new(base_url)?.build()
    }

    /// Start a builder for the given API root URL.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidEndpoint`] if the URL cannot be parsed.
    pub fn builder(base_url: impl AsRef<str>) -> TransportResult<V1ClientBuilder> {
        V1ClientBuilder::new(base_url)
    }

    /// Return the API root URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Return the user agent sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Resolve path segments against the API root, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> TransportResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                TransportError::InvalidEndpoint(url::ParseError::RelativeUrlWithCannotBeABaseBase)
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<B>(
        &self,
        method: Method,
        segments: &[&str],
        query: &QueryParams,
        body: Option<&B>,
    ) -> TransportResult<Response>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(segments)?;
        let mut builder = self
            .http
            .request(method, url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        if !query.is_empty() {
            builder = builder.query(query.as_pairs());
        }
        if let Some(payload) = body {
            builder = builder.json(payload);
        }
        if let Some(credentials) = &self.credentials {
            builder = builder.basic_auth(
                &credentials.access_token,
                Some(credentials.access_token_secret.expose_secret()),
            );
        }

        let mut request = builder.build()?;
        for customizer in self.customizers.iter() {
            customizer(&mut request)?;
        }

        debug!(method = %request.method(), url = %request.url(), "sending NoSQL API request");
        Ok(self.http.execute(request).await?)
    }

    async fn call<B, T>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
        documented: Documented,
    ) -> TransportResult<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(method, segments, &QueryParams::new(), body).await?;
        decode(response, documented).await
    }
}

async fn decode<T>(response: Response, documented: Documented) -> TransportResult<ApiResponse<T>>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let bytes = response.bytes().await?;

    if status.is_success() {
        let payload: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &bytes[..]
        };
        return Ok(ApiResponse::Success(serde_json::from_slice(payload)?));
    }

    Ok(failure_shape(status, &bytes, documented))
}

fn failure_shape<T>(status: StatusCode, bytes: &[u8], documented: Documented) -> ApiResponse<T> {
    let text = String::from_utf8_lossy(bytes);

    if documented.contains(status) {
        let body = serde_json::from_slice::<ErrorResponse>(bytes)
            .unwrap_or_else(|_| ErrorResponse::with_message(text.trim()));
        if let Some(shape) = ApiResponse::failure(status, body) {
            return shape;
        }
    }

    warn!(status = status.as_u16(), "undocumented NoSQL API response");
    ApiResponse::Unexpected {
        status: status.as_u16(),
        body: text.into_owned(),
    }
}

fn appliance_path<'a>(id: &'a ApplianceId, rest: &[&'a str]) -> Vec<&'a str> {
    let mut segments = vec!["appliance", id.as_str()];
    segments.extend_from_slice(rest);
    segments
}

#[async_trait]
impl NosqlApi for V1Client {
    async fn list_db(&self, params: &ListDbParams) -> TransportResult<ApiResponse<NosqlListResponse>> {
        let response = self
            .send::<()>(Method::GET, &["appliance"], &params.to_query(), None)
            .await?;
        decode(response, Documented::COMMON).await
    }

    async fn create_db(
        &self,
        request: &NosqlCreateRequest,
    ) -> TransportResult<ApiResponse<NosqlCreateResponse>> {
        self.call(Method::POST, &["appliance"], Some(request), Documented::WITH_CONFLICT)
            .await
    }

    async fn get_db(&self, id: &ApplianceId) -> TransportResult<ApiResponse<NosqlGetResponse>> {
        let path = appliance_path(id, &[]);
        self.call::<(), _>(Method::GET, &path, None, Documented::WITH_NOT_FOUND)
            .await
    }

    async fn update_db(
        &self,
        id: &ApplianceId,
        request: &NosqlUpdateRequest,
    ) -> TransportResult<ApiResponse<NosqlOkResponse>> {
        let path = appliance_path(id, &[]);
        self.call(Method::PUT, &path, Some(request), Documented::COMMON)
            .await
    }

    async fn delete_db(&self, id: &ApplianceId) -> TransportResult<ApiResponse<NosqlOkResponse>> {
        let path = appliance_path(id, &[]);
        self.call::<(), _>(Method::DELETE, &path, None, Documented::COMMON)
            .await
    }

    async fn update_config_db(
        &self,
        id: &ApplianceId,
    ) -> TransportResult<ApiResponse<NosqlOkResponse>> {
        let path = appliance_path(id, &["config"]);
        self.call::<(), _>(Method::PUT, &path, None, Documented::BAD_REQUEST_ONLY)
            .await
    }

    async fn confirm_status_db(
        &self,
        id: &ApplianceId,
    ) -> TransportResult<ApiResponse<NosqlStatusResponse>> {
        let path = appliance_path(id, &["status"]);
        self.call::<(), _>(Method::GET, &path, None, Documented::COMMON)
            .await
    }

    async fn get_backups(
        &self,
        id: &ApplianceId,
    ) -> TransportResult<ApiResponse<NosqlBackupResponse>> {
        let path = appliance_path(id, &["nosql", "backups"]);
        self.call::<(), _>(Method::GET, &path, None, Documented::COMMON)
            .await
    }

    async fn create_backup(
        &self,
        id: &ApplianceId,
    ) -> TransportResult<ApiResponse<NosqlOkResponse>> {
        let path = appliance_path(id, &["nosql", "backups"]);
        self.call::<(), _>(Method::POST, &path, None, Documented::WITH_NOT_FOUND)
            .await
    }

    async fn restore_backup(
        &self,
        id: &ApplianceId,
        backup: BackupUuid,
    ) -> TransportResult<ApiResponse<NosqlOkResponse>> {
        let backup = backup.to_string();
        let path = appliance_path(id, &["nosql", "backups", &backup, "restore"]);
        self.call::<(), _>(Method::PUT, &path, None, Documented::WITH_NOT_FOUND)
            .await
    }

    async fn delete_backup(
        &self,
        id: &ApplianceId,
        backup: BackupUuid,
    ) -> TransportResult<ApiResponse<NosqlOkResponse>> {
        let backup = backup.to_string();
        let path = appliance_path(id, &["nosql", "backups", &backup]);
        self.call::<(), _>(Method::DELETE, &path, None, Documented::WITH_NOT_FOUND)
            .await
    }

    async fn get_version(
        &self,
        id: &ApplianceId,
    ) -> TransportResult<ApiResponse<NosqlGetVersionResponse>> {
        let path = appliance_path(id, &["nosql", "version"]);
        self.call::<(), _>(Method::GET, &path, None, Documented::COMMON)
            .await
    }

    async fn put_version(
        &self,
        id: &ApplianceId,
        request: &NosqlPutVersionRequest,
    ) -> TransportResult<ApiResponse<NosqlOkResponse>> {
        let path = appliance_path(id, &["nosql", "version"]);
        self.call(Method::PUT, &path, Some(request), Documented::COMMON)
            .await
    }

    async fn get_parameter(
        &self,
        id: &ApplianceId,
    ) -> TransportResult<ApiResponse<GetParameterResponse>> {
        let path = appliance_path(id, &["nosql", "parameters"]);
        self.call::<(), _>(Method::GET, &path, None, Documented::COMMON)
            .await
    }

    async fn put_parameter(
        &self,
        id: &ApplianceId,
        request: &PutParameterRequest,
    ) -> TransportResult<ApiResponse<NosqlOkResponse>> {
        let path = appliance_path(id, &["nosql", "parameters"]);
        self.call(Method::PUT, &path, Some(request), Documented::COMMON)
            .await
    }

    async fn get_node_health(&self, id: &ApplianceId) -> TransportResult<ApiResponse<NodeHealth>> {
        let path = appliance_path(id, &["nosql", "node_health"]);
        self.call::<(), _>(Method::GET, &path, None, Documented::COMMON)
            .await
    }

    async fn recover_node(&self, id: &ApplianceId) -> TransportResult<ApiResponse<RecoverStatus>> {
        let path = appliance_path(id, &["nosql", "recover"]);
        let response = self
            .send::<()>(Method::PUT, &path, &QueryParams::new(), None)
            .await?;

        match response.status() {
            StatusCode::OK => Ok(ApiResponse::Success(RecoverStatus::Completed)),
            StatusCode::ACCEPTED => Ok(ApiResponse::Success(RecoverStatus::InProgress)),
            status => {
                let bytes = response.bytes().await?;
                Ok(failure_shape(status, &bytes, Documented::COMMON))
            }
        }
    }

    async fn post_repair(
        &self,
        id: &ApplianceId,
        request: &NosqlRepairRequest,
    ) -> TransportResult<ApiResponse<NosqlRepairRequest>> {
        let path = appliance_path(id, &["nosql", "repair"]);
        self.call(Method::POST, &path, Some(request), Documented::COMMON)
            .await
    }

    async fn put_power(&self, id: &ApplianceId) -> TransportResult<ApiResponse<NosqlOkResponse>> {
        let path = appliance_path(id, &["power"]);
        self.call::<(), _>(Method::PUT, &path, None, Documented::WITH_NOT_FOUND)
            .await
    }

    async fn delete_power(
        &self,
        id: &ApplianceId,
    ) -> TransportResult<ApiResponse<NosqlOkResponse>> {
        let path = appliance_path(id, &["power"]);
        self.call::<(), _>(Method::DELETE, &path, None, Documented::WITH_NOT_FOUND)
            .await
    }
}
