//! Error types for NoSQL appliance operations.
//!
//! Every operation reports failures through a single [`Error`] value: a short
//! operation label (for example `Database.Read`) plus an optional [`Cause`].
//! Remote failures are described by [`ApiError`], which carries the HTTP status
//! code and the message supplied by the API, while network and encoding problems
//! surface as [`TransportError`] at the end of the source chain.

use thiserror::Error;

/// Prefix used when rendering an [`Error`].
pub const ERROR_PREFIX: &str = "nosql";

/// Failure that happened before a response shape could be determined.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request did not complete before the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// The connection to the API endpoint could not be established.
    #[error("connection failed: {0}")]
    Connect(#[source] reqwest::Error),

    /// Any other failure reported by the HTTP stack.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// The response body could not be decoded.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request URL could not be built.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// A request customizer rejected the outgoing request.
    #[error("request customizer failed: {0}")]
    Customizer(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else if err.is_connect() {
            Self::Connect(err)
        } else {
            Self::Http(err)
        }
    }
}

/// Error returned for a single API call.
///
/// `code` is the HTTP status of a documented failure response, or `0` when the
/// call failed in transport or produced a response shape the client does not
/// know about.
#[derive(Error, Debug)]
#[error("{}", describe_api_error(.code, .message, .source))]
pub struct ApiError {
    code: u16,
    message: String,
    source: Option<TransportError>,
}

impl ApiError {
    /// Build an error for a documented failure response.
    #[must_use]
    pub fn remote(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Build an error wrapping a transport failure (code `0`).
    #[must_use]
    pub const fn transport(source: TransportError) -> Self {
        Self {
            code: 0,
            message: String::new(),
            source: Some(source),
        }
    }

    /// Build an error for an unrecognized response shape (code `0`, no message).
    #[must_use]
    pub const fn unexpected() -> Self {
        Self {
            code: 0,
            message: String::new(),
            source: None,
        }
    }

    /// HTTP status code of the failure, `0` when none applies.
    #[must_use]
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// Message supplied by the API.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Underlying transport failure, if any.
    #[must_use]
    pub const fn transport_error(&self) -> Option<&TransportError> {
        self.source.as_ref()
    }

    /// Returns the error code for programmatic handling.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self.code {
            0 if self.source.is_some() => "TRANSPORT_ERROR",
            0 => "UNEXPECTED_RESPONSE",
            400 => "BAD_REQUEST",
            401 => "UNAUTHORIZED",
            404 => "NOT_FOUND",
            409 => "CONFLICT",
            500 => "SERVER_ERROR",
            _ => "API_ERROR",
        }
    }

    /// Returns true when the remote service reported the resource as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.code == 404
    }
}

fn describe_api_error(code: &u16, message: &str, source: &Option<TransportError>) -> String {
    let mut text = if *code == 0 {
        "API error".to_string()
    } else {
        format!("API error {code}")
    };
    if !message.is_empty() {
        text.push_str(": ");
        text.push_str(message);
    }
    match source {
        Some(err) => {
            text.push_str(": ");
            text.push_str(&err.to_string());
        }
        None if *code == 0 && message.is_empty() => text.push_str(": unexpected response"),
        None => {}
    }
    text
}

/// Underlying reason attached to an [`Error`].
#[derive(Error, Debug)]
pub enum Cause {
    /// The API call failed.
    #[error(transparent)]
    Api(ApiError),

    /// Local configuration problem detected before any request was sent.
    #[error("{0}")]
    Config(String),

    /// Transport setup failed (for example while building the HTTP client).
    #[error(transparent)]
    Transport(TransportError),
}

impl From<ApiError> for Cause {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}

impl From<TransportError> for Cause {
    fn from(err: TransportError) -> Self {
        Self::Transport(err)
    }
}

impl From<validator::ValidationErrors> for Cause {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Config(format!("invalid configuration: {err}"))
    }
}

/// Main error type for NoSQL operations.
#[derive(Error, Debug)]
#[error("{}", render(.label, .source))]
pub struct Error {
    label: String,
    source: Option<Cause>,
}

fn render(label: &str, cause: &Option<Cause>) -> String {
    match (label.is_empty(), cause) {
        (false, Some(cause)) => format!("{ERROR_PREFIX}: {label}: {cause}"),
        (false, None) => format!("{ERROR_PREFIX}: {label}"),
        (true, Some(cause)) => format!("{ERROR_PREFIX}: {cause}"),
        (true, None) => format!("{ERROR_PREFIX}: unknown error"),
    }
}

/// Specialized result type for NoSQL operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error from a label and an optional cause.
    #[must_use]
    pub fn new(label: impl Into<String>, cause: Option<Cause>) -> Self {
        Self {
            label: label.into(),
            source: cause,
        }
    }

    /// Create an error for a failed API call.
    #[must_use]
    pub fn api(label: impl Into<String>, err: ApiError) -> Self {
        Self::new(label, Some(Cause::Api(err)))
    }

    /// Create a local configuration error.
    #[must_use]
    pub fn config(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(label, Some(Cause::Config(message.into())))
    }

    /// Operation label, empty when the error only carries a cause.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Attached cause.
    #[must_use]
    pub const fn cause(&self) -> Option<&Cause> {
        self.source.as_ref()
    }

    /// API error details, when the failure came from an API call.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match &self.source {
            Some(Cause::Api(err)) => Some(err),
            _ => None,
        }
    }

    /// Status code carried by the API error, if any.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.api_error().map(ApiError::code)
    }

    /// Returns true for locally detected configuration errors.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self.source, Some(Cause::Config(_)))
    }
}

impl From<Cause> for Error {
    fn from(cause: Cause) -> Self {
        Self::new("", Some(cause))
    }
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        Cause::from(err).into()
    }
}
