//! Response shapes returned by the transport client.

use crate::models::ErrorResponse;
use reqwest::StatusCode;

/// One concrete response shape of a remote call.
///
/// Each operation documents which failure statuses it may return; any other
/// status is reported as [`ApiResponse::Unexpected`].
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    /// Documented success response.
    Success(T),
    /// HTTP 400.
    BadRequest(ErrorResponse),
    /// HTTP 401.
    Unauthorized(ErrorResponse),
    /// HTTP 404.
    NotFound(ErrorResponse),
    /// HTTP 409.
    Conflict(ErrorResponse),
    /// HTTP 500.
    ServerError(ErrorResponse),
    /// Response the operation does not document.
    Unexpected {
        /// HTTP status received.
        status: u16,
        /// Raw response body.
        body: String,
    },
}

impl<T> ApiResponse<T> {
    /// Map the success value, keeping every other shape.
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => ApiResponse::Success(f(value)),
            Self::BadRequest(body) => ApiResponse::BadRequest(body),
            Self::Unauthorized(body) => ApiResponse::Unauthorized(body),
            Self::NotFound(body) => ApiResponse::NotFound(body),
            Self::Conflict(body) => ApiResponse::Conflict(body),
            Self::ServerError(body) => ApiResponse::ServerError(body),
            Self::Unexpected { status, body } => ApiResponse::Unexpected { status, body },
        }
    }

    /// Returns true for the success shape.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Build the failure shape for a documented error status.
    ///
    /// Returns `None` when the status has no dedicated shape.
    #[must_use]
    pub fn failure(status: StatusCode, body: ErrorResponse) -> Option<Self> {
        match status {
            StatusCode::BAD_REQUEST => Some(Self::BadRequest(body)),
            StatusCode::UNAUTHORIZED => Some(Self::Unauthorized(body)),
            StatusCode::NOT_FOUND => Some(Self::NotFound(body)),
            StatusCode::CONFLICT => Some(Self::Conflict(body)),
            StatusCode::INTERNAL_SERVER_ERROR => Some(Self::ServerError(body)),
            _ => None,
        }
    }
}

/// Failure statuses an operation documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Documented(&'static [StatusCode]);

impl Documented {
    /// 400, 401, 500.
    pub const COMMON: Self = Self(&[
        StatusCode::BAD_REQUEST,
        StatusCode::UNAUTHORIZED,
        StatusCode::INTERNAL_SERVER_ERROR,
    ]);

    /// 400, 401, 404, 500.
    pub const WITH_NOT_FOUND: Self = Self(&[
        StatusCode::BAD_REQUEST,
        StatusCode::UNAUTHORIZED,
        StatusCode::NOT_FOUND,
        StatusCode::INTERNAL_SERVER_ERROR,
    ]);

    /// 400, 401, 409, 500.
    pub const WITH_CONFLICT: Self = Self(&[
        StatusCode::BAD_REQUEST,
        StatusCode::UNAUTHORIZED,
        StatusCode::CONFLICT,
        StatusCode::INTERNAL_SERVER_ERROR,
    ]);

    /// 400 only.
    pub const BAD_REQUEST_ONLY: Self = Self(&[StatusCode::BAD_REQUEST]);

    /// Returns true if the status is documented.
    #[must_use]
    pub fn contains(&self, status: StatusCode) -> bool {
        self.0.contains(&status)
    }
}
