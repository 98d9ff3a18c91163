//! Mapping of transport results onto operation results.

use nosql_apis::{ApiResponse, Documented, TransportResult};
use nosql_core::{ApiError, Error, Result};
use reqwest::StatusCode;
use tracing::debug;

/// Resolve one transport call into the operation's value or error.
///
/// Failure shapes outside `documented` are treated like an unknown response:
/// code `0` and no message.
pub(crate) fn resolve<T>(
    label: &'static str,
    documented: Documented,
    result: TransportResult<ApiResponse<T>>,
) -> Result<T> {
    let response = match result {
        Ok(response) => response,
        Err(err) => {
            debug!(operation = label, error = %err, "NoSQL API call failed in transport");
            return Err(Error::api(label, ApiError::transport(err)));
        }
    };

    let (status, body) = match response {
        ApiResponse::Success(value) => return Ok(value),
        ApiResponse::BadRequest(body) => (StatusCode::BAD_REQUEST, body),
        ApiResponse::Unauthorized(body) => (StatusCode::UNAUTHORIZED, body),
        ApiResponse::NotFound(body) => (StatusCode::NOT_FOUND, body),
        ApiResponse::Conflict(body) => (StatusCode::CONFLICT, body),
        ApiResponse::ServerError(body) => (StatusCode::INTERNAL_SERVER_ERROR, body),
        ApiResponse::Unexpected { status, .. } => {
            debug!(operation = label, status, "unrecognized NoSQL API response");
            return Err(Error::api(label, ApiError::unexpected()));
        }
    };

    if !documented.contains(status) {
        debug!(operation = label, status = status.as_u16(), "undocumented failure shape");
        return Err(Error::api(label, ApiError::unexpected()));
    }

    Err(Error::api(
        label,
        ApiError::remote(status.as_u16(), body.message()),
    ))
}
