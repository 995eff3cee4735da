//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while giving every
//! failure raised along the handler chain the same JSON envelope:
//!
//! ```json
//! {"statusCode": 404, "message": "User not found with id:1", "field": "NA"}
//! ```
//!
//! Internal errors are logged here and redacted before they reach the
//! client.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Placeholder used in the `field` slot when an error has no offending input.
pub const NO_FIELD: &str = "NA";

/// Message returned for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred";

/// Uniform error body returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// HTTP status code, repeated in the body.
    #[schema(example = 404)]
    pub status_code: u16,
    /// Human-readable description.
    #[schema(example = "User not found with id:1")]
    pub message: String,
    /// Offending input field, or `NA`.
    #[schema(example = "NA")]
    pub field: String,
}

impl ErrorResponse {
    /// Render `error` for the wire, redacting internal failures.
    pub fn from_error(error: &Error) -> Self {
        let status_code = status_for(error.code()).as_u16();
        match error.code() {
            ErrorCode::InternalError => Self {
                status_code,
                message: INTERNAL_ERROR_MESSAGE.to_owned(),
                field: NO_FIELD.to_owned(),
            },
            _ => Self {
                status_code,
                message: error.message().to_owned(),
                field: error.field().unwrap_or(NO_FIELD).to_owned(),
            },
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if self.code() == ErrorCode::InternalError {
            error!(detail = %self.message(), "internal error redacted from response");
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse::from_error(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(format!("request could not be processed: {err}"))
    }
}
