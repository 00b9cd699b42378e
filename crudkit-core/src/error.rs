use crate::http::response::{IntoResponse, Response};
use crate::http::{Json, StatusCode};
use crate::validation::ValidationErrorResponse;

/// Helper to create a JSON error response with a standard `{ "message": ... }` body.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = serde_json::json!({ "message": message.into() });
    (status, Json(body)).into_response()
}

/// Errors a route handler can return.
///
/// Every variant renders as a JSON body carrying a `message` field, so
/// clients can surface the failure inline without inspecting the status.
pub enum HttpError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
    Validation(ValidationErrorResponse),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::BadRequest(_) | HttpError::Validation(_) => StatusCode::BAD_REQUEST,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            HttpError::Validation(resp) => {
                let body = serde_json::json!({
                    "message": "Validation failed",
                    "errors": resp.errors,
                });
                (status, Json(body)).into_response()
            }
            HttpError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                error_response(status, msg)
            }
            HttpError::NotFound(msg) | HttpError::BadRequest(msg) => error_response(status, msg),
        }
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            HttpError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            HttpError::Internal(msg) => write!(f, "Internal Error: {msg}"),
            HttpError::Validation(resp) => {
                write!(f, "Validation Error: {} errors", resp.errors.len())
            }
        }
    }
}

impl std::fmt::Debug for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as std::fmt::Display>::fmt(self, f)
    }
}

impl std::error::Error for HttpError {}

impl From<std::io::Error> for HttpError {
    fn from(err: std::io::Error) -> Self {
        HttpError::Internal(err.to_string())
    }
}

impl From<ValidationErrorResponse> for HttpError {
    fn from(resp: ValidationErrorResponse) -> Self {
        HttpError::Validation(resp)
    }
}
