use crate::error::HttpError;
use crate::http::extract::{FromRequest, Request};
use crate::http::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;

// ── Error types ────────────────────────────────────────────

/// A field-level validation error.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Container for validation errors, used as the payload of `HttpError::Validation`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

impl ValidationErrorResponse {
    /// Flatten a `garde` report into one entry per failing field.
    pub fn from_report(report: &garde::Report) -> Self {
        let errors = report
            .iter()
            .map(|(path, error)| {
                let field = path.to_string();
                FieldError {
                    field: if field.is_empty() { "value".to_string() } else { field },
                    message: error.message().to_string(),
                }
            })
            .collect();
        Self { errors }
    }

    /// Whether `field` is among the failing fields.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

/// Run `garde` validation on a value, converting the report into an `HttpError`.
pub fn validate<T>(value: &T) -> Result<(), HttpError>
where
    T: garde::Validate,
    T::Context: Default,
{
    value
        .validate()
        .map_err(|report| HttpError::Validation(ValidationErrorResponse::from_report(&report)))
}

// ── Extractors ─────────────────────────────────────────────

/// JSON body extractor whose rejection is a `400` with a JSON `message`.
///
/// Axum's own `Json` rejects a well-formed body with missing fields as `422`
/// and answers in plain text; handlers here want the uniform error shape.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;
        Ok(JsonBody(value))
    }
}

/// JSON body extractor that also runs `garde` validation.
///
/// ```ignore
/// async fn create(Validated(body): Validated<CreateBook>) -> JsonResult<Book> { ... }
/// ```
pub struct Validated<T>(pub T);

impl<S, T> FromRequest<S> for Validated<T>
where
    T: DeserializeOwned + garde::Validate + Send,
    T::Context: Default,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(value) = JsonBody::<T>::from_request(req, state).await?;
        validate(&value)?;
        Ok(Validated(value))
    }
}

// Re-export garde::Validate for convenience.
pub use garde::Validate;
