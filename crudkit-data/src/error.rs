use crudkit_core::HttpError;

/// Errors that can occur in the data layer.
#[derive(Debug)]
pub enum DataError {
    NotFound(String),
    /// A unique column already holds the value being written.
    Conflict(String),
    Database(Box<dyn std::error::Error + Send + Sync>),
    Other(String),
}

impl DataError {
    /// Construct a `Database` variant from any error type.
    ///
    /// Used by backend crates (e.g. `crudkit-data-sqlx`) to wrap
    /// driver-specific errors.
    pub fn database(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        DataError::Database(Box::new(err))
    }

    /// Conflict on `column`, phrased for API clients.
    pub fn duplicate(column: &str) -> Self {
        DataError::Conflict(format!("Duplicate value for field '{column}'"))
    }
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::NotFound(msg) => write!(f, "Not found: {msg}"),
            DataError::Conflict(msg) => write!(f, "Conflict: {msg}"),
            DataError::Database(err) => write!(f, "Database error: {err}"),
            DataError::Other(msg) => write!(f, "Data error: {msg}"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Database(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<crate::query::QueryError> for DataError {
    fn from(err: crate::query::QueryError) -> Self {
        DataError::Other(err.to_string())
    }
}

impl From<DataError> for HttpError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::NotFound(msg) => HttpError::NotFound(msg),
            DataError::Conflict(msg) => HttpError::BadRequest(msg),
            DataError::Database(e) => HttpError::Internal(e.to_string()),
            DataError::Other(msg) => HttpError::Internal(msg),
        }
    }
}
