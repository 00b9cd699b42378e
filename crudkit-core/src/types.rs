//! Convenience type aliases for common handler return types.
//!
//! ```ignore
//! use crudkit_core::prelude::*;
//!
//! async fn list(State(repo): State<BookRepo>) -> JsonResult<Vec<Book>> { ... }
//! ```

use crate::error::HttpError;
use crate::http::Json;

/// Result alias for any response type with [`HttpError`].
pub type ApiResult<T> = Result<T, HttpError>;

/// Handler return type `Result<Json<T>, HttpError>`.
pub type JsonResult<T> = Result<Json<T>, HttpError>;

