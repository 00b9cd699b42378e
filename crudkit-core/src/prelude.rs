//! crudkit prelude: import everything you need with a single `use`.
//!
//! ```ignore
//! use crudkit_core::prelude::*;
//! ```

pub use crate::builder::AppBuilder;
pub use crate::config::{ConfigProperties, CrudConfig, ServerConfig};
pub use crate::error::HttpError;
pub use crate::health::{HealthIndicator, HealthStatus};
pub use crate::http::routing::{delete, get, patch, post, put};
pub use crate::http::{IntoResponse, Json, Path, Query, Response, Router, State, StatusCode};
pub use crate::plugin::Plugin;
pub use crate::plugins::{Cors, ErrorHandling, Health, Tracing};
pub use crate::types::{ApiResult, JsonResult};
pub use crate::validation::{JsonBody, Validate, Validated};
