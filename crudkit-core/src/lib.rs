//! Core runtime for crudkit: application builder, plugins, the HTTP error
//! taxonomy, validating extractors and layered configuration.

pub mod builder;
pub mod config;
pub mod error;
pub mod health;
pub mod http;
pub mod layers;
pub mod plugin;
pub mod plugins;
pub mod prelude;
pub mod types;
pub mod validation;

pub use builder::AppBuilder;
pub use config::{ConfigError, ConfigProperties, ConfigValue, CrudConfig, FromConfigValue, ServerConfig};
pub use error::{error_response, HttpError};
pub use health::{HealthIndicator, HealthStatus};
pub use layers::{catch_panic_layer, default_cors, default_trace, init_tracing};
pub use plugin::Plugin;
pub use plugins::{Cors, ErrorHandling, Health, Tracing};
pub use validation::{FieldError, JsonBody, Validated, ValidationErrorResponse};
