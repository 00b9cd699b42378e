//! Health endpoints.
//!
//! | Path               | Description                                |
//! |--------------------|--------------------------------------------|
//! | `GET /health`      | Aggregated status, 200 if UP, 503 if DOWN |
//! | `GET /health/live` | Liveness probe, always 200                |
//!
//! ```ignore
//! struct DbHealth { pool: SqlitePool }
//!
//! impl HealthIndicator for DbHealth {
//!     fn name(&self) -> &str { "db" }
//!     async fn check(&self) -> HealthStatus {
//!         match sqlx::query("SELECT 1").execute(&self.pool).await {
//!             Ok(_) => HealthStatus::Up,
//!             Err(e) => HealthStatus::Down(e.to_string()),
//!         }
//!     }
//! }
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Serialize;

use crate::http::response::{IntoResponse, Response};
use crate::http::routing::get;
use crate::http::{Json, Router, StatusCode};

/// Result of a single health check.
#[derive(Debug, Clone, PartialEq)]
pub enum HealthStatus {
    Up,
    Down(String),
}

impl HealthStatus {
    pub fn is_up(&self) -> bool {
        matches!(self, HealthStatus::Up)
    }
}

/// A named health check registered with the [`Health`](crate::plugins::Health) plugin.
pub trait HealthIndicator: Send + Sync + 'static {
    /// The name of this health check (e.g. `"db"`).
    fn name(&self) -> &str;

    fn check(&self) -> impl Future<Output = HealthStatus> + Send;
}

#[doc(hidden)]
pub trait HealthIndicatorErased: Send + Sync + 'static {
    fn name(&self) -> &str;
    fn check(&self) -> Pin<Box<dyn Future<Output = HealthStatus> + Send + '_>>;
}

impl<T: HealthIndicator> HealthIndicatorErased for T {
    fn name(&self) -> &str {
        HealthIndicator::name(self)
    }

    fn check(&self) -> Pin<Box<dyn Future<Output = HealthStatus> + Send + '_>> {
        Box::pin(HealthIndicator::check(self))
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthCheckStatus {
    Up,
    Down,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthCheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Aggregated health response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: HealthCheckStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<HealthCheck>,
}

impl IntoResponse for HealthResponse {
    fn into_response(self) -> Response {
        let status = match self.status {
            HealthCheckStatus::Up => StatusCode::OK,
            HealthCheckStatus::Down => StatusCode::SERVICE_UNAVAILABLE,
        };
        (status, Json(self)).into_response()
    }
}

pub(crate) async fn aggregate(indicators: &[Box<dyn HealthIndicatorErased>]) -> HealthResponse {
    let mut checks = Vec::with_capacity(indicators.len());
    for indicator in indicators {
        let (status, reason) = match indicator.check().await {
            HealthStatus::Up => (HealthCheckStatus::Up, None),
            HealthStatus::Down(reason) => {
                tracing::warn!(check = indicator.name(), %reason, "health check failed");
                (HealthCheckStatus::Down, Some(reason))
            }
        };
        checks.push(HealthCheck {
            name: indicator.name().to_string(),
            status,
            reason,
        });
    }
    let status = if checks.iter().all(|c| c.status == HealthCheckStatus::Up) {
        HealthCheckStatus::Up
    } else {
        HealthCheckStatus::Down
    };
    HealthResponse { status, checks }
}

pub(crate) fn health_routes(indicators: Vec<Box<dyn HealthIndicatorErased>>) -> Router {
    let indicators = Arc::new(indicators);
    Router::new()
        .route(
            "/health",
            get(move || {
                let indicators = indicators.clone();
                async move { aggregate(&indicators).await }
            }),
        )
        .route(
            "/health/live",
            get(|| async {
                HealthResponse {
                    status: HealthCheckStatus::Up,
                    checks: Vec::new(),
                }
            }),
        )
}
