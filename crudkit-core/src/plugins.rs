//! Built-in plugins for common cross-cutting concerns.
//!
//! Each plugin implements [`Plugin`](crate::plugin::Plugin) and can be
//! installed via [`AppBuilder::with()`](crate::builder::AppBuilder::with).

use crate::builder::AppBuilder;
use crate::health::{health_routes, HealthIndicator, HealthIndicatorErased};
use crate::plugin::Plugin;
use tower_http::cors::CorsLayer;

/// CORS plugin.
///
/// [`Cors::permissive()`] allows any origin, method, and header, which is
/// what browser front-ends served from another port need.
pub struct Cors {
    layer: CorsLayer,
}

impl Cors {
    /// Create a permissive CORS plugin (any origin, method, header).
    pub fn permissive() -> Self {
        Self {
            layer: crate::layers::default_cors(),
        }
    }

    /// Create a CORS plugin with a custom `CorsLayer`.
    pub fn custom(layer: CorsLayer) -> Self {
        Self { layer }
    }
}

impl Plugin for Cors {
    fn install(self, app: AppBuilder) -> AppBuilder {
        app.with_layer_fn(move |router| router.layer(self.layer))
    }
}

/// HTTP request/response tracing plugin.
///
/// Initialises the global `tracing` subscriber (via [`init_tracing()`]) and
/// adds a tower-http `TraceLayer` that logs requests and responses.
///
/// [`init_tracing()`]: crate::init_tracing
pub struct Tracing;

impl Plugin for Tracing {
    fn install(self, app: AppBuilder) -> AppBuilder {
        crate::layers::init_tracing();
        app.with_layer_fn(|router| router.layer(crate::layers::default_trace()))
    }
}

/// Converts handler panics into JSON `500` responses.
///
/// Install it before [`Cors`] so panic responses still carry the CORS headers.
pub struct ErrorHandling;

impl Plugin for ErrorHandling {
    fn install(self, app: AppBuilder) -> AppBuilder {
        app.with_layer_fn(|router| router.layer(crate::layers::catch_panic_layer()))
    }
}

/// Health plugin serving `/health` and `/health/live`.
///
/// ```ignore
/// AppBuilder::new().with(Health::new().check(DbHealth { pool }))
/// ```
#[derive(Default)]
pub struct Health {
    indicators: Vec<Box<dyn HealthIndicatorErased>>,
}

impl Health {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a health indicator.
    pub fn check<H: HealthIndicator>(mut self, indicator: H) -> Self {
        self.indicators.push(Box::new(indicator));
        self
    }
}

impl Plugin for Health {
    fn install(self, app: AppBuilder) -> AppBuilder {
        app.register_routes(health_routes(self.indicators))
    }
}
