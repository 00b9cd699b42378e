use std::future::Future;
use std::pin::Pin;

use tracing::info;

use crate::error::error_response;
use crate::http::{Router, StatusCode};
use crate::plugin::Plugin;

type LayerFn = Box<dyn FnOnce(Router) -> Router + Send>;

type ShutdownHook = Box<dyn FnOnce() -> Pin<Box<dyn Future<Output = ()> + Send>> + Send>;

/// Builder for assembling a crudkit application.
///
/// Collects resource routers, plugins and Tower layers, then produces an
/// `axum::Router` (or starts serving directly) with everything wired together.
///
/// ```ignore
/// AppBuilder::new()
///     .nest("/api/books", crud_routes::<Book, _>(books))
///     .with(Cors::permissive())
///     .with(Tracing)
///     .serve("0.0.0.0:5000")
///     .await?;
/// ```
#[derive(Default)]
pub struct AppBuilder {
    routes: Vec<Router>,
    custom_layers: Vec<LayerFn>,
    shutdown_hooks: Vec<ShutdownHook>,
}

impl AppBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a router into the application as-is.
    pub fn register_routes(mut self, router: Router) -> Self {
        self.routes.push(router);
        self
    }

    /// Mount a resource router under a collection path (e.g. `/api/books`).
    pub fn nest(self, path: &str, router: Router) -> Self {
        self.register_routes(Router::new().nest(path, router))
    }

    /// Install a plugin.
    pub fn with<P: Plugin>(self, plugin: P) -> Self {
        info!(plugin = P::name(), "installing plugin");
        plugin.install(self)
    }

    /// Apply an arbitrary transformation to the final router.
    ///
    /// Layers are applied in registration order, so the last one registered
    /// is the outermost.
    pub fn with_layer_fn<F>(mut self, f: F) -> Self
    where
        F: FnOnce(Router) -> Router + Send + 'static,
    {
        self.custom_layers.push(Box::new(f));
        self
    }

    /// Register an async hook that runs after graceful shutdown completes.
    pub fn on_stop<F, Fut>(mut self, hook: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.shutdown_hooks.push(Box::new(move || Box::pin(hook())));
        self
    }

    /// Assemble the final `axum::Router` from all registered routes and layers.
    ///
    /// Unmatched paths answer `404` with a JSON `message`.
    pub fn build(self) -> Router {
        self.build_inner().0
    }

    fn build_inner(self) -> (Router, Vec<ShutdownHook>) {
        let mut app = Router::new();
        for r in self.routes {
            app = app.merge(r);
        }
        app = app.fallback(|| async { error_response(StatusCode::NOT_FOUND, "Route not found") });
        for layer_fn in self.custom_layers {
            app = layer_fn(app);
        }
        (app, self.shutdown_hooks)
    }

    /// Build the application and start serving on the given address.
    pub async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        self.run_with_listener(listener).await
    }

    /// Serve on an already-bound listener until Ctrl-C or SIGTERM, then run
    /// the shutdown hooks.
    pub async fn run_with_listener(
        self,
        listener: tokio::net::TcpListener,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let (app, shutdown_hooks) = self.build_inner();

        let addr = listener.local_addr()?;
        info!(%addr, "server listening");
        crate::http::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        for hook in shutdown_hooks {
            hook().await;
        }

        info!("server stopped");
        Ok(())
    }
}

/// Wait for a shutdown signal (Ctrl-C or SIGTERM on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
