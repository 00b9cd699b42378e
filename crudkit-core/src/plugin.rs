//! Plugin system.
//!
//! Plugins are composable units of functionality installed into an
//! [`AppBuilder`] with `.with(plugin)`. They can add layers, register routes
//! or register shutdown hooks.

use crate::builder::AppBuilder;

/// A composable unit of functionality that can be installed into an [`AppBuilder`].
///
/// ```ignore
/// pub struct Version;
///
/// impl Plugin for Version {
///     fn install(self, app: AppBuilder) -> AppBuilder {
///         app.register_routes(Router::new().route("/version", get(|| async { "0.1.0" })))
///     }
/// }
/// ```
pub trait Plugin: Send + 'static {
    /// Install this plugin into the given `AppBuilder`, returning the modified builder.
    fn install(self, app: AppBuilder) -> AppBuilder;

    /// The name of this plugin (for diagnostics).
    fn name() -> &'static str
    where
        Self: Sized,
    {
        std::any::type_name::<Self>()
    }
}
