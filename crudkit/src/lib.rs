//! crudkit: REST resources over Axum.
//!
//! This facade crate re-exports all crudkit sub-crates through a single
//! dependency with feature flags. Import everything you need with:
//!
//! ```ignore
//! use crudkit::prelude::*;
//! ```
//!
//! # Feature flags
//!
//! | Feature  | Default | Crate                          |
//! |----------|---------|--------------------------------|
//! | `data`   | **yes** | `crudkit-data` (abstractions)  |
//! | `sqlite` | no      | `crudkit-data-sqlx` (SQLite)   |
//! | `client` | no      | `crudkit-client`               |
//! | `full`   | no      | All of the above               |

// Re-export everything from crudkit-core at the top level for convenience.
pub use crudkit_core::*;

#[cfg(feature = "data")]
pub use crudkit_data;

#[cfg(feature = "sqlite")]
pub use crudkit_data_sqlx;

#[cfg(feature = "client")]
pub use crudkit_client;

/// Unified prelude. Import everything with `use crudkit::prelude::*`.
///
/// Includes the core prelude plus types from all enabled feature crates.
pub mod prelude {
    pub use crudkit_core::prelude::*;

    #[cfg(feature = "data")]
    pub use crudkit_data::prelude::*;

    #[cfg(feature = "sqlite")]
    pub use crudkit_data_sqlx::{connect, ensure_schema, SqliteHealth, SqlxRepository};

    #[cfg(feature = "client")]
    pub use crudkit_client::{ClientError, FormDraft, ResourceClient, ResourceView, RetryPolicy};
}
