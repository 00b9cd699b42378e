//! # crudkit-data-sqlx: SQLx backend for the crudkit data layer
//!
//! This crate provides the [SQLx](https://github.com/launchbadge/sqlx)-specific
//! implementations for crudkit's data access layer. It depends on
//! [`crudkit-data`] for the abstract traits and types, and adds the repository,
//! pool setup and error bridging needed to talk to a real database.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`SqlxRepository`] | `Repository` over an `sqlx::Pool<DB>` |
//! | [`connect`] / [`ensure_schema`] | SQLite pool creation and table bootstrap |
//! | [`SqliteHealth`] | `db` health indicator for the `Health` plugin |
//! | [`SqlxErrorExt`] | Converts `sqlx::Error` → `DataError` (unique violations become `Conflict`) |
//!
//! ```ignore
//! let pool = crudkit_data_sqlx::connect("sqlite::memory:").await?;
//! ensure_schema(&pool, &["CREATE TABLE IF NOT EXISTS books (...)"]).await?;
//! let books = SqlxRepository::<Book, Sqlite>::new(pool.clone());
//! AppBuilder::new().nest("/api/books", crud_routes::<Book, _>(books));
//! ```

pub mod error;
#[cfg(feature = "sqlite")]
pub mod health;
#[cfg(feature = "sqlite")]
pub mod pool;
pub mod repository;

pub use error::SqlxErrorExt;
#[cfg(feature = "sqlite")]
pub use health::SqliteHealth;
#[cfg(feature = "sqlite")]
pub use pool::{connect, ensure_schema};
pub use repository::SqlxRepository;

/// Re-exports of the most commonly used types from both `crudkit-data` and this crate.
pub mod prelude {
    pub use crate::{SqlxErrorExt, SqlxRepository};
    pub use crudkit_data::prelude::*;
}
