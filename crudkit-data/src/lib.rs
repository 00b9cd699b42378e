//! Data access layer for crudkit.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Entity`] | Table name, columns and id of a stored record |
//! | [`Value`] | Column value bound into SQL or compared in memory |
//! | [`Sort`] | Listing order parsed from `?sort=field` / `?sort=-field` |
//! | [`QueryBuilder`] | Checked SELECT / INSERT / UPDATE / DELETE statements for SQLite |
//! | [`Repository`] | Async CRUD trait implemented by every store |
//! | [`MemoryRepository`] | `Repository` over an in-process vector |
//! | [`Resource`] + [`crud_routes`] | REST routes for any entity |

pub mod entity;
pub mod error;
pub mod memory;
pub mod query;
pub mod repository;
pub mod resource;
pub mod router;
pub mod sort;
pub mod value;

pub use entity::Entity;
pub use error::DataError;
pub use memory::MemoryRepository;
pub use query::{QueryBuilder, QueryError};
pub use repository::Repository;
pub use resource::{DeleteReply, Resource};
pub use router::crud_routes;
pub use sort::{Direction, Sort, SortError, SortParams};
pub use value::Value;

pub mod prelude {
    //! Re-exports of the most commonly used data types.
    pub use crate::{
        crud_routes, DataError, DeleteReply, Entity, MemoryRepository, Repository, Resource, Sort,
        Value,
    };
}
