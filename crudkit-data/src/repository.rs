use crate::entity::Entity;
use crate::error::DataError;
use crate::sort::Sort;
use std::future::Future;

/// Generic async repository trait for CRUD operations over one entity type.
///
/// Uses RPITIT (return-position `impl Trait` in traits), no `async-trait`.
/// Implementations are cheap handles (`Clone`) so they can serve as router state.
pub trait Repository<T: Entity>: Clone + Send + Sync + 'static {
    fn find_all(&self, sort: &Sort) -> impl Future<Output = Result<Vec<T>, DataError>> + Send;

    fn find_by_id(&self, id: i64) -> impl Future<Output = Result<Option<T>, DataError>> + Send;

    /// Persist a new entity, returning it with its assigned id.
    fn insert(&self, entity: T) -> impl Future<Output = Result<T, DataError>> + Send;

    /// Overwrite the stored entity with the same id. `false` if none exists.
    fn update(&self, entity: &T) -> impl Future<Output = Result<bool, DataError>> + Send;

    /// Remove the entity, returning what was removed.
    fn delete(&self, id: i64) -> impl Future<Output = Result<Option<T>, DataError>> + Send;

    fn count(&self) -> impl Future<Output = Result<u64, DataError>> + Send;
}
