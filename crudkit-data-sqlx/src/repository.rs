use sqlx::{Database, Pool};
use std::marker::PhantomData;

/// A generic SQL-based repository implementation.
///
/// Uses the `Entity` trait to construct statements with `QueryBuilder`.
/// Rows are decoded with `sqlx::FromRow`, so the entity's fields must match
/// its `columns()` plus the id column.
///
/// # Example
///
/// ```ignore
/// let repo = SqlxRepository::<Book, Sqlite>::new(pool.clone());
/// let books = repo.find_all(&Sort::asc("title")).await?;
/// ```
pub struct SqlxRepository<T, DB: Database> {
    pool: Pool<DB>,
    _marker: PhantomData<T>,
}

impl<T, DB: Database> SqlxRepository<T, DB> {
    pub fn new(pool: Pool<DB>) -> Self {
        Self {
            pool,
            _marker: PhantomData,
        }
    }

    /// Get the underlying pool reference.
    pub fn pool(&self) -> &Pool<DB> {
        &self.pool
    }
}

impl<T, DB: Database> Clone for SqlxRepository<T, DB> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _marker: PhantomData,
        }
    }
}

#[cfg(feature = "sqlite")]
mod sqlite {
    use crudkit_data::{DataError, Entity, QueryBuilder, Repository, Sort, Value};
    use sqlx::sqlite::SqliteRow;
    use sqlx::{FromRow, Sqlite};

    use super::SqlxRepository;
    use crate::error::SqlxErrorExt;

    /// Bind every `Value` onto a `query`, `query_as` or `query_scalar`.
    macro_rules! bind_values {
        ($query:expr, $values:expr) => {{
            let mut query = $query;
            for value in $values {
                query = match value {
                    Value::Null => query.bind(None::<String>),
                    Value::Bool(v) => query.bind(v),
                    Value::Integer(v) => query.bind(v),
                    Value::Real(v) => query.bind(v),
                    Value::Text(v) => query.bind(v),
                    Value::Timestamp(v) => query.bind(v),
                };
            }
            query
        }};
    }

    fn by_id<T: Entity>(id: i64) -> QueryBuilder {
        QueryBuilder::new(T::table_name()).where_eq(T::id_column(), id)
    }

    impl<T> Repository<T> for SqlxRepository<T, Sqlite>
    where
        T: Entity + for<'r> FromRow<'r, SqliteRow>,
    {
        async fn find_all(&self, sort: &Sort) -> Result<Vec<T>, DataError> {
            let (sql, params) = QueryBuilder::new(T::table_name())
                .sort(sort)
                .build_select(&["*"])?;
            bind_values!(sqlx::query_as::<_, T>(&sql), params)
                .fetch_all(&self.pool)
                .await
                .map_err(SqlxErrorExt::into_data_error)
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<T>, DataError> {
            let (sql, params) = by_id::<T>(id).build_select(&["*"])?;
            bind_values!(sqlx::query_as::<_, T>(&sql), params)
                .fetch_optional(&self.pool)
                .await
                .map_err(SqlxErrorExt::into_data_error)
        }

        async fn insert(&self, mut entity: T) -> Result<T, DataError> {
            let (sql, params) =
                QueryBuilder::new(T::table_name()).build_insert(T::columns(), entity.values())?;
            let result = bind_values!(sqlx::query(&sql), params)
                .execute(&self.pool)
                .await
                .map_err(SqlxErrorExt::into_data_error)?;
            entity.set_id(result.last_insert_rowid());
            tracing::debug!(table = T::table_name(), id = entity.id(), "inserted");
            Ok(entity)
        }

        async fn update(&self, entity: &T) -> Result<bool, DataError> {
            let (sql, params) = by_id::<T>(entity.id()).build_update(T::columns(), entity.values())?;
            let result = bind_values!(sqlx::query(&sql), params)
                .execute(&self.pool)
                .await
                .map_err(SqlxErrorExt::into_data_error)?;
            Ok(result.rows_affected() > 0)
        }

        async fn delete(&self, id: i64) -> Result<Option<T>, DataError> {
            let Some(existing) = self.find_by_id(id).await? else {
                return Ok(None);
            };
            let (sql, params) = by_id::<T>(id).build_delete()?;
            let result = bind_values!(sqlx::query(&sql), params)
                .execute(&self.pool)
                .await
                .map_err(SqlxErrorExt::into_data_error)?;
            Ok((result.rows_affected() > 0).then_some(existing))
        }

        async fn count(&self) -> Result<u64, DataError> {
            let (sql, params) = QueryBuilder::new(T::table_name()).build_count()?;
            let count: i64 = bind_values!(sqlx::query_scalar::<_, i64>(&sql), params)
                .fetch_one(&self.pool)
                .await
                .map_err(SqlxErrorExt::into_data_error)?;
            Ok(count.max(0) as u64)
        }
    }
}
