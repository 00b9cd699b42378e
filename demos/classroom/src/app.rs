use crudkit::crudkit_data::{crud_routes, DataError, MemoryRepository};
use crudkit::crudkit_data_sqlx::{connect, ensure_schema, SqliteHealth, SqlxRepository};
use crudkit::http::routing::get;
use crudkit::http::Router;
use crudkit::{AppBuilder, Cors, ErrorHandling, Health, Tracing};
use sqlx::{Sqlite, SqlitePool};

use crate::models::{Book, Contact, Product, Student, Task};
use crate::Collection;

pub const WELCOME: &str = "Welcome to the Classroom API. Access data via /api/tasks, /api/books, \
/api/contacts, /api/products, /api/students";

/// Open the database and create any missing table.
pub async fn connect_store(url: &str) -> Result<SqlitePool, DataError> {
    let pool = connect(url).await?;
    ensure_schema(&pool, crate::schema::ALL).await?;
    Ok(pool)
}

/// Every collection mounted under `/api`, plus `/` and `/health`.
pub fn build_app(pool: SqlitePool) -> AppBuilder {
    let products = MemoryRepository::seeded(Product::catalogue());
    let on_stop_pool = pool.clone();

    AppBuilder::new()
        .register_routes(Router::new().route("/", get(|| async { WELCOME })))
        .nest(
            Collection::Tasks.path(),
            crud_routes::<Task, _>(SqlxRepository::<Task, Sqlite>::new(pool.clone())),
        )
        .nest(
            Collection::Books.path(),
            crud_routes::<Book, _>(SqlxRepository::<Book, Sqlite>::new(pool.clone())),
        )
        .nest(
            Collection::Contacts.path(),
            crud_routes::<Contact, _>(SqlxRepository::<Contact, Sqlite>::new(pool.clone())),
        )
        .nest(Collection::Products.path(), crud_routes::<Product, _>(products))
        .nest(
            Collection::Students.path(),
            crud_routes::<Student, _>(SqlxRepository::<Student, Sqlite>::new(pool.clone())),
        )
        .with(Health::new().check(SqliteHealth::new(pool)))
        .with(ErrorHandling)
        .with(Tracing)
        .with(Cors::permissive())
        .on_stop(move || async move {
            on_stop_pool.close().await;
            tracing::info!("database pool closed");
        })
}
