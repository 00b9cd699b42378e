//! Generic REST routes for a [`Resource`].
//!
//! | Method          | Path    | Success                        | Failure               |
//! |-----------------|---------|--------------------------------|-----------------------|
//! | `GET`           | `/`     | 200, all records               | 400 unknown `sort`    |
//! | `POST`          | `/`     | 201, created record            | 400 invalid/duplicate |
//! | `GET`           | `/{id}` | 200, record                    | 400 bad id, 404       |
//! | `PUT` / `PATCH` | `/{id}` | 200, updated record            | 400, 404              |
//! | `DELETE`        | `/{id}` | 200 message + record, or 204   | 400 bad id, 404       |

use chrono::Utc;
use crudkit_core::http::extract::{Path, Query, State};
use crudkit_core::http::response::{IntoResponse, Response};
use crudkit_core::http::routing::get;
use crudkit_core::http::{Json, Router, StatusCode};
use crudkit_core::types::{ApiResult, JsonResult};
use crudkit_core::validation::validate;
use crudkit_core::{HttpError, JsonBody, Validated};
use tracing::info;

use crate::entity::Entity;
use crate::repository::Repository;
use crate::resource::{DeleteReply, Resource};
use crate::sort::{Sort, SortParams};

/// Build the router for one resource, ready to be nested under its
/// collection path.
///
/// ```ignore
/// AppBuilder::new()
///     .nest("/api/books", crud_routes::<Book, _>(SqlxRepository::new(pool)))
/// ```
pub fn crud_routes<T, R>(repo: R) -> Router
where
    T: Resource,
    R: Repository<T>,
{
    Router::new()
        .route("/", get(list::<T, R>).post(create::<T, R>))
        .route(
            "/{id}",
            get(find::<T, R>)
                .put(update::<T, R>)
                .patch(update::<T, R>)
                .delete(remove::<T, R>),
        )
        .with_state(repo)
}

fn parse_id<T: Resource>(raw: &str) -> ApiResult<i64> {
    raw.trim()
        .parse()
        .map_err(|_| HttpError::BadRequest(format!("Invalid {} ID format", T::NAME)))
}

fn not_found<T: Resource>() -> HttpError {
    HttpError::NotFound(format!("{} not found", T::NAME))
}

async fn list<T, R>(
    State(repo): State<R>,
    Query(params): Query<SortParams>,
) -> JsonResult<Vec<T>>
where
    T: Resource,
    R: Repository<T>,
{
    let sort = match params.sort.as_deref() {
        Some(raw) => Sort::parse::<T>(raw)?,
        None => T::default_sort(),
    };
    Ok(Json(repo.find_all(&sort).await?))
}

async fn find<T, R>(State(repo): State<R>, Path(id): Path<String>) -> JsonResult<T>
where
    T: Resource,
    R: Repository<T>,
{
    let id = parse_id::<T>(&id)?;
    let entity = repo.find_by_id(id).await?.ok_or_else(not_found::<T>)?;
    Ok(Json(entity))
}

async fn create<T, R>(
    State(repo): State<R>,
    Validated(input): Validated<T::Create>,
) -> ApiResult<(StatusCode, Json<T>)>
where
    T: Resource,
    R: Repository<T>,
{
    let entity = T::from_create(input, Utc::now());
    validate(&entity)?;
    let created = repo.insert(entity).await?;
    info!(resource = T::NAME, id = created.id(), "created");
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update<T, R>(
    State(repo): State<R>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<T::Patch>,
) -> JsonResult<T>
where
    T: Resource,
    R: Repository<T>,
{
    let id = parse_id::<T>(&id)?;
    let mut entity = repo.find_by_id(id).await?.ok_or_else(not_found::<T>)?;
    entity.apply(patch, Utc::now());
    validate(&entity)?;
    if !repo.update(&entity).await? {
        return Err(not_found::<T>());
    }
    info!(resource = T::NAME, id, "updated");
    Ok(Json(entity))
}

async fn remove<T, R>(State(repo): State<R>, Path(id): Path<String>) -> ApiResult<Response>
where
    T: Resource,
    R: Repository<T>,
{
    let id = parse_id::<T>(&id)?;
    let deleted = repo.delete(id).await?.ok_or_else(not_found::<T>)?;
    info!(resource = T::NAME, id, "deleted");
    Ok(match T::delete_reply() {
        DeleteReply::NoContent => StatusCode::NO_CONTENT.into_response(),
        DeleteReply::Message => Json(serde_json::json!({
            "message": format!("{} successfully deleted", T::NAME),
            "deleted": deleted,
        }))
        .into_response(),
    })
}
