//! Re-exports of the Axum surface used by crudkit crates and applications.

pub mod header;

pub mod extract {
    pub use axum::extract::{FromRef, FromRequest, FromRequestParts, Path, Query, Request, State};
}

pub mod response {
    pub use axum::response::{IntoResponse, Response};
}

pub mod routing {
    pub use axum::routing::{delete, get, patch, post, put, MethodRouter};
}

pub use axum::body::Body;
pub use axum::{serve, Json, Router};
pub use self::extract::{Path, Query, Request, State};
pub use self::header::{HeaderMap, Method, StatusCode};
pub use self::response::{IntoResponse, Response};
