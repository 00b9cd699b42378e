pub use axum::http::header::{HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, LOCATION, ORIGIN};
pub use axum::http::{HeaderMap, Method, Request as HttpRequest, StatusCode};
