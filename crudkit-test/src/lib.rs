//! In-process testing for crudkit applications.
//!
//! ```ignore
//! let app = TestApp::new(crud_routes::<Book, _>(MemoryRepository::new()));
//! app.post("/").json(&json!({"title": "Dune"})).send().await
//!     .assert_bad_request()
//!     .assert_field_error("author");
//! ```

mod app;
mod json_path;
mod response;

pub use app::{TestApp, TestRequest};
pub use json_path::{resolve_path, tokenize_path, PathToken};
pub use response::TestResponse;
