#![allow(dead_code)]

use classroom::{build_app, connect_store};
use crudkit_test::TestApp;

/// A fresh app over an empty in-memory database.
pub async fn app() -> TestApp {
    let pool = connect_store("sqlite::memory:")
        .await
        .expect("in-memory database");
    TestApp::from_builder(build_app(pool))
}
