mod common;

use classroom::commands::serve::ServeArgs;
use classroom::{build_app, connect_store, Collection};
use crudkit::http::routing::get;
use crudkit::http::Router;
use crudkit::{CrudConfig, ServerConfig};
use crudkit_test::TestApp;

#[tokio::test]
async fn welcome_health_and_fallback() {
    let app = common::app().await;

    let text = app.get("/").send().await.assert_ok().text();
    assert!(text.starts_with("Welcome to the Classroom API"));

    app.get("/health")
        .send()
        .await
        .assert_ok()
        .assert_json_path("status", "UP");

    app.get("/api/courses")
        .send()
        .await
        .assert_not_found()
        .assert_message("Route not found");
}

#[tokio::test]
async fn every_collection_is_mounted() {
    let app = common::app().await;
    for collection in [
        Collection::Tasks,
        Collection::Books,
        Collection::Contacts,
        Collection::Products,
        Collection::Students,
    ] {
        app.get(collection.path()).send().await.assert_ok();
    }
}

#[tokio::test]
async fn responses_allow_any_origin() {
    let app = common::app().await;
    let resp = app
        .get("/api/tasks")
        .header("origin", "http://localhost:3000")
        .send()
        .await
        .assert_ok();
    assert_eq!(resp.header("access-control-allow-origin"), Some("*"));
}

#[tokio::test]
async fn panics_answer_json_500_with_cors_headers() {
    let pool = connect_store("sqlite::memory:").await.unwrap();
    let app = TestApp::from_builder(build_app(pool).register_routes(Router::new().route(
        "/boom",
        get(|| async {
            panic!("handler exploded");
            #[allow(unreachable_code)]
            ""
        }),
    )));

    let resp = app
        .get("/boom")
        .header("origin", "http://localhost:3000")
        .send()
        .await
        .assert_status(crudkit::http::StatusCode::INTERNAL_SERVER_ERROR)
        .assert_message("Internal server error");
    assert_eq!(resp.header("access-control-allow-origin"), Some("*"));
}

#[test]
fn command_line_overrides_configuration() {
    let config = CrudConfig::from_yaml_str(
        "app:\n  port: 5000\n  database:\n    url: sqlite://classroom.db\n",
        "test",
    )
    .unwrap();

    let defaults = ServeArgs::default().resolve(&config).unwrap();
    assert_eq!(defaults.port, ServerConfig::DEFAULT_PORT);
    assert_eq!(defaults.database_url, "sqlite://classroom.db");

    let args = ServeArgs {
        port: Some(8080),
        database_url: Some("sqlite::memory:".into()),
        profile: "dev".into(),
    };
    let server = args.resolve(&config).unwrap();
    assert_eq!(server.address(), "0.0.0.0:8080");
    assert_eq!(server.database_url, "sqlite::memory:");
}
