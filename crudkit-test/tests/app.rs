use crudkit_core::http::routing::{get, post};
use crudkit_core::http::{Json, Router, StatusCode};
use crudkit_core::HttpError;
use crudkit_test::{resolve_path, tokenize_path, PathToken, TestApp};
use serde_json::{json, Value};

#[test]
fn test_resolve_simple_field() {
    let v = json!({"title": "Dune"});
    assert_eq!(resolve_path(&v, "title"), json!("Dune"));
}

#[test]
fn test_resolve_nested_field() {
    let v = json!({"deleted": {"isbn": "978-0"}});
    assert_eq!(resolve_path(&v, "deleted.isbn"), json!("978-0"));
}

#[test]
fn test_resolve_top_level_array() {
    let v = json!([{"name": "Laptop"}, {"name": "Mouse"}]);
    assert_eq!(resolve_path(&v, "[1].name"), json!("Mouse"));
    assert_eq!(resolve_path(&v, "len()"), json!(2));
}

#[test]
fn test_resolve_array_nested() {
    let v = json!({"errors": [{"field": "email", "tags": ["a", "b"]}]});
    assert_eq!(resolve_path(&v, "errors[0].field"), json!("email"));
    assert_eq!(resolve_path(&v, "errors[0].tags[1]"), json!("b"));
    assert_eq!(resolve_path(&v, "errors[0].tags.size()"), json!(2));
}

#[test]
fn test_resolve_missing_field() {
    let v = json!({"name": "Alice"});
    assert_eq!(resolve_path(&v, "missing"), Value::Null);
    assert_eq!(resolve_path(&v, "missing[3].deeper"), Value::Null);
}

#[test]
fn test_tokenize() {
    assert_eq!(
        tokenize_path("items[0].tags.len()"),
        vec![
            PathToken::Field("items".into()),
            PathToken::Index(0),
            PathToken::Field("tags".into()),
            PathToken::Len,
        ]
    );
}

fn echo_app() -> TestApp {
    TestApp::new(
        Router::new()
            .route(
                "/echo",
                post(|Json(body): Json<Value>| async move { (StatusCode::CREATED, Json(body)) }),
            )
            .route(
                "/query",
                get(|uri: http::Uri| async move {
                    uri.query().unwrap_or_default().to_string()
                }),
            )
            .route(
                "/missing",
                get(|| async { HttpError::NotFound("Book not found".into()) }),
            ),
    )
}

#[tokio::test]
async fn test_json_round_trip_through_router() {
    let app = echo_app();
    let id = app.create("/echo", &json!({"id": 7, "title": "Dune"})).await;
    assert_eq!(id, 7);
}

#[tokio::test]
async fn test_query_is_encoded() {
    let resp = echo_app()
        .get("/query")
        .query("sort", "-published date")
        .send()
        .await
        .assert_ok();
    assert_eq!(resp.text(), "sort=-published+date");
}

#[tokio::test]
async fn test_message_assertion() {
    echo_app()
        .get("/missing")
        .send()
        .await
        .assert_not_found()
        .assert_message("Book not found");
}
