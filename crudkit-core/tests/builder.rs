use axum::http::{Method, Request, StatusCode};
use axum::routing::get;
use axum::Router;
use crudkit_core::{AppBuilder, Cors, ErrorHandling};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn request(method: Method, path: &str) -> Request<axum::body::Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header("origin", "http://localhost:3000")
        .body(axum::body::Body::empty())
        .unwrap()
}

#[tokio::test]
async fn nested_routes_are_reachable() {
    let books = Router::new().route("/", get(|| async { "all books" }));
    let app = AppBuilder::new().nest("/api/books", books).build();

    let resp = app.oneshot(request(Method::GET, "/api/books")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"all books");
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let app = AppBuilder::new().build();
    let resp = app.oneshot(request(Method::GET, "/nope")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["message"], "Route not found");
}

#[tokio::test]
async fn permissive_cors_allows_any_origin() {
    let app = AppBuilder::new()
        .register_routes(Router::new().route("/ping", get(|| async { "pong" })))
        .with(Cors::permissive())
        .build();
    let resp = app.oneshot(request(Method::GET, "/ping")).await.unwrap();
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn panics_become_json_500() {
    let app = AppBuilder::new()
        .register_routes(Router::new().route(
            "/boom",
            get(|| async {
                panic!("handler exploded");
                #[allow(unreachable_code)]
                ""
            }),
        ))
        .with(ErrorHandling)
        .build();
    let resp = app.oneshot(request(Method::GET, "/boom")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["message"], "Internal server error");
}

#[tokio::test]
async fn panic_responses_keep_cors_headers() {
    let app = AppBuilder::new()
        .register_routes(Router::new().route(
            "/boom",
            get(|| async {
                panic!("handler exploded");
                #[allow(unreachable_code)]
                ""
            }),
        ))
        .with(ErrorHandling)
        .with(Cors::permissive())
        .build();
    let resp = app.oneshot(request(Method::GET, "/boom")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}
