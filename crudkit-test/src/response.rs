use bytes::Bytes;
use http::header::{HeaderMap, HeaderName};
use http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::json_path::resolve_path;

/// Response wrapper with status assertions, JSON-path assertions, and body helpers.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    // ── Status assertions ──

    pub fn assert_ok(self) -> Self {
        self.assert_status(StatusCode::OK)
    }

    pub fn assert_created(self) -> Self {
        self.assert_status(StatusCode::CREATED)
    }

    /// Assert status is 204 and the body is empty.
    pub fn assert_no_content(self) -> Self {
        let resp = self.assert_status(StatusCode::NO_CONTENT);
        assert!(resp.body.is_empty(), "Expected empty body, got: {}", resp.text());
        resp
    }

    pub fn assert_bad_request(self) -> Self {
        self.assert_status(StatusCode::BAD_REQUEST)
    }

    pub fn assert_not_found(self) -> Self {
        self.assert_status(StatusCode::NOT_FOUND)
    }

    /// Assert the response has a specific status code.
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status,
            expected,
            "Expected {expected}, got {}\nBody: {}",
            self.status,
            self.text()
        );
        self
    }

    // ── Error body assertions ──

    /// Assert the JSON `message` field equals `expected`.
    pub fn assert_message(self, expected: &str) -> Self {
        self.assert_json_path("message", expected)
    }

    /// Assert the validation `errors` array names `field`.
    pub fn assert_field_error(self, field: &str) -> Self {
        self.assert_json_path_fn("errors", |errors| {
            errors
                .as_array()
                .is_some_and(|errors| errors.iter().any(|e| e["field"] == field))
        })
    }

    // ── JSON-path assertions ──

    /// Assert that a JSON path resolves to the expected value.
    ///
    /// Supports dot-separated fields, array indices, and `len()`/`size()`:
    /// ```ignore
    /// resp.assert_json_path("[0].title", "Dune")
    ///     .assert_json_path("len()", 3)
    ///     .assert_json_path("deleted.id", 1);
    /// ```
    pub fn assert_json_path(self, path: &str, expected: impl Into<Value>) -> Self {
        let root: Value = self.json();
        let actual = resolve_path(&root, path);
        let expected = expected.into();
        assert_eq!(
            actual, expected,
            "JSON path \"{path}\" assertion failed\n  Expected: {expected}\n  Actual:   {actual}\n  Body: {root}",
        );
        self
    }

    /// Assert that a JSON path satisfies a predicate.
    pub fn assert_json_path_fn(self, path: &str, predicate: impl FnOnce(&Value) -> bool) -> Self {
        let root: Value = self.json();
        let actual = resolve_path(&root, path);
        assert!(
            predicate(&actual),
            "JSON path \"{path}\" predicate failed\n  Value: {actual}\n  Body: {root}",
        );
        self
    }

    /// Extract and deserialize a value at a JSON path.
    ///
    /// ```ignore
    /// let id: i64 = resp.json_path("id");
    /// let titles: Vec<String> = resp.json_path_all("title");
    /// ```
    pub fn json_path<T: DeserializeOwned>(&self, path: &str) -> T {
        let root: Value = self.json();
        let value = resolve_path(&root, path);
        serde_json::from_value(value.clone()).unwrap_or_else(|e| {
            panic!("Failed to deserialize JSON path \"{path}\": {e}\n  Value: {value}\n  Body: {root}")
        })
    }

    /// Collect `field` from every element of a top-level JSON array.
    pub fn json_path_all<T: DeserializeOwned>(&self, field: &str) -> Vec<T> {
        let root: Vec<Value> = self.json();
        root.iter()
            .map(|item| {
                let value = resolve_path(item, field);
                serde_json::from_value(value.clone()).unwrap_or_else(|e| {
                    panic!("Failed to deserialize \"{field}\": {e}\n  Value: {value}")
                })
            })
            .collect()
    }

    // ── Header access ──

    /// Get a response header value by name.
    pub fn header(&self, name: impl AsRef<str>) -> Option<&str> {
        let name: HeaderName = name.as_ref().parse().ok()?;
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    // ── Body helpers ──

    /// Deserialize the entire response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|e| panic!("Failed to parse JSON: {e}\nBody: {}", self.text()))
    }

    /// Return the response body as a UTF-8 string.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}
