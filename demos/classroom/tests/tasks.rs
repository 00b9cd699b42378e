mod common;

use serde_json::json;

#[tokio::test]
async fn created_task_is_listed_with_defaults() {
    let app = common::app().await;
    let id = app.create("/api/tasks", &json!({"title": "  Grade essays  "})).await;

    app.get("/api/tasks")
        .send()
        .await
        .assert_ok()
        .assert_json_path("len()", 1)
        .assert_json_path("[0].id", id)
        .assert_json_path("[0].title", "Grade essays")
        .assert_json_path("[0].status", "Pending")
        .assert_json_path_fn("[0].createdAt", |v| v.is_string());
}

#[tokio::test]
async fn blank_title_is_rejected_and_nothing_stored() {
    let app = common::app().await;

    app.post("/api/tasks")
        .json(&json!({"title": ""}))
        .send()
        .await
        .assert_bad_request()
        .assert_field_error("title");
    app.post("/api/tasks")
        .json(&json!({"description": "no title"}))
        .send()
        .await
        .assert_bad_request();

    app.get("/api/tasks")
        .send()
        .await
        .assert_json_path("len()", 0);
}

#[tokio::test]
async fn unknown_status_is_rejected() {
    let app = common::app().await;
    app.post("/api/tasks")
        .json(&json!({"title": "Plan", "status": "Someday"}))
        .send()
        .await
        .assert_bad_request();
}

#[tokio::test]
async fn status_update_keeps_other_fields() {
    let app = common::app().await;
    let id = app
        .create(
            "/api/tasks",
            &json!({"title": "Plan lesson", "description": "Week 3"}),
        )
        .await;

    app.put(&format!("/api/tasks/{id}"))
        .json(&json!({"status": "In Progress"}))
        .send()
        .await
        .assert_ok()
        .assert_json_path("status", "In Progress");

    app.get(&format!("/api/tasks/{id}"))
        .send()
        .await
        .assert_ok()
        .assert_json_path("title", "Plan lesson")
        .assert_json_path("description", "Week 3")
        .assert_json_path("status", "In Progress");
}

#[tokio::test]
async fn delete_answers_no_content_then_not_found() {
    let app = common::app().await;
    let id = app.create("/api/tasks", &json!({"title": "Tidy up"})).await;
    let path = format!("/api/tasks/{id}");

    app.delete(&path).send().await.assert_no_content();
    app.delete(&path)
        .send()
        .await
        .assert_not_found()
        .assert_message("Task not found");
    app.get("/api/tasks")
        .send()
        .await
        .assert_json_path("len()", 0);
}

#[tokio::test]
async fn malformed_id_is_a_bad_request() {
    let app = common::app().await;
    app.get("/api/tasks/abc")
        .send()
        .await
        .assert_bad_request()
        .assert_message("Invalid Task ID format");
}

#[tokio::test]
async fn null_description_clears_it_and_absent_keeps_it() {
    let app = common::app().await;
    let id = app
        .create("/api/tasks", &json!({"title": "Mark quizzes", "description": "d"}))
        .await;
    let path = format!("/api/tasks/{id}");

    app.patch(&path)
        .json(&json!({"title": "Mark all quizzes"}))
        .send()
        .await
        .assert_ok()
        .assert_json_path("description", "d");

    app.patch(&path)
        .json(&json!({"description": null}))
        .send()
        .await
        .assert_ok()
        .assert_json_path_fn("description", |v| v.is_null());

    app.get(&path)
        .send()
        .await
        .assert_ok()
        .assert_json_path("title", "Mark all quizzes")
        .assert_json_path_fn("description", |v| v.is_null());
}
