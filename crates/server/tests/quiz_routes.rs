mod support;

use axum::http::StatusCode;
use serde_json::json;

use support::{get, post_json, quiz_app};

#[tokio::test]
async fn create_assigns_id_and_get_returns_it() -> anyhow::Result<()> {
    let app = quiz_app();

    let (status, created) = post_json(&app, "/quiz/create", json!({"title": "Math"})).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created, json!({"id": 1, "title": "Math", "description": null}));

    let (status, found) = get(&app, "/quiz/get/1").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, created);
    Ok(())
}

#[tokio::test]
async fn client_supplied_id_is_ignored() -> anyhow::Result<()> {
    let app = quiz_app();
    let (_, created) = post_json(&app, "/quiz/create", json!({"id": 500, "title": "Geo"})).await?;
    assert_eq!(created["id"], 1);
    Ok(())
}

#[tokio::test]
async fn get_missing_is_404() -> anyhow::Result<()> {
    let app = quiz_app();
    let (status, body) = get(&app, "/quiz/get/42").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
    Ok(())
}

#[tokio::test]
async fn non_numeric_id_is_rejected() -> anyhow::Result<()> {
    let app = quiz_app();
    let (status, _) = get(&app, "/quiz/get/abc").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn get_all_lists_every_quiz() -> anyhow::Result<()> {
    let app = quiz_app();
    let (_, empty) = get(&app, "/quiz/getAll").await?;
    assert_eq!(empty, json!([]));

    for title in ["Math", "History", "Art"] {
        post_json(&app, "/quiz/create", json!({"title": title})).await?;
    }
    let (status, all) = get(&app, "/quiz/getAll").await?;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = all.as_array().unwrap().iter().map(|q| q["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Math", "History", "Art"]);
    Ok(())
}

#[tokio::test]
async fn health_and_openapi_are_served() -> anyhow::Result<()> {
    let app = quiz_app();
    let (status, body) = get(&app, "/health").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, doc) = get(&app, "/api-docs/openapi.json").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"].get("/quiz/getAll").is_some());
    assert!(doc["paths"].get("/question/getAll").is_none());
    Ok(())
}
