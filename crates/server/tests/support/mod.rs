#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::routes;
use server::state::{QuestionState, QuizState};
use service::question::repository::memory::InMemoryQuestionRepository;
use service::quiz::repository::memory::InMemoryQuizRepository;

fn cors() -> CorsLayer { CorsLayer::very_permissive() }

pub fn quiz_app() -> Router {
    routes::quiz::build_router(QuizState::new(Arc::new(InMemoryQuizRepository::default())), cors())
}

pub fn question_app() -> Router {
    routes::question::build_router(QuestionState::new(Arc::new(InMemoryQuestionRepository::default())), cors())
}

pub async fn get(app: &Router, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
    let req = Request::builder().method("GET").uri(uri).body(Body::empty())?;
    send(app, req).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> anyhow::Result<(StatusCode, Value)> {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body)?))?;
    send(app, req).await
}

async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap_or(Value::Null) };
    Ok((status, value))
}
