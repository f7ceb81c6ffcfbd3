use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, post},
    Json, Router,
};
use service::quiz::{NewQuiz, Quiz};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{errors::JsonApiError, metrics, openapi, state::QuizState};

pub const SERVICE: &str = "quiz";

#[utoipa::path(
    post, path = "/quiz/create", tag = "quiz",
    request_body = crate::openapi::NewQuizDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::QuizDoc),
        (status = 500, description = "Create Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(State(state): State<QuizState>, Json(input): Json<NewQuiz>) -> Result<Json<Quiz>, JsonApiError> {
    let quiz = state.quizzes.create(input).await?;
    info!(id = quiz.id, "created quiz");
    Ok(Json(quiz))
}

#[utoipa::path(
    get, path = "/quiz/get/{quiz_id}", tag = "quiz",
    params(("quiz_id" = i64, Path, description = "Quiz ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::QuizDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_one(State(state): State<QuizState>, Path(quiz_id): Path<i64>) -> Result<Json<Quiz>, JsonApiError> {
    Ok(Json(state.quizzes.get(quiz_id).await?))
}

#[utoipa::path(
    get, path = "/quiz/getAll", tag = "quiz",
    responses((status = 200, description = "List OK", body = [crate::openapi::QuizDoc]))
)]
pub async fn get_all(State(state): State<QuizState>) -> Result<Json<Vec<Quiz>>, JsonApiError> {
    Ok(Json(state.quizzes.get_all().await?))
}

/// Quiz service router: `/quiz/*` plus health, metrics and OpenAPI.
pub fn build_router(state: QuizState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/quiz/create", post(create))
        .route("/quiz/get/:quiz_id", get(get_one))
        .route("/quiz/getAll", get(get_all))
        .route_layer(middleware::from_fn_with_state(SERVICE, metrics::track_requests))
        .with_state(state);
    super::finish(api, get(openapi::quiz_openapi), cors)
}
