use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, post},
    Json, Router,
};
use service::question::{NewQuestion, Question};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{errors::JsonApiError, metrics, openapi, state::QuestionState};

pub const SERVICE: &str = "question";

#[utoipa::path(
    post, path = "/question/create", tag = "question",
    request_body = crate::openapi::NewQuestionDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::QuestionDoc),
        (status = 500, description = "Create Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(State(state): State<QuestionState>, Json(input): Json<NewQuestion>) -> Result<Json<Question>, JsonApiError> {
    let question = state.questions.create(input).await?;
    info!(id = question.id, quiz_id = ?question.quiz_id, "created question");
    Ok(Json(question))
}

#[utoipa::path(
    get, path = "/question/getAll", tag = "question",
    responses((status = 200, description = "List OK", body = [crate::openapi::QuestionDoc]))
)]
pub async fn get_all(State(state): State<QuestionState>) -> Result<Json<Vec<Question>>, JsonApiError> {
    Ok(Json(state.questions.get_all().await?))
}

#[utoipa::path(
    get, path = "/question/get/{question_id}", tag = "question",
    params(("question_id" = i64, Path, description = "Question ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::QuestionDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_one(State(state): State<QuestionState>, Path(question_id): Path<i64>) -> Result<Json<Question>, JsonApiError> {
    Ok(Json(state.questions.get(question_id).await?))
}

#[utoipa::path(
    get, path = "/question/quiz/{quiz_id}", tag = "question",
    params(("quiz_id" = i64, Path, description = "Quiz ID")),
    responses((status = 200, description = "List OK, possibly empty", body = [crate::openapi::QuestionDoc]))
)]
pub async fn get_questions_of_quiz(State(state): State<QuestionState>, Path(quiz_id): Path<i64>) -> Result<Json<Vec<Question>>, JsonApiError> {
    Ok(Json(state.questions.get_questions_of_quiz(quiz_id).await?))
}

pub fn build_router(state: QuestionState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/question/create", post(create))
        .route("/question/getAll", get(get_all))
        .route("/question/get/:question_id", get(get_one))
        .route("/question/quiz/:quiz_id", get(get_questions_of_quiz))
        .route_layer(middleware::from_fn_with_state(SERVICE, metrics::track_requests))
        .with_state(state);
    super::finish(api, get(openapi::question_openapi), cors)
}
