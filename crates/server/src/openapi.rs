use axum::Json;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct QuizDoc { pub id: i64, pub title: String, pub description: Option<String> }

#[derive(ToSchema)]
pub struct NewQuizDoc { pub title: String, pub description: Option<String> }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct QuestionDoc { pub id: i64, pub text: String, pub quiz_id: Option<i64> }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct NewQuestionDoc { pub text: String, pub quiz_id: Option<i64> }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub message: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::quiz::create,
        crate::routes::quiz::get_one,
        crate::routes::quiz::get_all,
    ),
    components(schemas(HealthResponse, QuizDoc, NewQuizDoc, ErrorDoc)),
    tags((name = "health"), (name = "quiz"))
)]
pub struct QuizApiDoc;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::question::create,
        crate::routes::question::get_one,
        crate::routes::question::get_all,
        crate::routes::question::get_questions_of_quiz,
    ),
    components(schemas(HealthResponse, QuestionDoc, NewQuestionDoc, ErrorDoc)),
    tags((name = "health"), (name = "question"))
)]
pub struct QuestionApiDoc;

pub async fn quiz_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(QuizApiDoc::openapi())
}

pub async fn question_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(QuestionApiDoc::openapi())
}
