use anyhow::Result;
use sea_orm::{DatabaseBackend, MockDatabase};

use crate::{question, quiz};

fn math() -> quiz::Model {
    quiz::Model { id: 1, title: "Math".into(), description: None }
}

fn question_row(id: i64, text: &str, quiz_id: Option<i64>) -> question::Model {
    question::Model { id, text: text.into(), quiz_id }
}

#[tokio::test]
async fn quiz_create_returns_generated_id() -> Result<()> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![math()]])
        .into_connection();

    let created = quiz::create(&db, "Math", None).await?;
    assert_eq!(created, math());
    assert_eq!(db.into_transaction_log().len(), 1);
    Ok(())
}

#[tokio::test]
async fn quiz_find_by_id_miss_is_none() -> Result<()> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<quiz::Model>::new()])
        .into_connection();

    assert!(quiz::find_by_id(&db, 42).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn quiz_find_all_passes_rows_through() -> Result<()> {
    let second = quiz::Model { id: 2, title: "History".into(), description: Some("dates".into()) };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![math(), second.clone()]])
        .into_connection();

    let all = quiz::find_all(&db).await?;
    assert_eq!(all, vec![math(), second]);
    Ok(())
}

#[tokio::test]
async fn question_create_keeps_quiz_id() -> Result<()> {
    let row = question_row(1, "2+2?", Some(1));
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row.clone()]])
        .into_connection();

    let created = question::create(&db, "2+2?", Some(1)).await?;
    assert_eq!(created, row);
    Ok(())
}

#[tokio::test]
async fn question_find_by_quiz_empty_is_ok() -> Result<()> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<question::Model>::new()])
        .into_connection();

    let found = question::find_all_by_quiz_id(&db, 99).await?;
    assert!(found.is_empty());
    Ok(())
}

#[tokio::test]
async fn db_error_maps_to_model_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([sea_orm::DbErr::Custom("boom".into())])
        .into_connection();

    let err = quiz::find_all(&db).await.unwrap_err();
    assert!(matches!(err, crate::errors::ModelError::Db(ref m) if m.contains("boom")));
}

#[test]
fn question_serializes_camel_case() {
    let json = serde_json::to_value(question_row(1, "2+2?", Some(1))).unwrap();
    assert_eq!(json, serde_json::json!({"id": 1, "text": "2+2?", "quizId": 1}));
}
