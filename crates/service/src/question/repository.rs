use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use super::domain::{NewQuestion, Question};
use crate::errors::ServiceError;

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn create(&self, input: NewQuestion) -> Result<Question, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<Question>, ServiceError>;
    async fn find_all_by_quiz_id(&self, quiz_id: i64) -> Result<Vec<Question>, ServiceError>;
}

pub struct SeaOrmQuestionRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl QuestionRepository for SeaOrmQuestionRepository {
    async fn create(&self, input: NewQuestion) -> Result<Question, ServiceError> {
        Ok(models::question::create(&self.db, &input.text, input.quiz_id).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, ServiceError> {
        Ok(models::question::find_by_id(&self.db, id).await?)
    }

    async fn find_all(&self) -> Result<Vec<Question>, ServiceError> {
        Ok(models::question::find_all(&self.db).await?)
    }

    async fn find_all_by_quiz_id(&self, quiz_id: i64) -> Result<Vec<Question>, ServiceError> {
        Ok(models::question::find_all_by_quiz_id(&self.db, quiz_id).await?)
    }
}

pub mod memory {
    use super::*;
    use dashmap::DashMap;
    use std::sync::atomic::{AtomicI64, Ordering};

    pub struct InMemoryQuestionRepository {
        rows: DashMap<i64, Question>,
        next_id: AtomicI64,
    }

    impl Default for InMemoryQuestionRepository {
        fn default() -> Self {
            Self { rows: DashMap::new(), next_id: AtomicI64::new(1) }
        }
    }

    impl InMemoryQuestionRepository {
        fn collect_sorted(&self, keep: impl Fn(&Question) -> bool) -> Vec<Question> {
            let mut out: Vec<Question> = self
                .rows
                .iter()
                .filter(|r| keep(r.value()))
                .map(|r| r.value().clone())
                .collect();
            out.sort_by_key(|q| q.id);
            out
        }
    }

    #[async_trait]
    impl QuestionRepository for InMemoryQuestionRepository {
        async fn create(&self, input: NewQuestion) -> Result<Question, ServiceError> {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let question = Question { id, text: input.text, quiz_id: input.quiz_id };
            self.rows.insert(id, question.clone());
            Ok(question)
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Question>, ServiceError> {
            Ok(self.rows.get(&id).map(|r| r.value().clone()))
        }

        async fn find_all(&self) -> Result<Vec<Question>, ServiceError> {
            Ok(self.collect_sorted(|_| true))
        }

        async fn find_all_by_quiz_id(&self, quiz_id: i64) -> Result<Vec<Question>, ServiceError> {
            Ok(self.collect_sorted(|q| q.quiz_id == Some(quiz_id)))
        }
    }
}
