use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use super::domain::{NewQuiz, Quiz};
use crate::errors::ServiceError;

#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn create(&self, input: NewQuiz) -> Result<Quiz, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Quiz>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<Quiz>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmQuizRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl QuizRepository for SeaOrmQuizRepository {
    async fn create(&self, input: NewQuiz) -> Result<Quiz, ServiceError> {
        Ok(models::quiz::create(&self.db, &input.title, input.description.as_deref()).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Quiz>, ServiceError> {
        Ok(models::quiz::find_by_id(&self.db, id).await?)
    }

    async fn find_all(&self) -> Result<Vec<Quiz>, ServiceError> {
        Ok(models::quiz::find_all(&self.db).await?)
    }
}

/// In-process repository, used by tests and `database.url = "memory://"`.
pub mod memory {
    use super::*;
    use dashmap::DashMap;
    use std::sync::atomic::{AtomicI64, Ordering};

    pub struct InMemoryQuizRepository {
        rows: DashMap<i64, Quiz>,
        next_id: AtomicI64,
    }

    impl Default for InMemoryQuizRepository {
        fn default() -> Self {
            Self { rows: DashMap::new(), next_id: AtomicI64::new(1) }
        }
    }

    #[async_trait]
    impl QuizRepository for InMemoryQuizRepository {
        async fn create(&self, input: NewQuiz) -> Result<Quiz, ServiceError> {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let quiz = Quiz { id, title: input.title, description: input.description };
            self.rows.insert(id, quiz.clone());
            Ok(quiz)
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Quiz>, ServiceError> {
            Ok(self.rows.get(&id).map(|r| r.value().clone()))
        }

        async fn find_all(&self) -> Result<Vec<Quiz>, ServiceError> {
            let mut all: Vec<Quiz> = self.rows.iter().map(|r| r.value().clone()).collect();
            all.sort_by_key(|q| q.id);
            Ok(all)
        }
    }
}
