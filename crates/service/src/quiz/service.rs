use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::domain::{NewQuiz, Quiz};
use super::repository::QuizRepository;
use crate::errors::ServiceError;

/// Application service for quizzes. Pass-through except for NotFound.
pub struct QuizService<R: QuizRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: QuizRepository + ?Sized> QuizService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Persist a quiz and return it with its assigned id.
    ///
    /// # Examples
    /// ```
    /// use service::quiz::{NewQuiz, QuizService, repository::memory::InMemoryQuizRepository};
    /// use std::sync::Arc;
    /// let svc = QuizService::new(Arc::new(InMemoryQuizRepository::default()));
    /// let quiz = tokio_test::block_on(svc.create(NewQuiz { title: "Math".into(), description: None })).unwrap();
    /// assert_eq!(quiz.id, 1);
    /// ```
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create(&self, input: NewQuiz) -> Result<Quiz, ServiceError> {
        let quiz = self.repo.create(input).await?;
        info!(quiz_id = quiz.id, "quiz_created");
        Ok(quiz)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Quiz, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("quiz", id))
    }

    pub async fn get_all(&self) -> Result<Vec<Quiz>, ServiceError> {
        let all = self.repo.find_all().await?;
        debug!(count = all.len(), "list quizzes");
        Ok(all)
    }
}
