use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::domain::{NewQuestion, Question};
use super::repository::QuestionRepository;
use crate::errors::ServiceError;

/// Application service for questions.
///
/// `create` does not check that `quiz_id` names an existing quiz; the quiz
/// service owns that data and no call is made to it.
pub struct QuestionService<R: QuestionRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: QuestionRepository + ?Sized> QuestionService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, input), fields(quiz_id = ?input.quiz_id))]
    pub async fn create(&self, input: NewQuestion) -> Result<Question, ServiceError> {
        let question = self.repo.create(input).await?;
        info!(question_id = question.id, "question_created");
        Ok(question)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Question, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("question", id))
    }

    pub async fn get_all(&self) -> Result<Vec<Question>, ServiceError> {
        let all = self.repo.find_all().await?;
        debug!(count = all.len(), "list questions");
        Ok(all)
    }

    /// Questions recorded against `quiz_id`; empty when there are none.
    ///
    /// # Examples
    /// ```
    /// use service::question::{NewQuestion, QuestionService, repository::memory::InMemoryQuestionRepository};
    /// use std::sync::Arc;
    /// let svc = QuestionService::new(Arc::new(InMemoryQuestionRepository::default()));
    /// tokio_test::block_on(svc.create(NewQuestion { text: "2+2?".into(), quiz_id: Some(1) })).unwrap();
    /// assert_eq!(tokio_test::block_on(svc.get_questions_of_quiz(1)).unwrap().len(), 1);
    /// assert!(tokio_test::block_on(svc.get_questions_of_quiz(99)).unwrap().is_empty());
    /// ```
    #[instrument(skip(self))]
    pub async fn get_questions_of_quiz(&self, quiz_id: i64) -> Result<Vec<Question>, ServiceError> {
        let found = self.repo.find_all_by_quiz_id(quiz_id).await?;
        debug!(count = found.len(), "list questions of quiz");
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::repository::memory::InMemoryQuestionRepository;

    fn svc() -> QuestionService<InMemoryQuestionRepository> {
        QuestionService::new(Arc::new(InMemoryQuestionRepository::default()))
    }

    fn q(text: &str, quiz_id: Option<i64>) -> NewQuestion {
        NewQuestion { text: text.into(), quiz_id }
    }

    #[tokio::test]
    async fn create_then_get_round_trip() -> anyhow::Result<()> {
        let svc = svc();
        let created = svc.create(q("2+2?", Some(1))).await?;
        assert_eq!(created, Question { id: 1, text: "2+2?".into(), quiz_id: Some(1) });
        assert_eq!(svc.get(1).await?, created);
        Ok(())
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let err = svc().get(42).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn orphan_quiz_id_is_stored_as_given() -> anyhow::Result<()> {
        let svc = svc();
        let created = svc.create(q("who owns me?", Some(777))).await?;
        assert_eq!(created.quiz_id, Some(777));
        Ok(())
    }

    #[tokio::test]
    async fn questions_of_quiz_is_exact_subset() -> anyhow::Result<()> {
        let svc = svc();
        let a = svc.create(q("a", Some(1))).await?;
        let _b = svc.create(q("b", Some(2))).await?;
        let c = svc.create(q("c", Some(1))).await?;
        let _d = svc.create(q("d", None)).await?;

        assert_eq!(svc.get_questions_of_quiz(1).await?, vec![a, c]);
        assert!(svc.get_questions_of_quiz(99).await?.is_empty());
        assert_eq!(svc.get_all().await?.len(), 4);
        Ok(())
    }
}
