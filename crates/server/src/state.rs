use std::sync::Arc;

use service::question::{repository::QuestionRepository, QuestionService};
use service::quiz::{repository::QuizRepository, QuizService};

#[derive(Clone)]
pub struct QuizState {
    pub quizzes: Arc<QuizService<dyn QuizRepository>>,
}

impl QuizState {
    pub fn new(repo: Arc<dyn QuizRepository>) -> Self {
        Self { quizzes: Arc::new(QuizService::new(repo)) }
    }
}

#[derive(Clone)]
pub struct QuestionState {
    pub questions: Arc<QuestionService<dyn QuestionRepository>>,
}

impl QuestionState {
    pub fn new(repo: Arc<dyn QuestionRepository>) -> Self {
        Self { questions: Arc::new(QuestionService::new(repo)) }
    }
}
