//! Quiz module: domain, repository, service.

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{NewQuiz, Quiz};
pub use service::QuizService;
