//! Question module: domain, repository, service.

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{NewQuestion, Question};
pub use service::QuestionService;
