//! Shared pieces used by both the quiz and the question service.

pub mod types;
pub mod utils;
