//! Service layer for the quiz and question services.
//! - Repository traits decouple the services from SeaORM.
//! - Services are thin: lookups that miss become `ServiceError::NotFound`.

pub mod errors;
pub mod quiz;
pub mod question;
