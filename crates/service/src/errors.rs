use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i64) -> Self { Self::NotFound(format!("{} {} not found", entity, id)) }

    pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound(_)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let e = ServiceError::not_found("quiz", 42);
        assert!(e.is_not_found());
        assert_eq!(e.to_string(), "not found: quiz 42 not found");
    }

    #[test]
    fn model_error_converts() {
        let e: ServiceError = models::errors::ModelError::Db("conn reset".into()).into();
        assert!(!e.is_not_found());
        assert!(e.to_string().contains("conn reset"));
    }
}
