use serde::{Deserialize, Serialize};

/// Stored quiz as returned to clients.
pub type Quiz = models::quiz::Model;

/// Create payload. Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuiz {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}
