use serde::{Deserialize, Serialize};

pub type Question = models::question::Model;

/// Create payload. `quiz_id` is stored as given and never resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuestion {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub quiz_id: Option<i64>,
}
