use serde::{Deserialize, Serialize};

/// Response from `POST /feedback`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackResponse {
    /// `"ok"` on success
    #[serde(default)]
    pub status: String,
    /// Confirmation text
    #[serde(default)]
    pub message: String,
}
