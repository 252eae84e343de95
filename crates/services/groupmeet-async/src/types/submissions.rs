use groupmeet_core::types::{Submission, null_as_default};
use serde::{Deserialize, Serialize};

/// Response from `GET /api/my-submissions` and `GET /submissions`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionsResponse {
    /// Submissions, in server order
    #[serde(default, deserialize_with = "null_as_default")]
    pub submissions: Vec<Submission>,
    /// Server-side count
    #[serde(default)]
    pub count: usize,
}

/// Response from `POST /api/submit`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// Id assigned to the new submission
    pub id: String,
    /// Confirmation text
    #[serde(default)]
    pub message: String,
}
