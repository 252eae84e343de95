use groupmeet_core::types::{GroupRecord, MatchDetail, null_as_default};
use serde::{Deserialize, Serialize};

/// Response from `GET /api/my-groups`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupsResponse {
    /// Groups the current user belongs to, one per matched submission
    #[serde(default, deserialize_with = "null_as_default")]
    pub groups: Vec<GroupRecord>,
    /// Server-side count
    #[serde(default)]
    pub count: usize,
}

/// Response from `GET /api/group/{match_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDetailResponse {
    /// The group with every member, including the current user
    #[serde(rename = "match")]
    pub detail: MatchDetail,
}
