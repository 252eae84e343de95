use groupmeet_core::types::null_as_default;
use serde::{Deserialize, Serialize};

/// Body of `POST /match`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRunRequest {
    /// Restrict matching to one course; all courses when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
}

impl MatchRunRequest {
    /// Matches every course
    #[must_use]
    pub const fn all_courses() -> Self {
        Self { course: None }
    }

    /// Matches a single course
    #[must_use]
    pub fn for_course(course: impl Into<String>) -> Self {
        Self {
            course: Some(course.into()),
        }
    }
}

/// One group created by a matching run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Id of the stored match
    pub match_id: String,
    /// Course code
    #[serde(default, deserialize_with = "null_as_default")]
    pub course: String,
    /// Declared group size
    #[serde(default)]
    pub group_size: u32,
    /// Students placed in the group
    #[serde(default)]
    pub student_count: u32,
}

/// A submission the matcher could not place
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmatchedStudent {
    /// Submission id
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Student name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Student email
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

/// Response from `POST /match`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchRunResponse {
    /// Number of groups created
    #[serde(default)]
    pub matches_created: usize,
    /// Number of submissions left unplaced
    #[serde(default)]
    pub unmatched_count: usize,
    /// Created groups
    #[serde(default, deserialize_with = "null_as_default")]
    pub matches: Vec<MatchSummary>,
    /// Unplaced submissions
    #[serde(default, deserialize_with = "null_as_default")]
    pub unmatched_students: Vec<UnmatchedStudent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_is_omitted_when_unset() {
        let body = serde_json::to_value(MatchRunRequest::all_courses()).unwrap();
        assert_eq!(body, serde_json::json!({}));

        let body = serde_json::to_value(MatchRunRequest::for_course("CIS1200")).unwrap();
        assert_eq!(body, serde_json::json!({"course": "CIS1200"}));
    }

    #[test]
    fn null_lists_parse_as_empty() {
        let resp: MatchRunResponse = serde_json::from_value(serde_json::json!({
            "status": "ok",
            "matches_created": 0,
            "unmatched_count": 0,
            "matches": null,
            "unmatched_students": null
        }))
        .unwrap();
        assert!(resp.matches.is_empty());
        assert!(resp.unmatched_students.is_empty());
    }
}
