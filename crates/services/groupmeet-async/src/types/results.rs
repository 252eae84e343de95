use groupmeet_core::types::{Member, null_as_default};
use serde::{Deserialize, Serialize};

/// The student a results response is about
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsStudent {
    /// Submission id, also used as the student id for feedback
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Contact email
    #[serde(default)]
    pub email: Option<String>,
    /// Course code; only present once matched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    /// Study preference; only present once matched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub study_preference: Option<String>,
}

/// A student's group as returned by the results endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentMatch {
    /// Who the results are for
    pub student: ResultsStudent,
    /// Match identifier, needed to leave feedback
    pub match_id: String,
    /// Other members of the group
    #[serde(default, deserialize_with = "null_as_default")]
    pub group_members: Vec<Member>,
    /// Share of availability the members have in common
    #[serde(default)]
    pub availability_overlap: f64,
    /// Agreement of study preferences
    #[serde(default)]
    pub preference_alignment: f64,
    /// Mean pairwise compatibility
    #[serde(default)]
    pub avg_compatibility: f64,
}

impl StudentMatch {
    /// Group members other than the student.
    pub fn others(&self) -> impl Iterator<Item = &Member> {
        self.group_members
            .iter()
            .filter(|m| m.id.as_deref() != Some(self.student.id.as_str()))
    }
}

/// Response from `GET /results/{student_id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultsResponse {
    /// The student has been placed in a group
    Matched(StudentMatch),
    /// No group has formed for the student yet
    Waiting {
        /// Who the results are for
        student: ResultsStudent,
        /// Server explanation, e.g. "No matches found yet"
        message: String,
    },
}

impl ResultsResponse {
    /// The student the response describes.
    #[must_use]
    pub const fn student(&self) -> &ResultsStudent {
        match self {
            Self::Matched(m) => &m.student,
            Self::Waiting { student, .. } => student,
        }
    }

    /// The group, when one has formed.
    #[must_use]
    pub const fn group(&self) -> Option<&StudentMatch> {
        match self {
            Self::Matched(m) => Some(m),
            Self::Waiting { .. } => None,
        }
    }
}
