//! Data model shared by the reconciliation engine, the presentation layer, and the API client.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::selection::AvailabilitySelection;

/// A student's raw preference/availability record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// Opaque unique identifier
    pub id: String,
    /// Course code, upper-cased by the form layer
    #[serde(default, deserialize_with = "null_as_default")]
    pub course: String,
    /// Availability slots as submitted
    #[serde(default, deserialize_with = "null_as_default")]
    pub availability: Vec<String>,
    /// Study preference, e.g. `"PSets"`
    #[serde(default)]
    pub study_preference: Option<String>,
    /// Location preference, e.g. `"In-person"`
    #[serde(default)]
    pub location_preference: Option<String>,
    /// When the server stored the submission
    #[serde(
        default,
        deserialize_with = "timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    /// Student display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Student email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Campus login of the submitting student
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pennkey: Option<String>,
    /// Whether the student confirmed they will attend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commitment_confirmed: Option<bool>,
}

impl Submission {
    /// Minimal submission with an id and a course.
    #[must_use]
    pub fn new(id: impl Into<String>, course: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            course: course.into(),
            ..Self::default()
        }
    }
}

/// Snapshot of a group member embedded in a group record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Submission id of the member, when the server includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Contact email
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    /// Study preference
    #[serde(default)]
    pub study_preference: Option<String>,
    /// Location preference
    #[serde(default)]
    pub location_preference: Option<String>,
}

/// A formed study group as seen from one member's submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupRecord {
    /// Match identifier
    #[serde(default, deserialize_with = "null_as_default")]
    pub match_id: String,
    /// Course the group studies
    #[serde(default, deserialize_with = "null_as_default")]
    pub course: String,
    /// Number of students in the group
    #[serde(default)]
    pub group_size: u32,
    /// Submission that produced this member's view of the group.
    ///
    /// Absent on admin-shaped records.
    #[serde(default)]
    pub submission_id: Option<String>,
    /// Share of availability the members have in common, in `[0, 1]`
    #[serde(default)]
    pub availability_overlap: f64,
    /// Agreement of study preferences, in `[0, 1]`
    #[serde(default)]
    pub preference_alignment: f64,
    /// Mean pairwise compatibility, in `[0, 1]`
    #[serde(default)]
    pub avg_compatibility: f64,
    /// Other members of the group
    #[serde(default, deserialize_with = "null_as_default")]
    pub group_members: Vec<Member>,
}

/// Full detail of one match, as returned by the group detail endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchDetail {
    /// Match identifier
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Course the group studies
    #[serde(default, deserialize_with = "null_as_default")]
    pub course: String,
    /// Number of students in the group
    #[serde(default)]
    pub group_size: u32,
    /// Share of availability the members have in common
    #[serde(default)]
    pub availability_overlap: f64,
    /// Agreement of study preferences
    #[serde(default)]
    pub preference_alignment: f64,
    /// Mean pairwise compatibility
    #[serde(default)]
    pub avg_compatibility: f64,
    /// Every member of the group
    #[serde(default, deserialize_with = "null_as_default")]
    pub group_members: Vec<Member>,
}

/// Study style a student asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudyPreference {
    /// Work through problem sets together
    #[serde(rename = "PSets")]
    PSets,
    /// Review lecture concepts
    #[serde(rename = "Concept Review")]
    ConceptReview,
    /// Open discussion
    #[serde(rename = "Discussion")]
    Discussion,
    /// Prepare for exams
    #[serde(rename = "Exam Prep")]
    ExamPrep,
    /// A bit of everything
    #[serde(rename = "Mixed")]
    Mixed,
}

impl StudyPreference {
    /// Every accepted value.
    pub const ALL: [Self; 5] = [
        Self::PSets,
        Self::ConceptReview,
        Self::Discussion,
        Self::ExamPrep,
        Self::Mixed,
    ];

    /// Value as sent to the server.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PSets => "PSets",
            Self::ConceptReview => "Concept Review",
            Self::Discussion => "Discussion",
            Self::ExamPrep => "Exam Prep",
            Self::Mixed => "Mixed",
        }
    }
}

/// Where a student wants to meet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationPreference {
    /// Meet on campus
    #[serde(rename = "In-person")]
    InPerson,
    /// Meet online
    #[serde(rename = "Virtual")]
    Virtual,
    /// No preference
    #[default]
    #[serde(rename = "Either")]
    Either,
}

impl LocationPreference {
    /// Every accepted value.
    pub const ALL: [Self; 3] = [Self::InPerson, Self::Virtual, Self::Either];

    /// Value as sent to the server.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InPerson => "In-person",
            Self::Virtual => "Virtual",
            Self::Either => "Either",
        }
    }
}

macro_rules! str_enum_impls {
    ($ty:ty, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .into_iter()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| {
                        let accepted: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
                        format!(
                            "invalid {}: {s}. Must be one of: {}",
                            $what,
                            accepted.join(", ")
                        )
                    })
            }
        }
    };
}

str_enum_impls!(StudyPreference, "study preference");
str_enum_impls!(LocationPreference, "location preference");

/// Body of a join-group submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSubmission {
    /// Course code
    pub course: String,
    /// Availability in display form
    pub availability: Vec<String>,
    /// Requested study style
    pub study_preference: StudyPreference,
    /// Requested meeting location
    pub location_preference: LocationPreference,
    /// The student agreed to attend
    pub commitment_confirmed: bool,
}

impl NewSubmission {
    /// Builds a submission from form input.
    ///
    /// The course is trimmed and upper-cased here; the reconciliation engine
    /// never normalizes course keys itself.
    #[must_use]
    pub fn from_form(
        course: &str,
        selection: &AvailabilitySelection,
        study_preference: StudyPreference,
        location_preference: LocationPreference,
        commitment_confirmed: bool,
    ) -> Self {
        Self {
            course: crate::validation::normalize_course(course),
            availability: selection.export_display_form(),
            study_preference,
            location_preference,
            commitment_confirmed,
        }
    }
}

/// Feedback a member leaves about their group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    /// Match being rated
    pub match_id: String,
    /// Submission id of the rating student
    pub student_id: String,
    /// Rating from 1 to 5
    pub rating: u8,
    /// Free-form comments
    #[serde(default)]
    pub comments: String,
}

impl FeedbackRequest {
    /// Feedback with no comments.
    #[must_use]
    pub fn new(match_id: impl Into<String>, student_id: impl Into<String>, rating: u8) -> Self {
        Self {
            match_id: match_id.into(),
            student_id: student_id.into(),
            rating,
            comments: String::new(),
        }
    }

    /// Attaches comments.
    #[must_use]
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = comments.into();
        self
    }
}

/// Deserializes `null` as the type's default.
///
/// # Errors
///
/// Propagates errors for values that are neither `null` nor a valid `T`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    /// Accepts RFC 3339 and RFC 2822 (`"Mon, 01 Jan 2024 12:00:00 GMT"`).
    ///
    /// Anything else becomes `None` rather than failing the whole record.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.and_then(|s| parse(&s)))
    }

    pub(super) fn parse(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        DateTime::parse_from_rfc3339(raw)
            .or_else(|_| DateTime::parse_from_rfc2822(raw))
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    #[test]
    fn submission_tolerates_sparse_and_null_fields() {
        let sub: Submission = serde_json::from_value(json!({
            "id": "s1",
            "course": null,
            "availability": null
        }))
        .unwrap();
        assert_eq!(sub.id, "s1");
        assert!(sub.course.is_empty());
        assert!(sub.availability.is_empty());
        assert!(sub.created_at.is_none());
    }

    #[test]
    fn submission_parses_server_timestamps() {
        let rfc2822: Submission = serde_json::from_value(json!({
            "id": "s1",
            "course": "CIS1200",
            "created_at": "Mon, 01 Jan 2024 12:30:00 GMT"
        }))
        .unwrap();
        let ts = rfc2822.created_at.unwrap();
        assert_eq!((ts.year(), ts.month(), ts.hour(), ts.minute()), (2024, 1, 12, 30));

        let rfc3339: Submission = serde_json::from_value(json!({
            "id": "s2",
            "created_at": "2024-01-01T12:30:00Z"
        }))
        .unwrap();
        assert_eq!(rfc3339.created_at, Some(ts));

        let garbage: Submission = serde_json::from_value(json!({
            "id": "s3",
            "created_at": "yesterday"
        }))
        .unwrap();
        assert!(garbage.created_at.is_none());
    }

    #[test]
    fn submission_keeps_commitment_flag() {
        let stored = json!({
            "id": "s1",
            "course": "CIS1200",
            "availability": ["Monday 8am-10am"],
            "commitment_confirmed": true
        });
        let sub: Submission = serde_json::from_value(stored).unwrap();
        assert_eq!(sub.commitment_confirmed, Some(true));
        assert_eq!(serde_json::to_value(&sub).unwrap()["commitment_confirmed"], json!(true));

        let legacy: Submission = serde_json::from_value(json!({"id": "s2"})).unwrap();
        assert!(legacy.commitment_confirmed.is_none());
        assert!(serde_json::to_value(&legacy).unwrap().get("commitment_confirmed").is_none());
    }

    #[test]
    fn group_record_without_submission_id() {
        let group: GroupRecord = serde_json::from_value(json!({
            "match_id": "m1",
            "course": "CIS1200",
            "group_size": 3,
            "availability_overlap": 0.5,
            "group_members": [{"name": "Ada", "email": "ada@upenn.edu"}]
        }))
        .unwrap();
        assert!(group.submission_id.is_none());
        assert_eq!(group.group_members.len(), 1);
        assert!(group.group_members[0].location_preference.is_none());
    }

    #[test]
    fn preferences_serialize_to_server_strings() {
        assert_eq!(
            serde_json::to_value(StudyPreference::ConceptReview).unwrap(),
            json!("Concept Review")
        );
        assert_eq!(
            serde_json::to_value(LocationPreference::InPerson).unwrap(),
            json!("In-person")
        );
    }

    #[test]
    fn preferences_parse_case_insensitively() {
        assert_eq!("exam prep".parse(), Ok(StudyPreference::ExamPrep));
        assert_eq!("VIRTUAL".parse(), Ok(LocationPreference::Virtual));
        let err = "Library".parse::<LocationPreference>().unwrap_err();
        assert!(err.contains("In-person, Virtual, Either"));
    }

    #[test]
    fn new_submission_from_form_normalizes_course() {
        let mut selection = AvailabilitySelection::new();
        selection.toggle("Tuesday-2pm-4pm");
        let sub = NewSubmission::from_form(
            "  cis1200 ",
            &selection,
            StudyPreference::PSets,
            LocationPreference::default(),
            true,
        );
        assert_eq!(sub.course, "CIS1200");
        assert_eq!(sub.availability, vec!["Tuesday 2pm-4pm"]);

        let body = serde_json::to_value(&sub).unwrap();
        assert_eq!(body["location_preference"], "Either");
        assert_eq!(body["study_preference"], "PSets");
    }

    #[test]
    fn timestamp_parse_rejects_empty() {
        assert!(timestamp::parse("").is_none());
    }
}
