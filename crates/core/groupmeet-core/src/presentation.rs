//! Display-ready structures for the dashboard.
//!
//! These are pure mappings from [`Reconciliation`], [`GroupRecord`], and
//! [`MatchDetail`]. Nothing here changes the data it reads; the only logic is
//! rounding, pluralization, and fallback labels.

use serde::Serialize;

use crate::reconcile::{CourseProgress, Reconciliation};
use crate::types::{GroupRecord, MatchDetail, Member, Submission};

/// Shown for a pending course without a study preference.
pub const UNSPECIFIED_PREFERENCE: &str = "Not specified";
/// Title of a pending card whose course is blank.
pub const UNKNOWN_COURSE: &str = "Unknown";
/// Shown when no location preference was given.
pub const ANY_LOCATION: &str = "Either";
/// Status line once a course has reached the threshold.
pub const READY_STATUS: &str = "Ready to match! Group will be formed soon.";

/// Ratio in `[0, 1]` as a rounded whole percentage.
#[must_use]
pub fn percent(ratio: f64) -> i64 {
    (ratio * 100.0).round() as i64
}

/// `singular` when `count == 1`, otherwise `plural`.
#[must_use]
pub const fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// First eight characters of an id followed by `...`, or `N/A`.
#[must_use]
pub fn short_id(id: &str) -> String {
    if id.is_empty() {
        return "N/A".to_string();
    }
    let head: String = id.chars().take(8).collect();
    format!("{head}...")
}

/// The three compatibility figures shown on cards and in the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchStats {
    /// Availability overlap, percent
    pub availability_pct: i64,
    /// Preference alignment, percent
    pub preference_pct: i64,
    /// Overall compatibility, percent
    pub overall_pct: i64,
}

impl MatchStats {
    /// Rounds the three ratios to percentages.
    #[must_use]
    pub fn from_ratios(availability: f64, preference: f64, overall: f64) -> Self {
        Self {
            availability_pct: percent(availability),
            preference_pct: percent(preference),
            overall_pct: percent(overall),
        }
    }
}

/// A matched group on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCard {
    /// Match to open when the card is selected
    pub match_id: String,
    /// Course code
    pub title: String,
    /// `"{n} members"`
    pub badge: String,
    /// Compatibility figures
    pub stats: MatchStats,
}

impl From<&GroupRecord> for GroupCard {
    fn from(group: &GroupRecord) -> Self {
        Self {
            match_id: group.match_id.clone(),
            title: group.course.clone(),
            badge: format!("{} members", group.group_size),
            stats: MatchStats::from_ratios(
                group.availability_overlap,
                group.preference_alignment,
                group.avg_compatibility,
            ),
        }
    }
}

/// A course still waiting for enough students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingCard {
    /// Course code, or [`UNKNOWN_COURSE`] when blank
    pub course: String,
    /// `"{n} / {threshold} students"`
    pub badge: String,
    /// Unclamped progress from the engine
    pub progress_pct: usize,
    /// Progress bar width, clamped to 100
    pub bar_pct: usize,
    /// `"Waiting for ..."` or [`READY_STATUS`]
    pub status: String,
    /// Study preference of the first pending submission
    pub study_preference: String,
    /// Location preference of the first pending submission
    pub location_preference: String,
}

impl PendingCard {
    /// Card for one course of a reconciliation.
    #[must_use]
    pub fn from_course(
        course: &str,
        submissions: &[Submission],
        progress: &CourseProgress,
        threshold: usize,
    ) -> Self {
        let first = submissions.first();
        Self {
            course: non_empty(Some(course)).unwrap_or(UNKNOWN_COURSE).to_string(),
            badge: format!("{} / {threshold} students", progress.count),
            progress_pct: progress.progress_pct,
            bar_pct: progress.progress_pct.min(100),
            status: waiting_status(progress.needed_more),
            study_preference: first
                .and_then(|s| non_empty(s.study_preference.as_deref()))
                .unwrap_or(UNSPECIFIED_PREFERENCE)
                .to_string(),
            location_preference: first
                .and_then(|s| non_empty(s.location_preference.as_deref()))
                .unwrap_or(ANY_LOCATION)
                .to_string(),
        }
    }
}

/// Status line for a course missing `needed_more` students.
#[must_use]
pub fn waiting_status(needed_more: usize) -> String {
    if needed_more == 0 {
        return READY_STATUS.to_string();
    }
    format!(
        "Waiting for {needed_more} more {} to form a group",
        pluralize(needed_more, "student", "students")
    )
}

/// One member in the group detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberLine {
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Study preference, empty when unknown
    pub study_preference: String,
    /// Location preference, defaulting to [`ANY_LOCATION`]
    pub location_preference: String,
}

impl From<&Member> for MemberLine {
    fn from(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            email: member.email.clone(),
            study_preference: member.study_preference.clone().unwrap_or_default(),
            location_preference: non_empty(member.location_preference.as_deref())
                .unwrap_or(ANY_LOCATION)
                .to_string(),
        }
    }
}

/// The group detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupDetailView {
    /// `"{course} Study Group"`
    pub title: String,
    /// Compatibility figures
    pub stats: MatchStats,
    /// Members in server order
    pub members: Vec<MemberLine>,
}

impl From<&MatchDetail> for GroupDetailView {
    fn from(detail: &MatchDetail) -> Self {
        Self {
            title: format!("{} Study Group", detail.course),
            stats: MatchStats::from_ratios(
                detail.availability_overlap,
                detail.preference_alignment,
                detail.avg_compatibility,
            ),
            members: detail.group_members.iter().map(MemberLine::from).collect(),
        }
    }
}

/// What the dashboard shows after a successful load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DashboardView {
    /// Groups and/or pending courses to list
    Content {
        /// Matched groups
        groups: Vec<GroupCard>,
        /// Pending courses
        pending: Vec<PendingCard>,
    },
    /// Nothing yet; prompt the student to join a course
    Empty {
        /// Explains how groups form
        explanation: String,
    },
}

impl DashboardView {
    /// Builds the view from the groups and their reconciliation.
    #[must_use]
    pub fn build(groups: &[GroupRecord], reconciliation: &Reconciliation) -> Self {
        if !reconciliation.has_content(groups.len()) {
            return Self::Empty {
                explanation: format!(
                    "Groups are automatically formed when {} or more students join the same course.",
                    reconciliation.threshold
                ),
            };
        }

        let pending = reconciliation
            .pending_by_course
            .iter()
            .filter_map(|(course, subs)| {
                reconciliation.course_progress.get(course).map(|progress| {
                    PendingCard::from_course(course, subs, progress, reconciliation.threshold)
                })
            })
            .collect();

        Self::Content {
            groups: groups.iter().map(GroupCard::from).collect(),
            pending,
        }
    }

    /// Number of badges to show next to the dashboard tab.
    #[must_use]
    pub fn badge_count(&self) -> usize {
        match self {
            Self::Content { groups, pending } => groups.len() + pending.len(),
            Self::Empty { .. } => 0,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
