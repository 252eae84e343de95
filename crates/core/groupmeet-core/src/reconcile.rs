//! Reconciliation of confirmed groups against raw submissions.
//!
//! The groups and submissions endpoints are fetched independently. This module
//! derives one consistent view from the pair:
//!
//! 1. the set of submission ids already matched into a group,
//! 2. the submissions still pending, in their original order,
//! 3. pending submissions grouped by their literal course string,
//! 4. per-course progress toward the group-formation threshold.
//!
//! Every call is independent and pure; it never fails on data it can interpret.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;

use crate::types::{GroupRecord, Submission};

/// Submissions per course the matcher waits for before forming a group.
pub const DEFAULT_GROUP_THRESHOLD: usize = 3;

/// Progress of one course toward the formation threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CourseProgress {
    /// Pending submissions for the course
    pub count: usize,
    /// Submissions still missing, never negative
    pub needed_more: usize,
    /// `round(100 * count / threshold)`; exceeds 100 once count passes the threshold
    pub progress_pct: usize,
    /// `needed_more == 0`
    pub ready: bool,
}

impl CourseProgress {
    /// Progress of `count` submissions against `threshold`.
    ///
    /// A zero threshold is treated as 1. The percentage saturates at
    /// `usize::MAX` rather than overflowing.
    #[must_use]
    pub fn compute(count: usize, threshold: usize) -> Self {
        let threshold = threshold.max(1);
        let needed_more = threshold.saturating_sub(count);
        // Integer round-half-up of 100 * count / threshold, in u128 so it cannot overflow.
        let (wide_count, wide_threshold) = (count as u128, threshold as u128);
        let pct = (200 * wide_count + wide_threshold) / (2 * wide_threshold);
        let progress_pct = usize::try_from(pct).unwrap_or(usize::MAX);
        Self {
            count,
            needed_more,
            progress_pct,
            ready: needed_more == 0,
        }
    }
}

/// Result of reconciling groups with submissions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Reconciliation {
    /// Submission ids referenced by at least one group record
    pub matched_ids: HashSet<String>,
    /// Submissions not referenced by any group, in input order
    pub pending: Vec<Submission>,
    /// Pending submissions by course, courses in order of first appearance
    pub pending_by_course: IndexMap<String, Vec<Submission>>,
    /// Progress per course, same keys and order as `pending_by_course`
    pub course_progress: IndexMap<String, CourseProgress>,
    /// Threshold the progress was computed against
    pub threshold: usize,
}

impl Reconciliation {
    /// True when `submission_id` belongs to a group.
    #[must_use]
    pub fn is_matched(&self, submission_id: &str) -> bool {
        self.matched_ids.contains(submission_id)
    }

    /// Number of pending submissions.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Whether the dashboard has anything to show besides the empty-state prompt.
    #[must_use]
    pub fn has_content(&self, group_count: usize) -> bool {
        group_count > 0 || !self.pending.is_empty()
    }
}

/// Reconciles groups with submissions against a formation threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciler {
    threshold: usize,
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new()
    }
}

impl Reconciler {
    /// Reconciler using [`DEFAULT_GROUP_THRESHOLD`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            threshold: DEFAULT_GROUP_THRESHOLD,
        }
    }

    /// Overrides the formation threshold. Zero is raised to 1.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = if threshold == 0 { 1 } else { threshold };
        self
    }

    /// The formation threshold in use.
    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    /// Splits `submissions` into matched and pending using `groups`.
    ///
    /// Group records without a `submission_id` contribute nothing. Group
    /// references to unknown submissions are ignored. Duplicate submissions
    /// are kept as-is; only membership in the matched set filters them.
    #[must_use]
    pub fn reconcile(&self, groups: &[GroupRecord], submissions: &[Submission]) -> Reconciliation {
        let matched_ids = matched_submission_ids(groups);

        let pending: Vec<Submission> = submissions
            .iter()
            .filter(|s| !matched_ids.contains(&s.id))
            .cloned()
            .collect();

        let mut pending_by_course: IndexMap<String, Vec<Submission>> = IndexMap::new();
        for submission in &pending {
            pending_by_course
                .entry(submission.course.clone())
                .or_default()
                .push(submission.clone());
        }

        let course_progress: IndexMap<String, CourseProgress> = pending_by_course
            .iter()
            .map(|(course, subs)| {
                (
                    course.clone(),
                    CourseProgress::compute(subs.len(), self.threshold),
                )
            })
            .collect();

        tracing::debug!(
            groups = groups.len(),
            submissions = submissions.len(),
            matched = matched_ids.len(),
            pending = pending.len(),
            courses = pending_by_course.len(),
            "reconciled submissions against groups"
        );

        Reconciliation {
            matched_ids,
            pending,
            pending_by_course,
            course_progress,
            threshold: self.threshold,
        }
    }

    /// Like [`Reconciler::reconcile`], treating absent collections as empty.
    #[must_use]
    pub fn reconcile_optional(
        &self,
        groups: Option<&[GroupRecord]>,
        submissions: Option<&[Submission]>,
    ) -> Reconciliation {
        self.reconcile(groups.unwrap_or_default(), submissions.unwrap_or_default())
    }
}

/// Reconciles with the default threshold.
#[must_use]
pub fn reconcile(groups: &[GroupRecord], submissions: &[Submission]) -> Reconciliation {
    Reconciler::new().reconcile(groups, submissions)
}

/// Submission ids referenced by `groups`.
#[must_use]
pub fn matched_submission_ids(groups: &[GroupRecord]) -> HashSet<String> {
    groups
        .iter()
        .filter_map(|g| g.submission_id.clone())
        .collect()
}
