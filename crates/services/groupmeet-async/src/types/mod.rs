//! Request and response types for the GroupMeet API

/// Session and health endpoint types
pub mod auth;
/// Feedback endpoint types
pub mod feedback;
/// Group endpoint types
pub mod groups;
/// Admin matching endpoint types
pub mod matching;
/// Per-student results endpoint types
pub mod results;
/// Submission endpoint types
pub mod submissions;

pub use auth::{AuthStatus, HealthResponse};
pub use feedback::FeedbackResponse;
pub use groupmeet_core::types::{
    FeedbackRequest, GroupRecord, LocationPreference, MatchDetail, Member, NewSubmission,
    StudyPreference, Submission,
};
pub use groups::{GroupDetailResponse, GroupsResponse};
pub use matching::{MatchRunRequest, MatchRunResponse, MatchSummary, UnmatchedStudent};
pub use results::{ResultsResponse, ResultsStudent, StudentMatch};
pub use submissions::{SubmissionsResponse, SubmitResponse};
