//! API resource implementations for the GroupMeet client

/// Session and health API resource
pub mod auth;
/// Feedback API resource
pub mod feedback;
/// Groups API resource
pub mod groups;
/// Admin matching API resource
pub mod matching;
/// Submissions API resource
pub mod submissions;

pub use auth::Session;
pub use feedback::Feedback;
pub use groups::Groups;
pub use matching::Matching;
pub use submissions::Submissions;
