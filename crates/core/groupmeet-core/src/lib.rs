#![warn(missing_docs)]

//! Client-side core for GroupMeet study-group matching.
//!
//! Everything in this crate is synchronous and free of I/O:
//! - [`slot`]: the wire/display encodings of availability slots
//! - [`selection`]: an in-progress availability selection
//! - [`calendar`]: the weekday calendar grid as a pure function of a selection
//! - [`reconcile`]: splitting submissions into matched and pending, with per-course progress
//! - [`presentation`]: display-ready cards built from reconciliation output
//! - [`validation`]: form checks run before anything is sent to the server

/// Weekday calendar grid rendering
pub mod calendar;
/// Display-ready structures for the dashboard
pub mod presentation;
/// Submission/group reconciliation
pub mod reconcile;
/// Availability selection model
pub mod selection;
/// Slot identifier encodings
pub mod slot;
/// Shared data model
pub mod types;
/// Submission and feedback validation
pub mod validation;
/// Dashboard view state machine
pub mod view;

pub use crate::reconcile::{
    CourseProgress, DEFAULT_GROUP_THRESHOLD, Reconciler, Reconciliation, reconcile,
};
pub use crate::selection::AvailabilitySelection;
pub use crate::types::{GroupRecord, MatchDetail, Member, Submission};
pub use crate::validation::{ValidationError, ValidationErrors};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::presentation::{DashboardView, GroupCard, GroupDetailView, PendingCard};
    pub use crate::types::*;
    pub use crate::view::{LoadState, ViewState};
    pub use crate::{AvailabilitySelection, CourseProgress, Reconciler, Reconciliation};
}
