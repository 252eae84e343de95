use crate::{
    client::{Auth, Client},
    config::Config,
    error::GroupmeetError,
    types::feedback::FeedbackResponse,
};
use groupmeet_core::{types::FeedbackRequest, validation::validate_feedback};

/// API resource for the `/feedback` endpoint
pub struct Feedback<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Feedback<'c, C> {
    /// Creates a new Feedback resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Rates a group
    ///
    /// # Errors
    ///
    /// Returns [`GroupmeetError::Validation`] when ids are blank or the rating
    /// is outside 1..=5, or an error if the request fails.
    pub async fn create(&self, feedback: &FeedbackRequest) -> Result<FeedbackResponse, GroupmeetError> {
        validate_feedback(feedback)?;
        self.client.post("/feedback", feedback, Auth::Anonymous).await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Feedback API resource
    #[must_use]
    pub const fn feedback(&self) -> Feedback<'_, C> {
        Feedback::new(self)
    }
}
