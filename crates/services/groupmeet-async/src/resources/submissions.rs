use crate::{
    client::{Auth, Client},
    config::Config,
    error::GroupmeetError,
    types::submissions::{SubmissionsResponse, SubmitResponse},
};
use groupmeet_core::{
    types::{NewSubmission, Submission},
    validation::validate_submission,
};

/// API resource for submissions
pub struct Submissions<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Submissions<'c, C> {
    /// Creates a new Submissions resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Lists the current user's submissions, matched or not
    ///
    /// # Errors
    ///
    /// Returns an error if no session is configured, the request fails, or the
    /// API returns an error.
    pub async fn mine(&self) -> Result<Vec<Submission>, GroupmeetError> {
        let resp: SubmissionsResponse = self
            .client
            .get("/api/my-submissions", Auth::Session)
            .await?;
        Ok(resp.submissions)
    }

    /// Joins a course by submitting availability and preferences
    ///
    /// The submission is validated locally first; nothing is sent if any rule
    /// fails.
    ///
    /// # Errors
    ///
    /// Returns [`GroupmeetError::Validation`] for invalid input, or an error if
    /// no session is configured, the request fails, or the API rejects it
    /// (e.g. a duplicate submission for the same course).
    pub async fn create(&self, submission: &NewSubmission) -> Result<SubmitResponse, GroupmeetError> {
        validate_submission(submission)?;
        let resp: SubmitResponse = self
            .client
            .post("/api/submit", submission, Auth::Session)
            .await?;
        tracing::info!(id = %resp.id, course = %submission.course, "submission created");
        Ok(resp)
    }

    /// Lists every submission on the server (admin)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn all(&self) -> Result<Vec<Submission>, GroupmeetError> {
        let resp: SubmissionsResponse = self.client.get("/submissions", Auth::Anonymous).await?;
        Ok(resp.submissions)
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Submissions API resource
    #[must_use]
    pub const fn submissions(&self) -> Submissions<'_, C> {
        Submissions::new(self)
    }
}
