use crate::{
    client::{Auth, Client},
    config::Config,
    error::GroupmeetError,
    types::matching::{MatchRunRequest, MatchRunResponse},
};

/// API resource for the admin `/match` endpoint
pub struct Matching<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Matching<'c, C> {
    /// Creates a new Matching resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Runs the server-side matcher and stores the groups it forms
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error, for
    /// instance when there are too few submissions to form a group.
    pub async fn run(&self, req: &MatchRunRequest) -> Result<MatchRunResponse, GroupmeetError> {
        let resp: MatchRunResponse = self.client.post("/match", req, Auth::Anonymous).await?;
        tracing::info!(
            course = req.course.as_deref().unwrap_or("all"),
            created = resp.matches_created,
            unmatched = resp.unmatched_count,
            "matching run complete"
        );
        Ok(resp)
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Matching API resource
    #[must_use]
    pub const fn matching(&self) -> Matching<'_, C> {
        Matching::new(self)
    }
}
