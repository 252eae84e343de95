use crate::{
    client::{Auth, Client},
    config::Config,
    error::GroupmeetError,
    types::groups::{GroupDetailResponse, GroupsResponse},
    types::results::ResultsResponse,
};
use groupmeet_core::types::{GroupRecord, MatchDetail};

/// API resource for the current user's groups
pub struct Groups<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Groups<'c, C> {
    /// Creates a new Groups resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Lists the groups the current user belongs to
    ///
    /// Each record excludes the user from `group_members` and carries the
    /// `submission_id` that was matched.
    ///
    /// # Errors
    ///
    /// Returns an error if no session is configured, the request fails, or the
    /// API returns an error.
    pub async fn mine(&self) -> Result<Vec<GroupRecord>, GroupmeetError> {
        let resp: GroupsResponse = self.client.get("/api/my-groups", Auth::Session).await?;
        Ok(resp.groups)
    }

    /// Fetches one group with every member
    ///
    /// # Errors
    ///
    /// Returns an error if no session is configured, the group does not exist
    /// (404), the user is not a member (403), or the request fails.
    pub async fn detail(&self, match_id: &str) -> Result<MatchDetail, GroupmeetError> {
        let path = format!("/api/group/{}", urlencoding::encode(match_id));
        let resp: GroupDetailResponse = self.client.get(&path, Auth::Session).await?;
        Ok(resp.detail)
    }

    /// Fetches the match results for one student
    ///
    /// Needs no session. A student without a group yet gets
    /// [`ResultsResponse::Waiting`].
    ///
    /// # Errors
    ///
    /// Returns an error if the student does not exist (404) or the request fails.
    pub async fn results(&self, student_id: &str) -> Result<ResultsResponse, GroupmeetError> {
        let path = format!("/results/{}", urlencoding::encode(student_id));
        let resp: ResultsResponse = self.client.get(&path, Auth::Anonymous).await?;
        tracing::debug!(student_id, matched = resp.group().is_some(), "loaded results");
        Ok(resp)
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Groups API resource
    #[must_use]
    pub const fn groups(&self) -> Groups<'_, C> {
        Groups::new(self)
    }
}
