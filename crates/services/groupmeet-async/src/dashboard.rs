//! Loads everything the dashboard shows in one step.
//!
//! The groups and submissions fetches run concurrently. Reconciliation only
//! runs once both have succeeded; if either fails, the error is returned and
//! nothing is reconciled.

use groupmeet_core::{
    GroupRecord, Reconciler, Reconciliation, Submission, presentation::DashboardView,
    view::LoadState,
};

use crate::{client::Client, config::Config, error::GroupmeetError};

/// Groups, submissions, and their reconciliation from one load
#[derive(Debug, Clone)]
pub struct Dashboard {
    /// Groups the user belongs to
    pub groups: Vec<GroupRecord>,
    /// The user's submissions
    pub submissions: Vec<Submission>,
    /// Matched/pending split of `submissions`
    pub reconciliation: Reconciliation,
}

impl Dashboard {
    /// Builds the display view
    #[must_use]
    pub fn view(&self) -> DashboardView {
        DashboardView::build(&self.groups, &self.reconciliation)
    }
}

/// Fetches and reconciles dashboard data
pub struct DashboardLoader<'c, C: Config> {
    client: &'c Client<C>,
    reconciler: Reconciler,
}

impl<'c, C: Config> DashboardLoader<'c, C> {
    /// Creates a loader with the default group threshold
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self {
            client,
            reconciler: Reconciler::new(),
        }
    }

    /// Uses a custom reconciler, e.g. one with a different threshold
    #[must_use]
    pub const fn with_reconciler(mut self, reconciler: Reconciler) -> Self {
        self.reconciler = reconciler;
        self
    }

    /// Fetches groups and submissions concurrently, then reconciles them
    ///
    /// # Errors
    ///
    /// Returns the first fetch error. [`GroupmeetError::Unauthorized`] means
    /// the session has expired.
    pub async fn load(&self) -> Result<Dashboard, GroupmeetError> {
        let groups_api = self.client.groups();
        let submissions_api = self.client.submissions();

        let (groups, submissions) = tokio::try_join!(groups_api.mine(), submissions_api.mine())?;

        let reconciliation = self.reconciler.reconcile(&groups, &submissions);
        tracing::info!(
            groups = groups.len(),
            submissions = submissions.len(),
            pending = reconciliation.pending_count(),
            "dashboard loaded"
        );

        Ok(Dashboard {
            groups,
            submissions,
            reconciliation,
        })
    }

    /// Like [`load`](Self::load), folded into a [`LoadState`]
    pub async fn load_state(&self) -> LoadState<Dashboard, GroupmeetError> {
        LoadState::from_result(self.load().await)
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns a dashboard loader using the default threshold
    #[must_use]
    pub const fn dashboard(&self) -> DashboardLoader<'_, C> {
        DashboardLoader::new(self)
    }
}
