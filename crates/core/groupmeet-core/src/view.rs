//! Dashboard navigation and load state.

/// The two student-facing views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewState {
    /// Groups and pending submissions
    #[default]
    Dashboard,
    /// The join-group form with the availability calendar
    JoinGroup,
}

/// Outcome of a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// View now showing
    pub state: ViewState,
    /// Whether dashboard data must be fetched again
    pub reload: bool,
}

impl ViewState {
    /// Navigates to `target`.
    ///
    /// Both views are re-entrant. Entering the dashboard always reloads, even
    /// from the dashboard itself.
    #[must_use]
    pub fn navigate(self, target: Self) -> Transition {
        tracing::debug!(from = ?self, to = ?target, "navigate");
        Transition {
            state: target,
            reload: matches!(target, Self::Dashboard),
        }
    }
}

/// Load state of the dashboard data.
///
/// Reconciliation only runs once both fetches succeeded, so a failure leaves
/// the view in `Failed` rather than showing partial data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState<T, E> {
    /// Fetches in flight
    #[default]
    Loading,
    /// Both fetches succeeded
    Loaded(T),
    /// A fetch failed
    Failed(E),
}

impl<T, E> LoadState<T, E> {
    /// Maps a finished load.
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(err) => Self::Failed(err),
        }
    }

    /// The loaded value, if any.
    pub const fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    /// True while fetches are in flight.
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entering_dashboard_reloads() {
        let t = ViewState::JoinGroup.navigate(ViewState::Dashboard);
        assert_eq!(t.state, ViewState::Dashboard);
        assert!(t.reload);

        let again = t.state.navigate(ViewState::Dashboard);
        assert!(again.reload);
    }

    #[test]
    fn entering_join_does_not_reload() {
        let t = ViewState::Dashboard.navigate(ViewState::JoinGroup);
        assert_eq!(t.state, ViewState::JoinGroup);
        assert!(!t.reload);
        assert!(!t.state.navigate(ViewState::JoinGroup).reload);
    }

    #[test]
    fn load_state_from_result() {
        let ok: LoadState<u8, String> = LoadState::from_result(Ok(1));
        assert_eq!(ok.loaded(), Some(&1));

        let failed: LoadState<u8, String> = LoadState::from_result(Err("offline".into()));
        assert_eq!(failed, LoadState::Failed("offline".into()));
        assert!(failed.loaded().is_none());

        assert!(LoadState::<u8, String>::default().is_loading());
    }
}
