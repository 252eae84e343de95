//! Subcommand implementations.

pub mod admin;
pub mod dashboard;
pub mod feedback;
pub mod group;
pub mod join;
pub mod results;
pub mod status;

use clap::Args;
use clap::builder::RangedU64ValueParser;
use groupmeet_async::{Client, GroupmeetConfig};
use groupmeet_core::{DEFAULT_GROUP_THRESHOLD, Reconciler};

/// Largest accepted `--threshold`.
const MAX_GROUP_THRESHOLD: u64 = 1000;

/// Connection settings shared by every subcommand.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// GroupMeet server URL
    #[arg(long, env = "GROUPMEET_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Session cookie value from a logged-in browser
    #[arg(long, env = "GROUPMEET_SESSION", hide_env_values = true, global = true)]
    pub session: Option<String>,

    /// Students needed before a course forms a group
    #[arg(
        long,
        env = "GROUPMEET_GROUP_THRESHOLD",
        default_value_t = DEFAULT_GROUP_THRESHOLD,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_GROUP_THRESHOLD),
        global = true
    )]
    pub threshold: usize,
}

impl GlobalArgs {
    /// Builds an API client from the flags, falling back to the environment.
    pub fn client(&self) -> Client<GroupmeetConfig> {
        let mut config = GroupmeetConfig::new();
        if let Some(base) = self.base_url.as_deref().map(str::trim).filter(|b| !b.is_empty()) {
            config = config.with_api_base(base);
        }
        if let Some(session) = &self.session {
            config = config.with_session(session.as_str());
        }
        tracing::debug!(base = config.api_base(), session = config.has_session(), "client configured");
        Client::with_config(config)
    }

    /// Reconciler using the configured threshold.
    pub const fn reconciler(&self) -> Reconciler {
        Reconciler::new().with_threshold(self.threshold)
    }
}
