//! The student dashboard.

use anyhow::{Result, bail};
use groupmeet_async::GroupmeetError;
use groupmeet_core::view::LoadState;

use super::GlobalArgs;
use crate::render;

pub async fn execute(globals: &GlobalArgs, json: bool) -> Result<()> {
    let client = globals.client();
    let state = client
        .dashboard()
        .with_reconciler(globals.reconciler())
        .load_state()
        .await;

    let dashboard = match state {
        LoadState::Loaded(dashboard) => dashboard,
        LoadState::Failed(GroupmeetError::Unauthorized) => {
            bail!("Session expired or missing. Log in again and set GROUPMEET_SESSION.")
        }
        LoadState::Failed(err) => bail!("Failed to load dashboard: {err}"),
        LoadState::Loading => bail!("Dashboard is still loading"),
    };

    let view = dashboard.view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        render::dashboard(&view);
    }
    Ok(())
}
