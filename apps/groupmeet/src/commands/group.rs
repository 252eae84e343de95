//! Group detail.

use anyhow::{Context, Result};
use groupmeet_core::presentation::GroupDetailView;

use super::GlobalArgs;
use crate::render;

pub async fn execute(globals: &GlobalArgs, match_id: &str, json: bool) -> Result<()> {
    let detail = globals
        .client()
        .groups()
        .detail(match_id)
        .await
        .with_context(|| format!("Failed to load group {match_id}"))?;

    let view = GroupDetailView::from(&detail);
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        render::group_detail(&view);
    }
    Ok(())
}
