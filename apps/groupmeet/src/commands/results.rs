//! Per-student match results.

use anyhow::{Context, Result};
use colored::Colorize;
use groupmeet_async::types::ResultsResponse;

use super::GlobalArgs;
use crate::render;

pub async fn execute(globals: &GlobalArgs, student_id: &str, json: bool) -> Result<()> {
    let resp = globals
        .client()
        .groups()
        .results(student_id)
        .await
        .with_context(|| format!("Failed to load results for {student_id}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&resp)?);
        return Ok(());
    }

    match &resp {
        ResultsResponse::Matched(group) => {
            render::student_match(group);
            println!();
            println!(
                "Rate this group: {}",
                format!(
                    "groupmeet feedback {} --student-id {} --rating <1-5>",
                    group.match_id, group.student.id
                )
                .cyan()
            );
        }
        ResultsResponse::Waiting { student, message } => {
            println!("{}", "GroupMeet Results".bold());
            if let Some(name) = student.name.as_deref() {
                println!("  {name}");
            }
            println!("{message}");
        }
    }
    Ok(())
}
