//! Server and session check.

use anyhow::{Context, Result};
use colored::Colorize;

use super::GlobalArgs;

pub async fn execute(globals: &GlobalArgs) -> Result<()> {
    let client = globals.client();
    let api_base = client.config().api_base().to_string();

    let health = client
        .session()
        .health()
        .await
        .with_context(|| format!("GroupMeet server at {api_base} is not reachable"))?;
    let marker = if health.is_ok() {
        "OK".green()
    } else {
        "WARN".yellow()
    };
    println!(
        "{marker} {} {}",
        api_base.cyan(),
        health.message.as_deref().unwrap_or_default()
    );

    let status = client
        .session()
        .status()
        .await
        .context("Failed to check session")?;

    if status.authenticated {
        let user = status.pennkey.as_deref().unwrap_or("unknown user");
        let role = if status.is_admin { " (admin)" } else { "" };
        println!("{} Logged in as {}{role}", "OK".green(), user.cyan());
    } else if client.config().has_session() {
        println!(
            "{} Session expired; log in again and update GROUPMEET_SESSION",
            "WARN".yellow()
        );
    } else {
        println!(
            "{} Not logged in; set GROUPMEET_SESSION or pass --session",
            "INFO".blue()
        );
    }

    if status.dev_mode {
        println!("{} Server is running in dev mode", "INFO".blue());
    }
    Ok(())
}
