//! Group feedback.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use groupmeet_async::types::FeedbackRequest;

use super::GlobalArgs;

#[derive(Args, Debug)]
pub struct FeedbackArgs {
    /// Match id of the group, as shown by `groupmeet results`
    match_id: String,

    /// Your submission id for that course
    #[arg(long)]
    student_id: String,

    /// Rating from 1 to 5
    #[arg(long)]
    rating: u8,

    /// Optional comments
    #[arg(long, default_value = "")]
    comments: String,
}

pub async fn execute(globals: &GlobalArgs, args: FeedbackArgs) -> Result<()> {
    let request =
        FeedbackRequest::new(args.match_id, args.student_id, args.rating).with_comments(args.comments);

    let resp = globals
        .client()
        .feedback()
        .create(&request)
        .await
        .context("Failed to submit feedback")?;

    let message = if resp.message.is_empty() {
        "Feedback submitted"
    } else {
        resp.message.as_str()
    };
    println!("{} {message}", "OK".green());
    Ok(())
}
