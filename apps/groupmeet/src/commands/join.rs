//! Joining a course.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use groupmeet_async::types::{LocationPreference, NewSubmission, StudyPreference};
use groupmeet_core::slot::{self, PreferenceSlot};
use groupmeet_core::{AvailabilitySelection, validation::validate_submission, view::ViewState};

use super::GlobalArgs;
use crate::render;

#[derive(Args, Debug)]
pub struct JoinArgs {
    /// Course code, e.g. CIS1200
    #[arg(long)]
    course: String,

    /// Available time block, e.g. "Monday 8am-10am" (repeatable)
    #[arg(long = "slot", value_name = "SLOT", required_unless_present = "preference_slots")]
    slots: Vec<String>,

    /// Half-day block from the preference form, e.g. Mon_AM (repeatable)
    #[arg(long = "preference-slot", value_name = "SLOT", conflicts_with = "slots")]
    preference_slots: Vec<PreferenceSlot>,

    /// How you like to study
    #[arg(long, value_name = "PREFERENCE")]
    study: StudyPreference,

    /// Where you can meet
    #[arg(long, value_name = "LOCATION", default_value_t = LocationPreference::Either)]
    location: LocationPreference,

    /// Confirm you will attend the group's sessions
    #[arg(long)]
    confirm: bool,

    /// Validate and show the request without sending it
    #[arg(long)]
    dry_run: bool,
}

pub async fn execute(globals: &GlobalArgs, args: JoinArgs) -> Result<()> {
    let selection = if args.preference_slots.is_empty() {
        let mut selection = AvailabilitySelection::new();
        selection.set_all(&args.slots);
        for wire in selection.iter().filter(|s| !slot::is_calendar_slot(s)) {
            tracing::warn!(slot = wire, "slot is not on the weekday calendar; sending as entered");
        }
        render::calendar(&selection);
        selection
    } else {
        render::preference_slots(&args.preference_slots);
        AvailabilitySelection::from_preference_slots(args.preference_slots.iter().copied())
    };
    println!();

    let submission =
        NewSubmission::from_form(&args.course, &selection, args.study, args.location, args.confirm);

    if args.dry_run {
        validate_submission(&submission)?;
        println!("{}", serde_json::to_string_pretty(&submission)?);
        return Ok(());
    }

    let resp = globals
        .client()
        .submissions()
        .create(&submission)
        .await
        .with_context(|| format!("Failed to join {}", submission.course))?;

    println!(
        "{} Joined {} (submission {})",
        "OK".green(),
        submission.course.cyan(),
        resp.id
    );

    let transition = ViewState::JoinGroup.navigate(ViewState::Dashboard);
    if transition.reload {
        println!();
        if let Err(err) = super::dashboard::execute(globals, false).await {
            eprintln!("{} Could not refresh dashboard: {err:#}", "WARN".yellow());
        }
    }
    Ok(())
}
