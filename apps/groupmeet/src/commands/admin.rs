//! Admin commands: list submissions, run matching, export CSV.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use colored::Colorize;
use groupmeet_async::types::{MatchRunRequest, Submission};
use groupmeet_core::presentation::short_id;
use groupmeet_core::validation::normalize_course;

use super::GlobalArgs;

const NOT_AVAILABLE: &str = "N/A";
const CSV_HEADERS: [&str; 6] = ["ID", "Name", "Email", "Course", "Availability", "Study Preference"];

#[derive(Subcommand)]
pub enum AdminCommands {
    /// List every submission
    Submissions {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the matcher and create groups
    Match {
        /// Only match this course
        #[arg(long)]
        course: Option<String>,
    },

    /// Export every submission as CSV
    Export {
        /// Output file; `-` writes to stdout
        /// (defaults to groupmeet-submissions-<date>.csv)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

pub async fn execute(globals: &GlobalArgs, cmd: AdminCommands) -> Result<()> {
    match cmd {
        AdminCommands::Submissions { json } => cmd_submissions(globals, json).await,
        AdminCommands::Match { course } => cmd_match(globals, course).await,
        AdminCommands::Export { output } => cmd_export(globals, output).await,
    }
}

async fn fetch_all(globals: &GlobalArgs) -> Result<Vec<Submission>> {
    globals
        .client()
        .submissions()
        .all()
        .await
        .context("Failed to load submissions")
}

async fn cmd_submissions(globals: &GlobalArgs, json: bool) -> Result<()> {
    let submissions = fetch_all(globals).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&submissions)?);
        return Ok(());
    }

    println!(
        "{:<12} {:<20} {:<28} {:<10} {:<10} {}",
        "ID".bold(),
        "Name".bold(),
        "Email".bold(),
        "Course".bold(),
        "Slots".bold(),
        "Study".bold()
    );
    for sub in &submissions {
        let slots = if sub.availability.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            format!("{} slots", sub.availability.len())
        };
        println!(
            "{:<12} {:<20} {:<28} {:<10} {:<10} {}",
            short_id(&sub.id),
            or_na(sub.name.as_deref()),
            or_na(sub.email.as_deref()),
            or_na(Some(sub.course.as_str())),
            slots,
            or_na(sub.study_preference.as_deref())
        );
    }
    println!();
    println!("Total: {} submissions", submissions.len());
    Ok(())
}

async fn cmd_match(globals: &GlobalArgs, course: Option<String>) -> Result<()> {
    let request = course
        .as_deref()
        .map(normalize_course)
        .filter(|c| !c.is_empty())
        .map_or_else(MatchRunRequest::all_courses, MatchRunRequest::for_course);

    let resp = globals
        .client()
        .matching()
        .run(&request)
        .await
        .context("Matching failed")?;

    println!(
        "{} Matching complete! Created {} groups. {} students unmatched.",
        "OK".green(),
        resp.matches_created,
        resp.unmatched_count
    );
    for summary in &resp.matches {
        println!(
            "  {} {} ({} members)",
            summary.course.cyan(),
            short_id(&summary.match_id).dimmed(),
            summary.group_size
        );
    }
    if !resp.unmatched_students.is_empty() {
        println!("{}", "Unmatched students:".bold());
        for student in &resp.unmatched_students {
            println!("  {} ({})", student.name, student.email);
        }
    }
    Ok(())
}

async fn cmd_export(globals: &GlobalArgs, output: Option<PathBuf>) -> Result<()> {
    let submissions = fetch_all(globals).await?;
    if submissions.is_empty() {
        bail!("No data to export");
    }

    let path = output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "groupmeet-submissions-{}.csv",
            chrono::Local::now().format("%Y-%m-%d")
        ))
    });

    if path.as_os_str() == "-" {
        let stdout = std::io::stdout();
        write_csv(stdout.lock(), &submissions)?;
        return Ok(());
    }

    let file = std::fs::File::create(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_csv(file, &submissions)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "{} Exported {} submissions to {}",
        "OK".green(),
        submissions.len(),
        path.display().to_string().cyan()
    );
    Ok(())
}

/// Writes submissions as CSV with every field quoted.
pub fn write_csv<W: Write>(writer: W, submissions: &[Submission]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);

    wtr.write_record(CSV_HEADERS)?;
    for sub in submissions {
        let availability = sub.availability.join("; ");
        wtr.write_record([
            sub.id.as_str(),
            sub.name.as_deref().unwrap_or_default(),
            sub.email.as_deref().unwrap_or_default(),
            sub.course.as_str(),
            availability.as_str(),
            sub.study_preference.as_deref().unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

fn or_na(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(NOT_AVAILABLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn csv_quotes_every_cell_and_joins_availability() {
        let mut sub = Submission::new("a1b2c3d4e5", "CIS1200");
        sub.name = Some("Ana \"A\" Lee".into());
        sub.email = Some("ana@upenn.edu".into());
        sub.availability = vec!["Monday 8am-10am".into(), "Friday 6pm-8pm".into()];

        let mut out = Vec::new();
        write_csv(&mut out, &[sub, Submission::new("z9", "MATH1410")]).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\"ID\",\"Name\",\"Email\",\"Course\",\"Availability\",\"Study Preference\"\n\
             \"a1b2c3d4e5\",\"Ana \"\"A\"\" Lee\",\"ana@upenn.edu\",\"CIS1200\",\"Monday 8am-10am; Friday 6pm-8pm\",\"\"\n\
             \"z9\",\"\",\"\",\"MATH1410\",\"\",\"\"\n"
        );
    }

    #[test]
    fn missing_values_render_as_na() {
        assert_eq!(or_na(None), "N/A");
        assert_eq!(or_na(Some("")), "N/A");
        assert_eq!(or_na(Some("PSets")), "PSets");
    }
}
