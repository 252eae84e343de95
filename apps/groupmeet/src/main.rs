//! GroupMeet CLI.
//!
//! The `groupmeet` command shows a student's study groups and pending
//! courses, joins new courses, rates groups, and runs the admin tools.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "groupmeet")]
#[command(about = "Find and manage GroupMeet study groups")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    globals: commands::GlobalArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the server and the current session
    Status,

    /// Show matched groups and courses still waiting for students
    Dashboard {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one group with every member
    Group {
        /// Match id from the dashboard
        match_id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a student's match and the ids needed to rate it
    Results {
        /// Submission id printed by `groupmeet join`
        student_id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Join a course and wait to be matched
    Join(commands::join::JoinArgs),

    /// Rate a group
    Feedback(commands::feedback::FeedbackArgs),

    /// Admin commands
    Admin {
        #[command(subcommand)]
        command: commands::admin::AdminCommands,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();

    let globals = cli.globals;
    match cli.command {
        Commands::Status => commands::status::execute(&globals).await,
        Commands::Dashboard { json } => commands::dashboard::execute(&globals, json).await,
        Commands::Group { match_id, json } => {
            commands::group::execute(&globals, &match_id, json).await
        }
        Commands::Results { student_id, json } => {
            commands::results::execute(&globals, &student_id, json).await
        }
        Commands::Join(args) => commands::join::execute(&globals, args).await,
        Commands::Feedback(args) => commands::feedback::execute(&globals, args).await,
        Commands::Admin { command } => commands::admin::execute(&globals, command).await,
    }
}
