//! Leadflow command-line host.
//!
//! Provides the `leadflow` binary, which stands in for the landing page: it
//! feeds form values into the same [`SubmissionHandler`] a page would use
//! and prints what the visitor would see. Supports `submit` and `export`.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use leadflow_client::config::{CALENDLY_PLACEHOLDER, DEFAULT_CACHE_FILE, ENDPOINT_PLACEHOLDER};
use leadflow_client::{
    ClientConfig, ClientError, RawLeadForm, SchedulingStep, SubmissionHandler, UserOutcome,
};

/// Landing-page lead capture from the command line.
#[derive(Parser)]
#[command(name = "leadflow", about = "Submit and export landing-page leads")]
struct Cli {
    /// Intake endpoint URL.
    #[arg(long, env = "LEADFLOW_ENDPOINT", default_value = ENDPOINT_PLACEHOLDER, global = true)]
    endpoint: String,

    /// Calendly username for the scheduling step.
    #[arg(long, env = "LEADFLOW_CALENDLY_USERNAME", default_value = CALENDLY_PLACEHOLDER, global = true)]
    calendly_username: String,

    /// Local cache file.
    #[arg(long, env = "LEADFLOW_CACHE", default_value = DEFAULT_CACHE_FILE, global = true)]
    cache: PathBuf,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Submit one lead, as if the form was filled in and sent.
    Submit {
        #[arg(long)]
        full_name: String,

        #[arg(long)]
        email: String,

        /// Phone number with country code; stray characters are dropped.
        #[arg(long)]
        phone: String,

        #[arg(long)]
        country: String,

        /// The visitor ticked the consent box.
        #[arg(long)]
        consent: bool,
    },
    /// Export the local cache as CSV.
    Export {
        /// Output file (default: ./aura-fx-leads-<date>.csv).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print to stdout instead of writing a file.
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let config = ClientConfig::new(&cli.endpoint, &cli.calendly_username, &cli.cache);
    let handler = SubmissionHandler::new(&config);

    let exit_code = match cli.command {
        Commands::Submit {
            full_name,
            email,
            phone,
            country,
            consent,
        } => {
            let form = RawLeadForm {
                full_name,
                email,
                phone,
                country,
                consent,
            };
            run_submit(&handler, &form).await
        }
        Commands::Export { output, stdout } => run_export(&handler, output, stdout),
    };
    process::exit(exit_code);
}

/// Execute the submit subcommand.
///
/// Returns exit code: 0 = accepted, 1 = rejected by validation.
async fn run_submit(handler: &SubmissionHandler, form: &RawLeadForm) -> i32 {
    let outcome = handler.submit(form).await;
    match &outcome {
        UserOutcome::Rejected { error } => {
            eprintln!("{}", error);
            1
        }
        UserOutcome::Accepted {
            message,
            delivery,
            scheduling,
        } => {
            println!("{}", message);
            match scheduling {
                SchedulingStep::Widget { url } => println!("Schedule your call: {}", url),
                SchedulingStep::NotConfigured { notice } => println!("{}", notice),
            }
            tracing::info!(?delivery, "submission finished");
            0
        }
    }
}

/// Execute the export subcommand.
///
/// Returns exit code: 0 = success, 1 = nothing to export, 3 = I/O error.
fn run_export(handler: &SubmissionHandler, output: Option<PathBuf>, stdout: bool) -> i32 {
    let export = match handler.export() {
        Ok(export) => export,
        Err(ClientError::NothingToExport) => {
            eprintln!("{}", ClientError::NothingToExport);
            return 1;
        }
        Err(e) => {
            eprintln!("Error exporting leads: {}", e);
            return 3;
        }
    };

    if stdout {
        println!("{}", export.content);
        return 0;
    }

    let path = output.unwrap_or_else(|| PathBuf::from(&export.file_name));
    match std::fs::write(&path, &export.content) {
        Ok(()) => {
            eprintln!("Exported {} leads to {}", export.count, path.display());
            0
        }
        Err(e) => {
            eprintln!("Error: failed to write '{}': {}", path.display(), e);
            3
        }
    }
}
