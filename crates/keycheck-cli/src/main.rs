//! keycheck CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "keycheck", version, about = "Exam answer-key checker")]
struct Cli {
    /// Show a generic error message instead of the failure detail
    #[arg(long, global = true)]
    quiet: bool,

    /// Config file path (defaults to ./keycheck.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a response sheet against an answer key
    Score {
        /// Response sheet document (.pdf or plain text)
        #[arg(long)]
        response_sheet: PathBuf,

        /// Answer key document (.pdf or plain text)
        #[arg(long)]
        answer_key: PathBuf,

        /// Write the full JSON report here
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: table, json, markdown
        #[arg(long, default_value = "table")]
        format: String,

        /// Dump the first N parsed response blocks for debugging
        #[arg(long, default_value = "0")]
        show_blocks: usize,
    },

    /// Show what the parser sees in a single document
    Inspect {
        /// Document to inspect (.pdf or plain text)
        #[arg(long)]
        document: PathBuf,

        /// Document kind: key, sheet
        #[arg(long)]
        kind: String,

        /// Number of parsed entries/blocks to sample
        #[arg(long, default_value = "5")]
        sample: usize,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("keycheck=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => fail(cli.quiet, e),
    };
    let quiet = cli.quiet || config.presentation.quiet_errors;

    let result = match cli.command {
        Commands::Score {
            response_sheet,
            answer_key,
            output,
            format,
            show_blocks,
        } => commands::score::execute(
            response_sheet,
            answer_key,
            output,
            format,
            show_blocks,
            config.scoring.missing_option_policy,
        ),
        Commands::Inspect {
            document,
            kind,
            sample,
        } => commands::inspect::execute(document, kind, sample),
    };

    if let Err(e) = result {
        fail(quiet, e);
    }
}

/// Error boundary: `quiet` hides the failure detail behind a generic
/// message, otherwise the full context chain is shown.
fn fail(quiet: bool, e: anyhow::Error) -> ! {
    if quiet {
        eprintln!("Error: processing failed");
    } else {
        eprintln!("Error: {e:#}");
    }
    process::exit(1);
}
