//! coursetag: AI and ethics tagging for course catalogs.
//! Entry point for the command-line binary.

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::commands::{AnalyzeArgs, CandidatesArgs, EthicsArgs};
use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "coursetag", version, about = "Tag course catalogs as AI-related and/or ethics-related")]
struct Cli {
    /// TOML configuration file (default: $COURSETAG_CONFIG or ./coursetag.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify both topics and write raw, unique and subset views
    Analyze {
        /// Course CSV with prefix, number, title and description columns
        #[arg(long, value_name = "CSV")]
        input_courses: PathBuf,
        /// Directory for the four output files
        #[arg(long, value_name = "DIR")]
        output_dir: PathBuf,
        /// Fuzzy match threshold, 0-100
        #[arg(long, value_name = "N")]
        fuzzy_threshold: Option<u32>,
        /// Rules only
        #[arg(long, default_value_t = false)]
        disable_fuzzy: bool,
    },
    /// Write the ethics-related subset only
    Ethics {
        #[arg(long, value_name = "CSV")]
        input_courses: PathBuf,
        #[arg(long, value_name = "CSV")]
        output: PathBuf,
        /// Ignore descriptions; match course titles only
        #[arg(long, default_value_t = false)]
        title_only: bool,
    },
    /// Write a broad list of possible AI courses for manual review
    Candidates {
        #[arg(long, value_name = "CSV")]
        input_courses: PathBuf,
        #[arg(long, value_name = "CSV")]
        output: PathBuf,
        /// Fuzzy match threshold, 0-100
        #[arg(long, value_name = "N")]
        fuzzy_threshold: Option<u32>,
        /// Rules only
        #[arg(long, default_value_t = false)]
        disable_fuzzy: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("coursetag=info,warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!("coursetag {}", env!("CARGO_PKG_VERSION"));
    let config = Config::load(cli.config.as_deref())?;

    let summary = match cli.command {
        Command::Analyze { input_courses, output_dir, fuzzy_threshold, disable_fuzzy } => {
            commands::analyze(
                &AnalyzeArgs { input: input_courses, output_dir, fuzzy_threshold, disable_fuzzy },
                &config,
            )?
        }
        Command::Ethics { input_courses, output, title_only } => {
            commands::ethics(&EthicsArgs { input: input_courses, output, title_only }, &config)?
        }
        Command::Candidates { input_courses, output, fuzzy_threshold, disable_fuzzy } => {
            commands::candidates(
                &CandidatesArgs { input: input_courses, output, fuzzy_threshold, disable_fuzzy },
                &config,
            )?
        }
    };

    for line in summary.lines() {
        println!("{line}");
    }
    Ok(())
}
