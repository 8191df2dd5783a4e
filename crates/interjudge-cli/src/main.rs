//! interjudge CLI — runs the judge side of an interactive problem.
//!
//! stdout is the judge-to-solution channel. Logs, diagnostics and the
//! rejection reason all go to stderr.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use interjudge_core::model::Locale;
use tracing_subscriber::EnvFilter;

mod commands;

/// Exit status for failures that are not a verdict (broken pipe, bad config).
const EXIT_FATAL: i32 = 2;

#[derive(Parser)]
#[command(name = "interjudge", version, about = "Interactive-problem judge")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Judge a solution over stdin/stdout
    Run {
        /// Config file path (default: ./interjudge.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Maximum number of lines read from the solution
        #[arg(long)]
        limit: Option<u32>,

        /// Hidden number the solution has to find
        #[arg(long, allow_negative_numbers = true)]
        target: Option<i64>,

        /// Language of the feedback lines: ja or en
        #[arg(long)]
        locale: Option<Locale>,

        /// Write a JSON session report to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Validate a config file
    Validate {
        /// Config file path (default: ./interjudge.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter interjudge.toml
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("interjudge=info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            config,
            limit,
            target,
            locale,
            report,
        } => commands::run::execute(config, limit, target, locale, report)
            .map(|verdict| commands::run::report_verdict(&verdict)),
        Commands::Validate { config } => commands::validate::execute(config).map(|()| 0),
        Commands::Init => commands::init::execute().map(|()| 0),
    };

    let code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            EXIT_FATAL
        }
    };
    process::exit(code);
}
