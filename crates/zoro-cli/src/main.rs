//! zoro CLI: track exam attempts and review your progress.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "zoro", version, about = "Personal exam history tracker")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Data directory (overrides config and ZORO_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show summary statistics, score composition and trend
    Stats {
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show the exam history table
    List {
        /// Only show exams whose name contains this text (case-insensitive)
        #[arg(long, conflicts_with = "sort")]
        search: Option<String>,

        /// Sort by column: date, examName, correct, incorrect, notAttempted, percentage
        #[arg(long)]
        sort: Option<String>,

        /// Sort direction: asc, desc (default: toggle like a header click)
        #[arg(long, requires = "sort")]
        direction: Option<String>,
    },

    /// Record a single exam attempt
    Add {
        /// Exam name
        #[arg(long)]
        name: String,

        /// Correct answers
        #[arg(long, default_value = "0")]
        correct: u32,

        /// Incorrect answers
        #[arg(long, default_value = "0")]
        incorrect: u32,

        /// Unanswered questions
        #[arg(long, default_value = "0")]
        not_attempted: u32,

        /// Score percentage (0-100)
        #[arg(long)]
        percentage: f64,

        /// When the exam was taken (RFC 3339 or YYYY-MM-DD, default: now)
        #[arg(long)]
        date: Option<String>,
    },

    /// Replace the history with a JSON snapshot
    Import {
        /// Snapshot file, or "-" for stdin
        input: PathBuf,
    },

    /// Write the history as a JSON snapshot
    Export {
        /// Output directory or file, or "-" for stdout
        #[arg(long, default_value = ".")]
        output: PathBuf,
    },

    /// Delete the whole history
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Check a JSON snapshot without importing it
    Validate {
        /// Snapshot file
        input: PathBuf,
    },

    /// Create a starter config file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("zoro=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let opts = commands::GlobalOpts {
        config: cli.config,
        data_dir: cli.data_dir,
    };

    let result = match cli.command {
        Commands::Stats { format } => commands::stats::execute(&opts, format),
        Commands::List {
            search,
            sort,
            direction,
        } => commands::list::execute(&opts, search, sort, direction),
        Commands::Add {
            name,
            correct,
            incorrect,
            not_attempted,
            percentage,
            date,
        } => commands::add::execute(
            &opts,
            name,
            correct,
            incorrect,
            not_attempted,
            percentage,
            date,
        ),
        Commands::Import { input } => commands::import::execute(&opts, input),
        Commands::Export { output } => commands::export::execute(&opts, output),
        Commands::Clear { yes } => commands::clear::execute(&opts, yes),
        Commands::Validate { input } => commands::validate::execute(input),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
