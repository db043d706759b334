use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use specgate::commands::{clarify, init, stage, status, validate};
use specgate::config::Settings;
use specgate::fs::{FileStore, ProjectDir};
use specgate::models::project::Mode;
use specgate::models::stage::Stage;
use specgate::Pipeline;

#[derive(Parser)]
#[command(name = "specgate")]
#[command(about = "Spec-driven development pipeline with a clarity gate", long_about = None)]
#[command(version)]
struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Log pipeline decisions to stderr (overridden by SPECGATE_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project and move it past the init stage
    Init {
        /// Project name
        name: String,

        /// One-line description of what is being built
        description: String,

        /// guided (threshold 70) or expert (threshold 50); defaults to specgate.toml
        #[arg(short, long)]
        mode: Option<Mode>,
    },

    /// Show pipeline progress and the next step
    Status,

    /// Start another round of work on the current stage
    Start {
        /// Stage the caller expects to be at
        stage: Stage,
    },

    /// Complete the current stage and move to the next one
    Advance {
        /// Stage the caller expects to be at
        stage: Stage,
    },

    /// Run a Clarity Gate round
    ///
    /// Without --scores, prints the eight dimensions to assess. With --scores,
    /// records the round and advances to design once the threshold is met.
    Clarify {
        /// Comma-separated dimension_name:score pairs (0-100)
        #[arg(short, long)]
        scores: Option<String>,
    },

    /// Record the final validation and complete the pipeline
    Validate,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "specgate=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("SPECGATE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = Settings::load(&cli.root)?;
    let store = FileStore::new(ProjectDir::new(&cli.root, &settings.state_dir));
    let pipeline = Pipeline::new();

    match cli.command {
        Commands::Init {
            name,
            description,
            mode,
        } => init::execute(
            &store,
            &pipeline,
            name,
            description,
            mode.unwrap_or(settings.default_mode),
        ),
        Commands::Status => status::execute(&store),
        Commands::Start { stage: expected } => stage::start(&store, &pipeline, expected),
        Commands::Advance { stage: expected } => stage::advance(&store, &pipeline, expected),
        Commands::Clarify { scores } => {
            clarify::execute(&store, &pipeline, scores.as_deref()).map(|_| ())
        }
        Commands::Validate => validate::execute(&store, &pipeline),
    }
}
