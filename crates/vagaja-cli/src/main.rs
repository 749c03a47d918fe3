mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::commands::analyze::AnalyzeArgs;
use crate::commands::pipeline::PipelineArgs;
use crate::commands::profile::ProfileCommand;
use crate::commands::score_test::ScoreTestArgs;
use crate::commands::suggest::SuggestArgs;
use crate::config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "vagaja",
    about = "AI recruiting assistant: CV scoring, behavioral tests, and pipeline design",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a batch of CVs against a job description and rank candidates
    Analyze(AnalyzeArgs),
    /// Suggest evaluation criteria for a job description
    Suggest(SuggestArgs),
    /// Score a saved behavioral test answer sheet
    ScoreTest(ScoreTestArgs),
    /// Inspect and adjust the selection pipeline model
    Pipeline(PipelineArgs),
    /// View and edit the saved candidate profile
    Profile {
        /// Path of the profile file
        #[arg(long, global = true)]
        store: Option<PathBuf>,
        #[command(subcommand)]
        command: ProfileCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Logs go to stderr; command output stays on stdout.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze(args) => commands::analyze::run(args, &config).await,
        Command::Suggest(args) => commands::suggest::run(args, &config).await,
        Command::ScoreTest(args) => commands::score_test::run(args, &config),
        Command::Pipeline(args) => commands::pipeline::run(args, &config),
        Command::Profile { store, command } => commands::profile::run(command, store, &config),
    }
}
