mod adapters;
mod config;
mod domain;
mod error;
mod pipeline;
mod ports;

use adapters::llm::GeminiExtractor;
use adapters::notify::SlackNotifier;
use adapters::storage::SqliteStorage;
use clap::{Parser, Subcommand};
use config::Settings;
use error::Result;
use pipeline::Pipeline;
use ports::StoragePort;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = "meeting-agent",
    version,
    about = "Turns a meeting transcript into structured minutes, stores them and posts a summary"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Process one transcript through the pipeline
    Run {
        /// Path to the transcript text file
        #[arg(long)]
        input: PathBuf,

        /// Also write the extracted minutes as pretty JSON to this path
        #[arg(long)]
        json_out: Option<PathBuf>,
    },
    /// List recently stored meeting records
    Recent {
        /// Maximum number of records to show
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        log::error!("{} stage failed: {}", err.stage(), err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run { input, json_out } => run_pipeline(&input, json_out.as_deref()).await,
        Commands::Recent { limit } => list_recent(limit).await,
    }
}

async fn run_pipeline(input: &std::path::Path, json_out: Option<&std::path::Path>) -> Result<()> {
    let settings = Settings::from_env()?;

    let storage = Arc::new(SqliteStorage::new(settings.db_path.clone())?);
    storage.run_migrations()?;

    let extractor = Arc::new(GeminiExtractor::new(
        settings.model_api_key.clone(),
        settings.model_name.clone(),
    ));
    let notifier = Arc::new(SlackNotifier::new(
        settings.notify_token.clone(),
        settings.notify_channel.clone(),
    ));

    let pipeline = Pipeline::new(storage, extractor, notifier);
    let (id, minutes) = pipeline.process_file(input).await?;

    if let Some(path) = json_out {
        let json = serde_json::to_string_pretty(&minutes)
            .map_err(|e| error::AppError::Io(std::io::Error::other(e)))?;
        std::fs::write(path, json)?;
        log::info!("Minutes copy written to {}", path.display());
    }

    log::info!("Done - stored meeting record {}", id);
    Ok(())
}

async fn list_recent(limit: u32) -> Result<()> {
    let storage = SqliteStorage::new(Settings::db_path())?;
    storage.run_migrations()?;

    let summaries = storage.list_recent(limit).await?;
    if summaries.is_empty() {
        println!("no records stored yet");
        return Ok(());
    }

    for summary in summaries {
        println!(
            "{:>6}  {}  {}",
            summary.id,
            summary.meeting_date.as_deref().unwrap_or("-"),
            summary.created_at
        );
    }
    Ok(())
}
