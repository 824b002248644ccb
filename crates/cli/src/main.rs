use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use travel_qa_core::{
    DEFAULT_DATABASE_URL, DEFAULT_OPENAI_BASE_URL, DEFAULT_PAGE_SIZE, env_non_empty,
};
use travel_qa_llm::{CompletionClient, CompletionConfig};
use travel_qa_service::ChatService;
use travel_qa_storage::{Storage, db_path_from_url};

mod commands;

#[derive(Parser)]
#[command(name = "travel-qa")]
#[command(about = "Travel documentation Q&A service backed by an AI completion API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        #[arg(short, long, default_value = "8000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
    },
    /// Ask one question and store the answer
    Ask {
        query: String,
        #[arg(short, long)]
        user_id: Option<String>,
    },
    /// Print a page of stored history, newest first
    History {
        #[arg(short, long)]
        user_id: Option<String>,
        #[arg(short, long, default_value = "1")]
        page: u32,
        #[arg(short = 's', long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u32,
    },
    /// Print one stored query
    Get { id: i64 },
    /// Print the total number of stored queries
    Stats,
    /// Verify the API key with a minimal completion request
    CheckKey,
}

fn get_db_path() -> PathBuf {
    let url = env_non_empty("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned());
    db_path_from_url(&url)
}

fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating database directory {}", parent.display()))?;
    }
    Ok(())
}

fn get_api_key() -> Result<String> {
    env_non_empty("OPENAI_API_KEY")
        .ok_or_else(|| anyhow::anyhow!("OPENAI_API_KEY environment variable must be set"))
}

fn get_base_url() -> String {
    env_non_empty("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_owned())
}

pub(crate) fn open_storage() -> Result<Arc<Storage>> {
    let db_path = get_db_path();
    ensure_db_dir(&db_path)?;
    let storage = Storage::new(&db_path)
        .with_context(|| format!("opening database {}", db_path.display()))?;
    Ok(Arc::new(storage))
}

pub(crate) fn build_client() -> Result<Arc<CompletionClient>> {
    let config = CompletionConfig::from_env();
    tracing::info!(
        model = %config.model,
        max_attempts = config.retry.max_attempts(),
        "Completion client configured"
    );
    let client = CompletionClient::new(get_api_key()?, get_base_url(), config)?;
    Ok(Arc::new(client))
}

/// Service for commands that only read history; the client is never called,
/// so a missing key is tolerated by substituting an empty one.
pub(crate) fn build_read_only_service() -> Result<ChatService> {
    let storage = open_storage()?;
    let key = get_api_key().unwrap_or_default();
    let client = CompletionClient::new(key, get_base_url(), CompletionConfig::default())?;
    Ok(ChatService::new(storage, Arc::new(client)))
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("warning: failed to load .env: {e}");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(host, port).await?,
        Commands::Ask { query, user_id } => commands::query::ask(query, user_id).await?,
        Commands::History { user_id, page, page_size } => {
            commands::query::history(user_id, page, page_size).await?;
        },
        Commands::Get { id } => commands::query::get(id).await?,
        Commands::Stats => commands::query::stats().await?,
        Commands::CheckKey => commands::query::check_key().await?,
    }

    Ok(())
}
