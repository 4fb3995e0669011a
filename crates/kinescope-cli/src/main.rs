use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "kinescope", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the database (default: ~/.local/share/kinescope/kinescope.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Fetch the remote catalog once and merge it into the local store
    ///
    /// Downloads the bootstrap catalog document and mass-upserts its records.
    /// Incomplete records are skipped; keys missing from the document are
    /// never deleted, so a partial document can only add or refresh entries.
    Sync,
    /// Run the periodic resync scheduler in the foreground
    ///
    /// Syncs immediately, then reschedules itself after every run with a
    /// uniformly random delay inside the configured jitter range (default
    /// 1-24 hours). Fetch failures keep the stale catalog and reschedule.
    Daemon,
    /// Print the keyword vocabularies derived from the catalog
    ///
    /// Runs the title-to-keyword extractor over every catalog entry and
    /// prints the three vocabularies (movie names, genres, provider names)
    /// the NL front end would register for entity matching.
    Vocab {
        /// Print every keyword instead of a summary
        #[arg(long)]
        full: bool,
    },
    /// Score a query against the catalog and print each result record
    ///
    /// Manual smoke test for the scorer. Entity flags stand in for what the
    /// NL front end would report; with no flags a fixed "sherlock holmes"
    /// movie-name query is issued. Records print as JSON in emission order.
    Search {
        /// Matched movie-name entity
        #[arg(long)]
        movie_name: Option<String>,

        /// Matched film-genre entity
        #[arg(long)]
        genre: Option<String>,

        /// Matched streaming-provider entity
        #[arg(long)]
        provider: Option<String>,

        /// Declared media type of the query
        #[arg(long, default_value = "movie")]
        media_type: String,
    },
    /// Show catalog status
    Status,
}

fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kinescope")
        .join("kinescope.db")
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let db_path = cli.db.unwrap_or_else(default_db_path);

    // Ensure database directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    match cli.command {
        Commands::Sync => {
            commands::run_sync(db_path).await?;
        }
        Commands::Daemon => {
            commands::run_daemon(db_path).await?;
        }
        Commands::Vocab { full } => {
            commands::show_vocab(db_path, full)?;
        }
        Commands::Search {
            movie_name,
            genre,
            provider,
            media_type,
        } => {
            commands::run_search(db_path, movie_name, genre, provider, &media_type)?;
        }
        Commands::Status => {
            commands::show_status(db_path)?;
        }
    }

    Ok(())
}
