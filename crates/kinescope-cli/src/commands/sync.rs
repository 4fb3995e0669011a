use std::path::PathBuf;

use anyhow::{Context, Result};

use kinescope_core::schema::Database;
use kinescope_etl::{sync_catalog, CatalogClient, Config, SyncScheduler};

/// One-shot fetch + merge.
pub async fn run_sync(db_path: PathBuf) -> Result<()> {
    let config = Config::load_with_db_path(db_path)?;
    let client =
        CatalogClient::new(&config.bootstrap_url).context("Failed to create catalog client")?;
    let db = Database::open(&config.database_path).context("Failed to open database")?;

    let merged = sync_catalog(&client, &db).await?;
    println!("Merged {merged} entries ({} total)", db.count_entries()?);

    Ok(())
}

/// Foreground resync scheduler: sync now, then jittered forever.
pub async fn run_daemon(db_path: PathBuf) -> Result<()> {
    let config = Config::load_with_db_path(db_path)?;
    let client =
        CatalogClient::new(&config.bootstrap_url).context("Failed to create catalog client")?;

    let (jitter_min, jitter_max) = config.jitter_range();
    tracing::info!(
        "Starting resync scheduler (jitter {}s..{}s)",
        jitter_min.as_secs(),
        jitter_max.as_secs()
    );

    let scheduler = SyncScheduler::new(client, config.database_path, jitter_min, jitter_max);
    scheduler.run().await?;

    Ok(())
}
