//! Catalog sync and the self-rescheduling resync task.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;

use kinescope_core::model::CatalogEntry;
use kinescope_core::schema::Database;

use crate::error::SyncResult;
use crate::remote::{CatalogClient, RemoteEntry};

/// Fetch the remote catalog and merge it into the store.
///
/// Incomplete remote records (any empty field) are skipped with a
/// warning rather than admitted; the completeness invariant holds for
/// everything the store accepts. Returns the number of entries merged.
///
/// # Errors
/// Returns an error on fetch failure or store write failure. The store
/// is never left without previously merged data: a failed sync leaves
/// the catalog stale but valid.
pub async fn sync_catalog(client: &CatalogClient, db: &Database) -> SyncResult<usize> {
    let remote = client.fetch().await?;
    let entries = validate(remote);
    let merged = db.merge(&entries)?;

    tracing::info!("Merged {merged} catalog entries");
    Ok(merged)
}

fn validate(remote: BTreeMap<String, RemoteEntry>) -> Vec<CatalogEntry> {
    remote
        .into_iter()
        .filter_map(|(key, record)| {
            match CatalogEntry::new(
                key.clone(),
                record.title,
                record.author,
                record.url,
                record.thumbnail,
            ) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::warn!("Skipping incomplete catalog record {key}: {err}");
                    None
                }
            }
        })
        .collect()
}

/// The self-rescheduling resync task.
///
/// After every run, successful or not, the next run is scheduled a
/// uniformly random delay inside the jitter range later; there is no
/// fixed rate. The store is reopened per cycle, so a query running
/// against its own handle mid-merge observes at worst a partially
/// updated catalog, never a corrupt one.
#[derive(Debug)]
pub struct SyncScheduler {
    client: CatalogClient,
    db_path: PathBuf,
    jitter_min: Duration,
    jitter_max: Duration,
}

impl SyncScheduler {
    #[must_use]
    pub fn new(
        client: CatalogClient,
        db_path: PathBuf,
        jitter_min: Duration,
        jitter_max: Duration,
    ) -> Self {
        Self {
            client,
            db_path,
            jitter_min,
            jitter_max,
        }
    }

    /// Run sync cycles forever.
    ///
    /// Fetch failures are logged and absorbed: the catalog stays
    /// stale-but-valid and the next cycle is scheduled regardless. Only
    /// a store that cannot be opened at all is fatal.
    pub async fn run(&self) -> SyncResult<()> {
        loop {
            let db = Database::open(&self.db_path)?;
            if let Err(err) = sync_catalog(&self.client, &db).await {
                tracing::warn!("Catalog sync failed, keeping stale catalog: {err}");
            }

            let delay = self.next_delay();
            tracing::info!("Next catalog sync in {}s", delay.as_secs());
            sleep(delay).await;
        }
    }

    /// Uniformly random delay in `[jitter_min, jitter_max]`, chosen
    /// fresh after every run.
    fn next_delay(&self) -> Duration {
        let min = self.jitter_min.as_secs();
        let max = self.jitter_max.as_secs().max(min);
        Duration::from_secs(rand::thread_rng().gen_range(min..=max))
    }
}
