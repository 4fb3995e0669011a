use std::path::PathBuf;

use anyhow::{Context, Result};

use kinescope_core::model::{MatchedEntities, MediaType};
use kinescope_core::schema::Database;
use kinescope_search::{Branding, CatalogSearch};

/// Score one query and print each yielded record as JSON.
///
/// The entity flags stand in for the NL front end's report; with no
/// entity flag at all a fixed movie-name query is issued so the command
/// doubles as a smoke test against a synced catalog.
pub fn run_search(
    db_path: PathBuf,
    movie_name: Option<String>,
    genre: Option<String>,
    provider: Option<String>,
    media_type: &str,
) -> Result<()> {
    let mut entities = MatchedEntities {
        movie_name,
        film_genre: genre,
        movie_streaming_provider: provider,
    };
    if entities.is_empty() {
        entities.movie_name = Some("sherlock holmes".to_string());
    }

    let media_type = parse_media_type(media_type)?;

    let db = Database::open(&db_path).context("Failed to open database")?;
    let catalog = db.all_entries()?;
    let search = CatalogSearch::new(catalog, Branding::default());

    let mut emitted = 0;
    for result in search.search(media_type, &entities) {
        println!("{}", serde_json::to_string(&result)?);
        emitted += 1;
    }

    if emitted == 0 {
        tracing::info!("No matches (not an error)");
    }

    Ok(())
}

fn parse_media_type(name: &str) -> Result<MediaType> {
    serde_json::from_value(serde_json::Value::String(name.to_lowercase()))
        .with_context(|| format!("Unknown media type: {name}"))
}
