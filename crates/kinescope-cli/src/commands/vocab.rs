use std::path::PathBuf;

use anyhow::{Context, Result};

use kinescope_core::schema::Database;
use kinescope_search::catalog_vocabularies;

/// Extract and print the keyword vocabularies for the current catalog.
pub fn show_vocab(db_path: PathBuf, full: bool) -> Result<()> {
    let db = Database::open(&db_path).context("Failed to open database")?;
    let catalog = db.all_entries()?;

    if catalog.is_empty() {
        println!("Catalog is empty. Run `kinescope sync` first.");
        return Ok(());
    }

    let vocabularies = catalog_vocabularies(&catalog);

    println!("\nKeyword vocabularies ({} catalog entries)\n", catalog.len());
    for vocab in &vocabularies {
        println!("  {} ({} keywords)", vocab.name, vocab.keywords.len());
        if full {
            for keyword in &vocab.keywords {
                println!("    {keyword}");
            }
        }
    }

    if !full {
        println!("\nRun with --full to print every keyword.");
    }

    Ok(())
}
