use std::path::PathBuf;

use anyhow::{Context, Result};

use kinescope_core::schema::Database;

pub fn show_status(db_path: PathBuf) -> Result<()> {
    let db = Database::open(&db_path).context("Failed to open database")?;
    let count = db.count_entries()?;

    println!("\nKinescope Status\n");
    println!("  Database: {}", db_path.display());
    println!("  Catalog entries: {count}");

    if count == 0 {
        println!("\n  Run `kinescope sync` to fetch the catalog");
    }

    Ok(())
}
