use rusqlite::Connection;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::CatalogEntry;

use super::migrations::MIGRATIONS;

/// A database connection with catalog-store operations.
///
/// Iteration order over the catalog is insertion order (rowid), which is
/// the order every result-emission path in the scorer observes.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) a database at the given path and apply migrations.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.apply_migrations()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.apply_migrations()?;
        Ok(db)
    }

    /// Get a reference to the underlying connection (for advanced queries).
    #[must_use]
    pub const fn conn(&self) -> &Connection {
        &self.conn
    }

    fn apply_migrations(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                applied_at TEXT NOT NULL DEFAULT (datetime('now'))
            )",
            [],
        )?;

        let mut stmt = self
            .conn
            .prepare("SELECT version FROM schema_migrations ORDER BY version")?;
        let applied: Vec<u32> = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        for migration in MIGRATIONS {
            if !applied.contains(&migration.version) {
                tracing::info!(
                    "Applying migration {} ({})",
                    migration.version,
                    migration.name
                );
                self.conn.execute_batch(migration.sql)?;
                self.conn.execute(
                    "INSERT INTO schema_migrations (version, name) VALUES (?1, ?2)",
                    rusqlite::params![migration.version, migration.name],
                )?;
            }
        }

        Ok(())
    }
}

// Catalog-entry operations
impl Database {
    /// Insert an entry, replacing it wholesale if the key already exists.
    pub fn upsert_entry(&self, entry: &CatalogEntry) -> Result<()> {
        self.conn.execute(
            "INSERT INTO entries (key, title, author, url, thumbnail)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(key) DO UPDATE SET
                title = excluded.title,
                author = excluded.author,
                url = excluded.url,
                thumbnail = excluded.thumbnail",
            rusqlite::params![
                entry.key,
                entry.title,
                entry.author,
                entry.url,
                entry.thumbnail,
            ],
        )?;
        Ok(())
    }

    /// Get a single entry by key.
    pub fn get_entry(&self, key: &str) -> Result<CatalogEntry> {
        let mut stmt = self.conn.prepare(
            "SELECT key, title, author, url, thumbnail FROM entries WHERE key = ?1",
        )?;

        stmt.query_row([key], |row| Self::row_to_entry(row))
            .map_err(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => Error::NotFound {
                    entity: "entry",
                    key: key.to_string(),
                },
                other => Error::Database(other),
            })
    }

    /// List every entry in catalog iteration order.
    pub fn all_entries(&self) -> Result<Vec<CatalogEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT key, title, author, url, thumbnail FROM entries ORDER BY rowid",
        )?;

        let entries = stmt
            .query_map([], |row| Self::row_to_entry(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(entries)
    }

    /// Count catalog entries.
    pub fn count_entries(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    /// Mass-upsert a catalog snapshot without deleting unseen keys.
    ///
    /// Each entry commits independently rather than inside one
    /// transaction: a concurrent reader may observe a partially merged
    /// catalog, but never a corrupt entry, and keys absent from the
    /// snapshot stay retrievable afterwards.
    ///
    /// Returns the number of entries merged.
    pub fn merge(&self, entries: &[CatalogEntry]) -> Result<usize> {
        for entry in entries {
            self.upsert_entry(entry)?;
        }
        Ok(entries.len())
    }

    fn row_to_entry(row: &rusqlite::Row) -> rusqlite::Result<CatalogEntry> {
        Ok(CatalogEntry {
            key: row.get(0)?,
            title: row.get(1)?,
            author: row.get(2)?,
            url: row.get(3)?,
            thumbnail: row.get(4)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, title: &str) -> CatalogEntry {
        CatalogEntry::new(key, title, "Retro Central", key, format!("{key}.jpg")).unwrap()
    }

    #[test]
    fn test_database_open_in_memory() {
        let db = Database::open_in_memory().unwrap();
        let count: i64 = db
            .conn()
            .query_row("SELECT COUNT(*) FROM schema_migrations", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(count, 1); // One migration applied
    }

    #[test]
    fn test_entry_round_trip() {
        let db = Database::open_in_memory().unwrap();
        let original = entry("https://youtube.com/watch?v=abc", "Sherlock Holmes");

        db.upsert_entry(&original).unwrap();

        let fetched = db.get_entry("https://youtube.com/watch?v=abc").unwrap();
        assert_eq!(fetched, original);
    }

    #[test]
    fn test_get_entry_not_found() {
        let db = Database::open_in_memory().unwrap();
        let result = db.get_entry("https://youtube.com/watch?v=missing");
        assert!(matches!(result, Err(Error::NotFound { .. })));
    }

    #[test]
    fn test_upsert_replaces_wholesale() {
        let db = Database::open_in_memory().unwrap();
        db.upsert_entry(&entry("k1", "Old Title")).unwrap();
        db.upsert_entry(&entry("k1", "New Title")).unwrap();

        assert_eq!(db.count_entries().unwrap(), 1);
        assert_eq!(db.get_entry("k1").unwrap().title, "New Title");
    }

    #[test]
    fn test_merge_is_non_destructive() {
        let db = Database::open_in_memory().unwrap();
        db.merge(&[entry("k1", "First"), entry("k2", "Second")])
            .unwrap();

        // A later snapshot that omits k1 must leave it retrievable.
        let merged = db.merge(&[entry("k2", "Second Updated")]).unwrap();
        assert_eq!(merged, 1);
        assert_eq!(db.get_entry("k1").unwrap().title, "First");
        assert_eq!(db.get_entry("k2").unwrap().title, "Second Updated");
    }

    #[test]
    fn test_all_entries_preserves_insertion_order() {
        let db = Database::open_in_memory().unwrap();
        db.merge(&[entry("k1", "First"), entry("k2", "Second"), entry("k3", "Third")])
            .unwrap();

        let titles: Vec<String> = db
            .all_entries()
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_open_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kinescope.db");

        {
            let db = Database::open(&path).unwrap();
            db.upsert_entry(&entry("k1", "Persisted")).unwrap();
        }

        let db = Database::open(&path).unwrap();
        assert_eq!(db.get_entry("k1").unwrap().title, "Persisted");
    }
}
