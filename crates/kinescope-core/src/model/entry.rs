use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One media item in the catalog.
///
/// The `key` is the canonical source URL and doubles as the catalog-store
/// key. Entries are immutable once stored; a merge replaces an entry
/// wholesale, never a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unique identifier (the canonical source URL).
    pub key: String,

    /// Free-text title, unnormalized. May contain `|`, `(`, `)`, `,`,
    /// `-`, quotes and `:` delimiters.
    pub title: String,

    /// Uploader/channel name.
    pub author: String,

    /// Playable-resource locator.
    pub url: String,

    /// Thumbnail image locator.
    pub thumbnail: String,
}

impl CatalogEntry {
    /// Build an entry, enforcing the completeness invariant.
    ///
    /// Every field must be non-empty before an entry is admitted to the
    /// catalog; incomplete remote records are rejected here rather than
    /// checked defensively at every point of use.
    ///
    /// # Errors
    /// Returns [`Error::InvalidData`] naming the offending field.
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        url: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Result<Self> {
        let entry = Self {
            key: key.into(),
            title: title.into(),
            author: author.into(),
            url: url.into(),
            thumbnail: thumbnail.into(),
        };

        for (field, value) in [
            ("key", &entry.key),
            ("title", &entry.title),
            ("author", &entry.author),
            ("url", &entry.url),
            ("thumbnail", &entry.thumbnail),
        ] {
            if value.trim().is_empty() {
                return Err(Error::InvalidData(format!("empty {field} in catalog entry")));
            }
        }

        Ok(entry)
    }
}
