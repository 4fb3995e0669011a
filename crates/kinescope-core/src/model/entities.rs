use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Vocabulary name for title fragments derived from catalog entries.
pub const VOCAB_MOVIE_NAME: &str = "movie_name";

/// Vocabulary name for the fixed thematic genre tags.
pub const VOCAB_FILM_GENRE: &str = "film_genre";

/// Vocabulary name for the fixed provider-name spellings.
pub const VOCAB_STREAMING_PROVIDER: &str = "movie_streaming_provider";

/// What the NL front end matched in a single user utterance.
///
/// The vocabulary set is closed and fixed (three names), so this is a
/// typed struct rather than an open map. Absence of a field means "not
/// matched". Consumed by the scorer, never constructed by it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedEntities {
    pub movie_name: Option<String>,
    pub film_genre: Option<String>,
    pub movie_streaming_provider: Option<String>,
}

impl MatchedEntities {
    /// Build from the front end's vocabulary-name → matched-text mapping.
    ///
    /// Keys outside the three registered vocabularies are ignored.
    #[must_use]
    pub fn from_map(matches: &HashMap<String, String>) -> Self {
        Self {
            movie_name: matches.get(VOCAB_MOVIE_NAME).cloned(),
            film_genre: matches.get(VOCAB_FILM_GENRE).cloned(),
            movie_streaming_provider: matches.get(VOCAB_STREAMING_PROVIDER).cloned(),
        }
    }

    /// How many distinct vocabularies matched.
    #[must_use]
    pub fn match_count(&self) -> usize {
        [
            self.movie_name.is_some(),
            self.film_genre.is_some(),
            self.movie_streaming_provider.is_some(),
        ]
        .into_iter()
        .filter(|matched| *matched)
        .count()
    }

    /// Whether nothing matched at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.match_count() == 0
    }
}
