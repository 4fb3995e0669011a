use serde::{Deserialize, Serialize};

use crate::model::MediaType;

/// A named set of short strings the NL front end uses to recognize
/// entities in user speech.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordVocabulary {
    /// Media type the vocabulary is registered against.
    pub media_type: MediaType,

    /// Registration name, e.g. `movie_name`.
    pub name: String,

    /// Deduplicated keywords, first-occurrence order.
    pub keywords: Vec<String>,
}

impl KeywordVocabulary {
    /// Build a vocabulary, deduplicating the working keyword list while
    /// preserving first-occurrence order. The consumer treats the
    /// vocabulary as a set, so duplicates carry no information.
    #[must_use]
    pub fn new(media_type: MediaType, name: impl Into<String>, keywords: Vec<String>) -> Self {
        let mut seen = std::collections::HashSet::new();
        let keywords = keywords
            .into_iter()
            .filter(|keyword| seen.insert(keyword.clone()))
            .collect();

        Self {
            media_type,
            name: name.into(),
            keywords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_dedups_preserving_order() {
        let vocab = KeywordVocabulary::new(
            MediaType::Movie,
            "movie_name",
            vec![
                "Sherlock Holmes".to_string(),
                "Terror By Night".to_string(),
                "Sherlock Holmes".to_string(),
            ],
        );
        assert_eq!(vocab.keywords, vec!["Sherlock Holmes", "Terror By Night"]);
    }

    #[test]
    fn test_vocabulary_name() {
        let vocab = KeywordVocabulary::new(MediaType::Movie, "film_genre", vec![]);
        assert_eq!(vocab.name, "film_genre");
        assert!(vocab.keywords.is_empty());
    }
}
