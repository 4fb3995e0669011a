//! Title-to-keyword extraction.
//!
//! Catalog titles conventionally front-load the movie name before
//! metadata separated by pipes ("Name | Cast | Quality | Channel"), with
//! parenthetical qualifiers, trailing cast lists, dash subtitles and the
//! occasional quoted or colon-separated name embedded in the noise. The
//! extractor reduces each title to the short fragments worth matching
//! user speech against.

use kinescope_core::model::{
    CatalogEntry, KeywordVocabulary, MediaType, VOCAB_FILM_GENRE, VOCAB_MOVIE_NAME,
    VOCAB_STREAMING_PROVIDER,
};

/// Fixed thematic tags registered alongside the derived titles.
pub const FILM_GENRES: &[&str] = &["retro", "classic", "vintage"];

/// Both spellings of the provider name.
pub const PROVIDER_NAMES: &[&str] = &["Retro TV", "RetroTV"];

/// Extract the searchable keywords from one free-text title.
///
/// Returns up to three fragments: when the cleaned candidate contains a
/// colon, the series and subtitle halves are each emitted alongside the
/// whole phrase, since both are independently useful search terms.
/// Degenerate titles that clean down to nothing yield no keywords.
#[must_use]
pub fn title_keywords(title: &str) -> Vec<String> {
    // Keep the first segment of each delimiter in turn.
    let candidate = first_segment(title, '|');
    let candidate = first_segment(candidate, '(').trim();
    let candidate = first_segment(candidate, ',');
    let candidate = first_segment(candidate, '-');

    // One quoting apostrophe on each end, at most.
    let candidate = candidate.strip_prefix('\'').unwrap_or(candidate);
    let candidate = candidate.strip_suffix('\'').unwrap_or(candidate);

    // A double-quoted segment replaces the candidate outright: the true
    // name is embedded in quotes amid other text. A lone quote falls
    // back to the candidate as-is.
    let candidate = quoted_segment(candidate).unwrap_or(candidate);

    let mut keywords = Vec::new();
    if let Some((series, subtitle)) = candidate.split_once(':') {
        push_keyword(&mut keywords, series);
        push_keyword(&mut keywords, subtitle);
    }
    push_keyword(&mut keywords, candidate);
    keywords
}

/// Derive the three vocabularies for the full catalog, all registered
/// against [`MediaType::Movie`]. Pure over the catalog snapshot, so
/// re-running over an unchanged catalog yields an identical result.
#[must_use]
pub fn catalog_vocabularies(catalog: &[CatalogEntry]) -> Vec<KeywordVocabulary> {
    let titles: Vec<String> = catalog
        .iter()
        .flat_map(|entry| title_keywords(&entry.title))
        .collect();

    tracing::debug!(
        "Extracted {} title keywords from {} catalog entries",
        titles.len(),
        catalog.len()
    );

    vec![
        KeywordVocabulary::new(MediaType::Movie, VOCAB_MOVIE_NAME, titles),
        KeywordVocabulary::new(MediaType::Movie, VOCAB_FILM_GENRE, owned(FILM_GENRES)),
        KeywordVocabulary::new(
            MediaType::Movie,
            VOCAB_STREAMING_PROVIDER,
            owned(PROVIDER_NAMES),
        ),
    ]
}

fn first_segment(text: &str, delimiter: char) -> &str {
    text.split(delimiter).next().unwrap_or(text)
}

/// Text strictly between the first two double quotes, if both exist.
fn quoted_segment(text: &str) -> Option<&str> {
    let (_, rest) = text.split_once('"')?;
    let (inner, _) = rest.split_once('"')?;
    Some(inner)
}

fn push_keyword(keywords: &mut Vec<String>, keyword: &str) {
    let keyword = keyword.trim();
    if !keyword.is_empty() {
        keywords.push(keyword.to_string());
    }
}

fn owned(fixed: &[&str]) -> Vec<String> {
    fixed.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pipe_keeps_first_segment() {
        let keywords =
            title_keywords("The House of Fear | Basil Rathbone | Full Classic Movie in HD");
        assert_eq!(keywords, vec!["The House of Fear"]);
    }

    #[test]
    fn test_paren_and_comma_and_dash_stripped() {
        assert_eq!(title_keywords("Dressed To Kill (1946)"), vec!["Dressed To Kill"]);
        assert_eq!(
            title_keywords("Scarlet Street, with Edward G. Robinson"),
            vec!["Scarlet Street"]
        );
        assert_eq!(title_keywords("Suddenly - Frank Sinatra"), vec!["Suddenly"]);
    }

    #[test]
    fn test_colon_emits_both_halves_and_whole() {
        let keywords = title_keywords(
            "Sherlock Holmes: Terror By Night | Basil Rathbone | Full Restored Movie in HD! | Retro Central",
        );
        assert_eq!(
            keywords,
            vec![
                "Sherlock Holmes",
                "Terror By Night",
                "Sherlock Holmes: Terror By Night",
            ]
        );
    }

    #[test]
    fn test_quoted_segment_replaces_candidate() {
        let keywords = title_keywords("Foo \"Bar Baz\" Qux");
        assert_eq!(keywords, vec!["Bar Baz"]);
    }

    #[test]
    fn test_lone_quote_falls_back() {
        let keywords = title_keywords("Foo \"Bar Baz");
        assert_eq!(keywords, vec!["Foo \"Bar Baz"]);
    }

    #[test]
    fn test_apostrophe_quoting_stripped() {
        assert_eq!(title_keywords("'Detour'"), vec!["Detour"]);
    }

    #[test]
    fn test_degenerate_title_yields_nothing() {
        assert!(title_keywords("   | whatever").is_empty());
        assert!(title_keywords("(1950)").is_empty());
    }

    fn entry(title: &str) -> CatalogEntry {
        CatalogEntry::new("k", title, "Retro Central", "u", "t").unwrap()
    }

    #[test]
    fn test_catalog_vocabularies_shape() {
        let catalog = vec![entry("Sherlock Holmes: Terror By Night | HD")];
        let vocabs = catalog_vocabularies(&catalog);

        assert_eq!(vocabs.len(), 3);
        assert_eq!(vocabs[0].name, VOCAB_MOVIE_NAME);
        assert_eq!(vocabs[1].keywords, vec!["retro", "classic", "vintage"]);
        assert_eq!(vocabs[2].keywords, vec!["Retro TV", "RetroTV"]);
        assert!(vocabs.iter().all(|v| v.media_type == MediaType::Movie));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let catalog = vec![
            entry("Sherlock Holmes: Terror By Night | HD"),
            entry("Dressed To Kill (1946)"),
            entry("Sherlock Holmes in Washington | Retro Central"),
        ];

        let first: HashSet<String> = catalog_vocabularies(&catalog)
            .remove(0)
            .keywords
            .into_iter()
            .collect();
        let second: HashSet<String> = catalog_vocabularies(&catalog)
            .remove(0)
            .keywords
            .into_iter()
            .collect();
        assert_eq!(first, second);
    }
}
