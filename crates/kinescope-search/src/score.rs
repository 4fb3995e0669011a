//! Query scoring and result ranking.
//!
//! Scores a query's matched entities against a catalog snapshot and
//! emits ranked result records as a finite, single-pass sequence: per
//! title match first, then at most one catch-all provider playlist.

use serde::Serialize;

use kinescope_core::model::{
    CatalogEntry, MatchedEntities, MediaResult, MediaType, PlaybackType, PlaylistResult,
};

/// Scheme prefix the playback layer expects on every playable URI.
const STREAM_PREFIX: &str = "youtube//";

/// Bonus for a query carrying the supported media type.
const MEDIA_TYPE_BONUS: u8 = 15;

/// Bonus per distinct vocabulary matched in the utterance.
const ENTITY_BONUS: u8 = 30;

/// Bonus when the matched movie name hits the catalog.
const TITLE_MATCH_BONUS: u8 = 30;

/// Fixed confidence of every featured-media entry.
const FEATURED_CONFIDENCE: u8 = 70;

/// Fixed aggregate confidence of the fallback playlist.
const PLAYLIST_CONFIDENCE: u8 = 50;

/// Playlist truncation limit.
const PLAYLIST_LIMIT: usize = 25;

/// Presentational identity stamped onto every emitted record.
#[derive(Debug, Clone)]
pub struct Branding {
    /// Identifier the playback layer routes per-entry results back to.
    pub skill_id: String,

    /// Icon locator, also the background for aggregate records.
    pub skill_icon: String,

    /// Display title of the fallback playlist.
    pub playlist_title: String,

    /// Provider name shown as the playlist author.
    pub playlist_author: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            skill_id: "kinescope.retrotv".to_string(),
            skill_icon: "ui/retrotv_icon.jpg".to_string(),
            playlist_title: "Retro TV (Movie Playlist)".to_string(),
            playlist_author: "RetroTV".to_string(),
        }
    }
}

/// Scores queries against a catalog snapshot.
///
/// Holds the snapshot taken at construction time; a resync that lands
/// between queries is picked up by building a new `CatalogSearch` over
/// the refreshed catalog.
#[derive(Debug)]
pub struct CatalogSearch {
    catalog: Vec<CatalogEntry>,
    branding: Branding,
}

/// One emitted record: either a per-entry match or the aggregate
/// playlist. Untagged so each side serializes to its own wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchResult {
    Media(MediaResult),
    Playlist(PlaylistResult),
}

/// The ranked result sequence for one query.
///
/// Finite (bounded by catalog size plus at most one playlist), emitted
/// incrementally, and single-pass: once exhausted it yields nothing
/// further. The candidate set is built eagerly at scoring time, so the
/// sequence is unaffected by catalog changes after the call.
#[derive(Debug)]
pub struct SearchResults {
    media: std::vec::IntoIter<MediaResult>,
    playlist: Option<PlaylistResult>,
}

impl Iterator for SearchResults {
    type Item = SearchResult;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(media) = self.media.next() {
            return Some(SearchResult::Media(media));
        }
        self.playlist.take().map(SearchResult::Playlist)
    }
}

impl CatalogSearch {
    #[must_use]
    pub fn new(catalog: Vec<CatalogEntry>, branding: Branding) -> Self {
        Self { catalog, branding }
    }

    /// Score one query and rank its results.
    ///
    /// Total over its inputs: an off-type query is penalized, not
    /// rejected, and a query matching nothing yields an empty sequence
    /// rather than an error. Confidence accumulates unclamped and is
    /// clamped to 100 only at emission.
    pub fn search(&self, media_type: MediaType, entities: &MatchedEntities) -> SearchResults {
        let mut score = if media_type == MediaType::Movie {
            MEDIA_TYPE_BONUS
        } else {
            0
        };
        score += ENTITY_BONUS * entities.match_count() as u8;

        let mut media = Vec::new();
        if let Some(name) = entities.movie_name.as_deref() {
            score += TITLE_MATCH_BONUS;
            let needle = name.to_lowercase();
            let confidence = score.min(100);

            for entry in &self.catalog {
                if entry.title.to_lowercase().contains(&needle) {
                    media.push(self.media_result(entry, confidence));
                }
            }
            tracing::debug!("Title \"{name}\" matched {} catalog entries", media.len());
        }

        // The provider name matching means "this provider handles movies
        // in general": the catch-all playlist is emitted after every
        // specific title match, independent of whether any were found.
        let playlist = entities
            .movie_streaming_provider
            .is_some()
            .then(|| self.playlist(PLAYLIST_CONFIDENCE, PLAYLIST_LIMIT));

        SearchResults {
            media: media.into_iter(),
            playlist,
        }
    }

    /// Every catalog entry as a fixed-confidence featured record, in
    /// catalog iteration order.
    #[must_use]
    pub fn featured_media(&self) -> Vec<MediaResult> {
        self.catalog
            .iter()
            .map(|entry| self.media_result(entry, FEATURED_CONFIDENCE))
            .collect()
    }

    /// The fallback playlist: the first `limit` featured entries bundled
    /// under a flat provider-level confidence, decoupled from the
    /// per-entry confidences inside it.
    #[must_use]
    pub fn playlist(&self, confidence: u8, limit: usize) -> PlaylistResult {
        let mut entries = self.featured_media();
        entries.truncate(limit);

        PlaylistResult {
            title: self.branding.playlist_title.clone(),
            author: self.branding.playlist_author.clone(),
            match_confidence: confidence,
            media_type: MediaType::Movie,
            playlist: entries,
            playback: PlaybackType::Video,
            skill_icon: self.branding.skill_icon.clone(),
            image: self.branding.skill_icon.clone(),
            bg_image: self.branding.skill_icon.clone(),
        }
    }

    fn media_result(&self, entry: &CatalogEntry, confidence: u8) -> MediaResult {
        MediaResult {
            title: entry.title.clone(),
            author: entry.author.clone(),
            match_confidence: confidence,
            media_type: MediaType::Movie,
            uri: format!("{STREAM_PREFIX}{}", entry.url),
            playback: PlaybackType::Video,
            skill_icon: self.branding.skill_icon.clone(),
            skill_id: self.branding.skill_id.clone(),
            image: entry.thumbnail.clone(),
            bg_image: entry.thumbnail.clone(),
        }
    }
}
