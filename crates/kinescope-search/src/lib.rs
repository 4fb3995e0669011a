//! Keyword extraction and query scoring for kinescope.
//!
//! Turns noisy catalog titles into entity-matching vocabularies and
//! scores matched entities into a ranked result sequence for the
//! playback front end.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod extract;
pub mod score;

pub use extract::{catalog_vocabularies, title_keywords, FILM_GENRES, PROVIDER_NAMES};
pub use score::{Branding, CatalogSearch, SearchResult, SearchResults};
