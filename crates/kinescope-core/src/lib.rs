//! Core domain model for kinescope.
//!
//! This crate defines the catalog data model (entries, media types,
//! matched entities, result records, keyword vocabularies) and the
//! SQLite-backed catalog store.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod model;
pub mod schema;

pub use error::{Error, Result};
