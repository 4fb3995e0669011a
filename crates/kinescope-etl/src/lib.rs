//! Remote catalog sync for kinescope.
//!
//! Fetches the bootstrap catalog document, validates and merges it into
//! the local store, and reschedules itself on a jittered interval.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod remote;
pub mod sync;

pub use config::Config;
pub use error::{SyncError, SyncResult};
pub use remote::{CatalogClient, RemoteEntry};
pub use sync::{sync_catalog, SyncScheduler};
