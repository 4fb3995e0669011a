use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog store error: {0}")]
    Store(#[from] kinescope_core::Error),
}

pub type SyncResult<T> = std::result::Result<T, SyncError>;
