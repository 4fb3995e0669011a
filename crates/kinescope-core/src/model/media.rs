use serde::{Deserialize, Serialize};

/// The broad media category a query or result belongs to.
///
/// Only [`MediaType::Movie`] is supported by the scorer; the other
/// variants exist so off-type queries are expressible and can still be
/// scored (at a penalty) rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Generic,
    Music,
    Video,
    Movie,
}

/// How a result is expected to be played back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackType {
    Audio,
    Video,
}
