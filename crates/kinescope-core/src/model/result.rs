use serde::{Deserialize, Serialize};

use crate::model::{MediaType, PlaybackType};

/// A ranked per-entry result record.
///
/// Ephemeral: constructed per query, never persisted. Field names are the
/// wire names the playback front end consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaResult {
    pub title: String,
    pub author: String,

    /// Heuristic 0-100 score, not a calibrated probability.
    pub match_confidence: u8,

    pub media_type: MediaType,

    /// Playable URI, scheme-prefixed for the playback layer.
    pub uri: String,

    pub playback: PlaybackType,
    pub skill_icon: String,
    pub skill_id: String,
    pub image: String,
    pub bg_image: String,
}

/// An aggregate playlist result bundling multiple entries under one
/// provider-level confidence.
///
/// The aggregate confidence is deliberately decoupled from the per-entry
/// confidences inside `playlist`; the two paths assign scores
/// independently and no normalization reconciles them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistResult {
    pub title: String,
    pub author: String,
    pub match_confidence: u8,
    pub media_type: MediaType,
    pub playlist: Vec<MediaResult>,
    pub playback: PlaybackType,
    pub skill_icon: String,
    pub image: String,
    pub bg_image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media_result() -> MediaResult {
        MediaResult {
            title: "Sherlock Holmes | Full Movie".to_string(),
            author: "Retro Central".to_string(),
            match_confidence: 75,
            media_type: MediaType::Movie,
            uri: "youtube//https://youtube.com/watch?v=abc".to_string(),
            playback: PlaybackType::Video,
            skill_icon: "retrotv_icon.jpg".to_string(),
            skill_id: "kinescope".to_string(),
            image: "thumb.jpg".to_string(),
            bg_image: "thumb.jpg".to_string(),
        }
    }

    #[test]
    fn test_media_result_wire_shape() {
        let value = serde_json::to_value(media_result()).unwrap();
        assert_eq!(value["match_confidence"], 75);
        assert_eq!(value["media_type"], "movie");
        assert_eq!(value["playback"], "video");
        assert!(value["uri"].as_str().unwrap().starts_with("youtube//"));
        assert!(value.get("playlist").is_none());
    }

    #[test]
    fn test_playlist_result_wire_shape() {
        let playlist = PlaylistResult {
            title: "Retro TV (Movie Playlist)".to_string(),
            author: "RetroTV".to_string(),
            match_confidence: 50,
            media_type: MediaType::Movie,
            playlist: vec![media_result()],
            playback: PlaybackType::Video,
            skill_icon: "retrotv_icon.jpg".to_string(),
            image: "retrotv_icon.jpg".to_string(),
            bg_image: "retrotv_icon.jpg".to_string(),
        };
        let value = serde_json::to_value(playlist).unwrap();
        assert_eq!(value["match_confidence"], 50);
        assert_eq!(value["playlist"].as_array().unwrap().len(), 1);
        // Aggregate records carry no skill_id, per-entry records do.
        assert!(value.get("skill_id").is_none());
        assert_eq!(value["playlist"][0]["skill_id"], "kinescope");
    }
}
