use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Playback record for a profile/title pair; (profile_id, content_id) is unique
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchHistory {
    pub id: String,
    pub profile_id: String,
    pub content_id: String,
    pub watched_at: DateTime<Utc>,
    pub progress: u8, // percentage 0-100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_episode_id: Option<String>, // for series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_season_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_episode_number: Option<u32>,
}

impl WatchHistory {
    /// Continue-watching means started but not finished
    pub fn is_in_progress(&self) -> bool {
        self.progress > 0 && self.progress < 100
    }
}
