use serde::{Deserialize, Serialize};

/// A season of a series, ordered by `season_number` within its parent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Season {
    pub id: String,
    pub series_id: String,
    pub season_number: u32,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub release_year: u32,
    pub episodes: Vec<Episode>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Episode {
    pub id: String,
    pub season_id: String,
    pub episode_number: u32,
    pub title: String,
    pub description: String,
    pub duration_minutes: u32,
    pub thumbnail_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}
