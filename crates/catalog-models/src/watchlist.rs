use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One saved title on a profile's list; (profile_id, content_id) is unique
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchlistItem {
    pub id: String,
    pub profile_id: String,
    pub content_id: String,
    pub added_at: DateTime<Utc>,
}
