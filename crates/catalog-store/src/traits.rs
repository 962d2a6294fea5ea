use async_trait::async_trait;
use catalog_models::{
    Content, ContentRating, Genre, Language, MaturityLevel, NotificationSettings,
    PlaybackSettings, Season, SubscriptionDetails, SubscriptionPlan, User, UserProfile,
    WatchHistory, WatchlistItem,
};

use crate::error::StoreError;

/// Read access to the catalog itself. The filter/sort/paginate pipeline sits
/// on top of these raw reads; the store never pre-shapes results for a page.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn all_content(&self) -> Result<Vec<Content>, StoreError>;
    async fn content_by_id(&self, id: &str) -> Result<Content, StoreError>;
    async fn genres(&self) -> Result<Vec<Genre>, StoreError>;

    /// Seasons of a series, ordered by season number. Empty for non-series ids.
    async fn seasons(&self, series_id: &str) -> Result<Vec<Season>, StoreError>;

    /// The title promoted to the hero slot
    async fn featured(&self) -> Result<Content, StoreError>;

    async fn recent_searches(&self) -> Result<Vec<String>, StoreError>;
    async fn record_search(&self, query: &str) -> Result<(), StoreError>;
}

/// Profiles plus the per-profile watch state (list and history)
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn current_user(&self) -> Result<User, StoreError>;
    async fn profiles(&self) -> Result<Vec<UserProfile>, StoreError>;
    async fn profile_by_id(&self, profile_id: &str) -> Result<UserProfile, StoreError>;
    async fn create_profile(&self, new: NewProfile) -> Result<UserProfile, StoreError>;
    async fn update_profile(
        &self,
        profile_id: &str,
        patch: ProfilePatch,
    ) -> Result<UserProfile, StoreError>;

    /// Rejected with `LastProfile` when it would leave zero profiles
    async fn delete_profile(&self, profile_id: &str) -> Result<(), StoreError>;

    async fn watchlist(&self, profile_id: &str) -> Result<Vec<WatchlistItem>, StoreError>;
    async fn is_in_watchlist(
        &self,
        profile_id: &str,
        content_id: &str,
    ) -> Result<bool, StoreError>;

    /// Idempotent: adding an already-listed title returns the existing entry
    async fn add_to_watchlist(
        &self,
        profile_id: &str,
        content_id: &str,
    ) -> Result<WatchlistItem, StoreError>;

    /// Silent no-op when the pair is not present
    async fn remove_from_watchlist(
        &self,
        profile_id: &str,
        content_id: &str,
    ) -> Result<(), StoreError>;

    /// Returns the membership state after the flip
    async fn toggle_watchlist(
        &self,
        profile_id: &str,
        content_id: &str,
    ) -> Result<bool, StoreError>;

    async fn watch_history(&self, profile_id: &str) -> Result<Vec<WatchHistory>, StoreError>;
    async fn continue_watching(&self, profile_id: &str) -> Result<Vec<WatchHistory>, StoreError>;
    async fn watch_progress(
        &self,
        profile_id: &str,
        content_id: &str,
    ) -> Result<Option<WatchHistory>, StoreError>;

    /// Upsert by (profile, content): creates on first report, overwrites
    /// progress/timestamp/episode pointers afterwards
    async fn upsert_progress(
        &self,
        profile_id: &str,
        content_id: &str,
        progress: u8,
        episode: Option<EpisodePointer>,
    ) -> Result<WatchHistory, StoreError>;
}

/// Account-level settings and subscription management
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn notification_settings(
        &self,
        profile_id: &str,
    ) -> Result<NotificationSettings, StoreError>;
    async fn update_notification_settings(
        &self,
        profile_id: &str,
        patch: NotificationPatch,
    ) -> Result<NotificationSettings, StoreError>;

    async fn playback_settings(&self, profile_id: &str) -> Result<PlaybackSettings, StoreError>;
    async fn update_playback_settings(
        &self,
        profile_id: &str,
        patch: PlaybackPatch,
    ) -> Result<PlaybackSettings, StoreError>;

    async fn subscription_plans(&self) -> Result<Vec<SubscriptionDetails>, StoreError>;
    async fn change_plan(&self, plan: SubscriptionPlan) -> Result<(), StoreError>;

    async fn languages(&self) -> Result<Vec<Language>, StoreError>;
    async fn maturity_levels(&self) -> Result<Vec<MaturityLevel>, StoreError>;
}

#[derive(Debug, Clone)]
pub struct NewProfile {
    pub name: String,
    pub avatar_url: String,
    pub avatar_color: String,
    pub is_kids_profile: bool,
}

/// Partial profile update; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub avatar_color: Option<String>,
    pub language: Option<String>,
    pub maturity_level: Option<ContentRating>,
    pub is_kids_profile: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct EpisodePointer {
    pub episode_id: Option<String>,
    pub season_number: Option<u32>,
    pub episode_number: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationPatch {
    pub email_notifications: Option<bool>,
    pub push_notifications: Option<bool>,
    pub new_releases: Option<bool>,
    pub recommendations: Option<bool>,
    pub account_updates: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct PlaybackPatch {
    pub auto_play_next: Option<bool>,
    pub auto_play_previews: Option<bool>,
    pub data_usage: Option<catalog_models::DataUsage>,
    pub download_quality: Option<catalog_models::DownloadQuality>,
}
