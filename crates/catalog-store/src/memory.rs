use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use catalog_models::{
    Content, ContentRating, Genre, Language, MaturityLevel, NotificationSettings,
    PlaybackSettings, Season, SubscriptionDetails, SubscriptionPlan, User, UserProfile,
    WatchHistory, WatchlistItem,
};
use chrono::Utc;
use tracing::debug;

use crate::error::{EntityKind, StoreError};
use crate::traits::{
    AccountRepository, ContentRepository, EpisodePointer, NewProfile, NotificationPatch,
    PlaybackPatch, ProfilePatch, UserRepository,
};
use crate::MAX_PROFILES;

const MAX_RECENT_SEARCHES: usize = 10;
const MAX_PROFILE_NAME_LEN: usize = 50;

/// Everything the catalog holds for the lifetime of the process
#[derive(Debug, Default)]
pub struct CatalogState {
    pub contents: Vec<Content>,
    pub genres: Vec<Genre>,
    pub seasons: HashMap<String, Vec<Season>>,
    pub users: Vec<User>,
    pub profiles: Vec<UserProfile>,
    pub watchlist: Vec<WatchlistItem>,
    pub history: Vec<WatchHistory>,
    pub notification_settings: HashMap<String, NotificationSettings>,
    pub playback_settings: HashMap<String, PlaybackSettings>,
    pub recent_searches: Vec<String>,
    pub featured_id: Option<String>,
}

/// In-memory catalog backend. Stands in for a real database; every call
/// sleeps for a small configurable latency to mimic a remote round trip.
pub struct MemoryCatalog {
    state: RwLock<CatalogState>,
    latency: Duration,
    next_id: AtomicU64,
}

impl MemoryCatalog {
    pub fn new(state: CatalogState) -> Self {
        Self {
            state: RwLock::new(state),
            latency: Duration::ZERO,
            next_id: AtomicU64::new(1),
        }
    }

    /// Catalog preloaded with the demo data set
    pub fn seeded() -> Self {
        Self::new(crate::seed::demo_catalog())
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn generate_id(&self, prefix: &str) -> String {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", prefix, n)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, CatalogState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, CatalogState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}

fn validate_profile_name(name: &str) -> Result<String, StoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidProfileName(
            "name must not be empty".to_string(),
        ));
    }
    if trimmed.chars().count() > MAX_PROFILE_NAME_LEN {
        return Err(StoreError::InvalidProfileName(format!(
            "name must be at most {} characters",
            MAX_PROFILE_NAME_LEN
        )));
    }
    Ok(trimmed.to_string())
}

#[async_trait]
impl ContentRepository for MemoryCatalog {
    async fn all_content(&self) -> Result<Vec<Content>, StoreError> {
        self.simulate_latency().await;
        Ok(self.read().contents.clone())
    }

    async fn content_by_id(&self, id: &str) -> Result<Content, StoreError> {
        self.simulate_latency().await;
        self.read()
            .contents
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(EntityKind::Content, id))
    }

    async fn genres(&self) -> Result<Vec<Genre>, StoreError> {
        self.simulate_latency().await;
        Ok(self.read().genres.clone())
    }

    async fn seasons(&self, series_id: &str) -> Result<Vec<Season>, StoreError> {
        self.simulate_latency().await;
        let mut seasons = self
            .read()
            .seasons
            .get(series_id)
            .cloned()
            .unwrap_or_default();
        seasons.sort_by_key(|s| s.season_number);
        for season in &mut seasons {
            season.episodes.sort_by_key(|e| e.episode_number);
        }
        Ok(seasons)
    }

    async fn featured(&self) -> Result<Content, StoreError> {
        self.simulate_latency().await;
        let state = self.read();
        let id = state
            .featured_id
            .clone()
            .or_else(|| state.contents.first().map(|c| c.id.clone()))
            .ok_or_else(|| StoreError::not_found(EntityKind::Content, "featured"))?;
        state
            .contents
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(EntityKind::Content, id))
    }

    async fn recent_searches(&self) -> Result<Vec<String>, StoreError> {
        self.simulate_latency().await;
        Ok(self.read().recent_searches.clone())
    }

    async fn record_search(&self, query: &str) -> Result<(), StoreError> {
        self.simulate_latency().await;
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        let mut state = self.write();
        state
            .recent_searches
            .retain(|q| !q.eq_ignore_ascii_case(trimmed));
        state.recent_searches.insert(0, trimmed.to_string());
        state.recent_searches.truncate(MAX_RECENT_SEARCHES);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryCatalog {
    async fn current_user(&self) -> Result<User, StoreError> {
        self.simulate_latency().await;
        self.read()
            .users
            .first()
            .cloned()
            .ok_or_else(|| StoreError::not_found(EntityKind::User, "current"))
    }

    async fn profiles(&self) -> Result<Vec<UserProfile>, StoreError> {
        self.simulate_latency().await;
        Ok(self.read().profiles.clone())
    }

    async fn profile_by_id(&self, profile_id: &str) -> Result<UserProfile, StoreError> {
        self.simulate_latency().await;
        self.read()
            .profiles
            .iter()
            .find(|p| p.id == profile_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(EntityKind::Profile, profile_id))
    }

    async fn create_profile(&self, new: NewProfile) -> Result<UserProfile, StoreError> {
        self.simulate_latency().await;
        let name = validate_profile_name(&new.name)?;
        let mut state = self.write();
        if state.profiles.len() >= MAX_PROFILES {
            return Err(StoreError::ProfileLimit);
        }
        let user_id = state
            .users
            .first()
            .map(|u| u.id.clone())
            .ok_or_else(|| StoreError::not_found(EntityKind::User, "current"))?;
        let profile = UserProfile {
            id: self.generate_id("profile"),
            user_id,
            name,
            avatar_url: new.avatar_url,
            avatar_color: new.avatar_color,
            is_kids_profile: new.is_kids_profile,
            language: "en".to_string(),
            // Kids profiles start locked to all-children content with previews off
            maturity_level: if new.is_kids_profile {
                ContentRating::TvY
            } else {
                ContentRating::TvMa
            },
            auto_play_next: true,
            auto_play_previews: !new.is_kids_profile,
        };
        debug!(profile_id = %profile.id, kids = profile.is_kids_profile, "created profile");
        state.profiles.push(profile.clone());
        Ok(profile)
    }

    async fn update_profile(
        &self,
        profile_id: &str,
        patch: ProfilePatch,
    ) -> Result<UserProfile, StoreError> {
        self.simulate_latency().await;
        let name = patch.name.as_deref().map(validate_profile_name).transpose()?;
        let mut state = self.write();
        let profile = state
            .profiles
            .iter_mut()
            .find(|p| p.id == profile_id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Profile, profile_id))?;
        if let Some(name) = name {
            profile.name = name;
        }
        if let Some(avatar_url) = patch.avatar_url {
            profile.avatar_url = avatar_url;
        }
        if let Some(avatar_color) = patch.avatar_color {
            profile.avatar_color = avatar_color;
        }
        if let Some(language) = patch.language {
            profile.language = language;
        }
        if let Some(maturity_level) = patch.maturity_level {
            profile.maturity_level = maturity_level;
        }
        if let Some(is_kids) = patch.is_kids_profile {
            profile.is_kids_profile = is_kids;
        }
        Ok(profile.clone())
    }

    async fn delete_profile(&self, profile_id: &str) -> Result<(), StoreError> {
        self.simulate_latency().await;
        let mut state = self.write();
        let index = state
            .profiles
            .iter()
            .position(|p| p.id == profile_id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Profile, profile_id))?;
        if state.profiles.len() <= 1 {
            return Err(StoreError::LastProfile);
        }
        state.profiles.remove(index);
        // Per-profile watch state goes with the profile
        state.watchlist.retain(|w| w.profile_id != profile_id);
        state.history.retain(|h| h.profile_id != profile_id);
        state.notification_settings.remove(profile_id);
        state.playback_settings.remove(profile_id);
        debug!(profile_id, "deleted profile");
        Ok(())
    }

    async fn watchlist(&self, profile_id: &str) -> Result<Vec<WatchlistItem>, StoreError> {
        self.simulate_latency().await;
        let mut items: Vec<WatchlistItem> = self
            .read()
            .watchlist
            .iter()
            .filter(|w| w.profile_id == profile_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.added_at.cmp(&a.added_at));
        Ok(items)
    }

    async fn is_in_watchlist(
        &self,
        profile_id: &str,
        content_id: &str,
    ) -> Result<bool, StoreError> {
        self.simulate_latency().await;
        Ok(self
            .read()
            .watchlist
            .iter()
            .any(|w| w.profile_id == profile_id && w.content_id == content_id))
    }

    async fn add_to_watchlist(
        &self,
        profile_id: &str,
        content_id: &str,
    ) -> Result<WatchlistItem, StoreError> {
        self.simulate_latency().await;
        let mut state = self.write();
        if let Some(existing) = state
            .watchlist
            .iter()
            .find(|w| w.profile_id == profile_id && w.content_id == content_id)
        {
            return Ok(existing.clone());
        }
        if !state.contents.iter().any(|c| c.id == content_id) {
            return Err(StoreError::not_found(EntityKind::Content, content_id));
        }
        let item = WatchlistItem {
            id: self.generate_id("wl"),
            profile_id: profile_id.to_string(),
            content_id: content_id.to_string(),
            added_at: Utc::now(),
        };
        debug!(profile_id, content_id, "added to watchlist");
        state.watchlist.push(item.clone());
        Ok(item)
    }

    async fn remove_from_watchlist(
        &self,
        profile_id: &str,
        content_id: &str,
    ) -> Result<(), StoreError> {
        self.simulate_latency().await;
        let mut state = self.write();
        let before = state.watchlist.len();
        state
            .watchlist
            .retain(|w| !(w.profile_id == profile_id && w.content_id == content_id));
        if state.watchlist.len() < before {
            debug!(profile_id, content_id, "removed from watchlist");
        }
        Ok(())
    }

    async fn toggle_watchlist(
        &self,
        profile_id: &str,
        content_id: &str,
    ) -> Result<bool, StoreError> {
        if self.is_in_watchlist(profile_id, content_id).await? {
            self.remove_from_watchlist(profile_id, content_id).await?;
            Ok(false)
        } else {
            self.add_to_watchlist(profile_id, content_id).await?;
            Ok(true)
        }
    }

    async fn watch_history(&self, profile_id: &str) -> Result<Vec<WatchHistory>, StoreError> {
        self.simulate_latency().await;
        let mut entries: Vec<WatchHistory> = self
            .read()
            .history
            .iter()
            .filter(|h| h.profile_id == profile_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.watched_at.cmp(&a.watched_at));
        Ok(entries)
    }

    async fn continue_watching(&self, profile_id: &str) -> Result<Vec<WatchHistory>, StoreError> {
        let entries = self.watch_history(profile_id).await?;
        Ok(entries.into_iter().filter(|h| h.is_in_progress()).collect())
    }

    async fn watch_progress(
        &self,
        profile_id: &str,
        content_id: &str,
    ) -> Result<Option<WatchHistory>, StoreError> {
        self.simulate_latency().await;
        Ok(self
            .read()
            .history
            .iter()
            .find(|h| h.profile_id == profile_id && h.content_id == content_id)
            .cloned())
    }

    async fn upsert_progress(
        &self,
        profile_id: &str,
        content_id: &str,
        progress: u8,
        episode: Option<EpisodePointer>,
    ) -> Result<WatchHistory, StoreError> {
        self.simulate_latency().await;
        let progress = progress.min(100);
        let mut state = self.write();
        if let Some(existing) = state
            .history
            .iter_mut()
            .find(|h| h.profile_id == profile_id && h.content_id == content_id)
        {
            existing.progress = progress;
            existing.watched_at = Utc::now();
            if let Some(episode) = episode {
                existing.current_episode_id = episode.episode_id;
                existing.current_season_number = episode.season_number;
                existing.current_episode_number = episode.episode_number;
            }
            debug!(profile_id, content_id, progress, "updated watch progress");
            return Ok(existing.clone());
        }
        if !state.contents.iter().any(|c| c.id == content_id) {
            return Err(StoreError::not_found(EntityKind::Content, content_id));
        }
        let episode = episode.unwrap_or_default();
        let entry = WatchHistory {
            id: self.generate_id("wh"),
            profile_id: profile_id.to_string(),
            content_id: content_id.to_string(),
            watched_at: Utc::now(),
            progress,
            current_episode_id: episode.episode_id,
            current_season_number: episode.season_number,
            current_episode_number: episode.episode_number,
        };
        debug!(profile_id, content_id, progress, "created watch history");
        state.history.push(entry.clone());
        Ok(entry)
    }
}

#[async_trait]
impl AccountRepository for MemoryCatalog {
    async fn notification_settings(
        &self,
        profile_id: &str,
    ) -> Result<NotificationSettings, StoreError> {
        self.simulate_latency().await;
        Ok(self
            .read()
            .notification_settings
            .get(profile_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn update_notification_settings(
        &self,
        profile_id: &str,
        patch: NotificationPatch,
    ) -> Result<NotificationSettings, StoreError> {
        self.simulate_latency().await;
        let mut state = self.write();
        let settings = state
            .notification_settings
            .entry(profile_id.to_string())
            .or_default();
        if let Some(v) = patch.email_notifications {
            settings.email_notifications = v;
        }
        if let Some(v) = patch.push_notifications {
            settings.push_notifications = v;
        }
        if let Some(v) = patch.new_releases {
            settings.new_releases = v;
        }
        if let Some(v) = patch.recommendations {
            settings.recommendations = v;
        }
        if let Some(v) = patch.account_updates {
            settings.account_updates = v;
        }
        Ok(settings.clone())
    }

    async fn playback_settings(&self, profile_id: &str) -> Result<PlaybackSettings, StoreError> {
        self.simulate_latency().await;
        Ok(self
            .read()
            .playback_settings
            .get(profile_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn update_playback_settings(
        &self,
        profile_id: &str,
        patch: PlaybackPatch,
    ) -> Result<PlaybackSettings, StoreError> {
        self.simulate_latency().await;
        let mut state = self.write();
        let settings = state
            .playback_settings
            .entry(profile_id.to_string())
            .or_default();
        if let Some(v) = patch.auto_play_next {
            settings.auto_play_next = v;
        }
        if let Some(v) = patch.auto_play_previews {
            settings.auto_play_previews = v;
        }
        if let Some(v) = patch.data_usage {
            settings.data_usage = v;
        }
        if let Some(v) = patch.download_quality {
            settings.download_quality = v;
        }
        Ok(settings.clone())
    }

    async fn subscription_plans(&self) -> Result<Vec<SubscriptionDetails>, StoreError> {
        self.simulate_latency().await;
        Ok(crate::seed::subscription_plans())
    }

    async fn change_plan(&self, plan: SubscriptionPlan) -> Result<(), StoreError> {
        self.simulate_latency().await;
        let mut state = self.write();
        let user = state
            .users
            .first_mut()
            .ok_or_else(|| StoreError::not_found(EntityKind::User, "current"))?;
        user.subscription = plan;
        Ok(())
    }

    async fn languages(&self) -> Result<Vec<Language>, StoreError> {
        self.simulate_latency().await;
        Ok(crate::seed::languages())
    }

    async fn maturity_levels(&self) -> Result<Vec<MaturityLevel>, StoreError> {
        self.simulate_latency().await;
        Ok(crate::seed::maturity_levels())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MemoryCatalog {
        MemoryCatalog::seeded()
    }

    fn first_profile_id(catalog: &MemoryCatalog) -> String {
        catalog.read().profiles[0].id.clone()
    }

    fn some_content_id(catalog: &MemoryCatalog) -> String {
        catalog.read().contents[0].id.clone()
    }

    #[tokio::test]
    async fn add_to_watchlist_is_idempotent() {
        let catalog = catalog();
        let profile = first_profile_id(&catalog);
        let content = some_content_id(&catalog);

        let first = catalog.add_to_watchlist(&profile, &content).await.unwrap();
        let second = catalog.add_to_watchlist(&profile, &content).await.unwrap();
        assert_eq!(first.id, second.id);

        let items = catalog.watchlist(&profile).await.unwrap();
        let matching = items.iter().filter(|w| w.content_id == content).count();
        assert_eq!(matching, 1);
    }

    #[tokio::test]
    async fn toggle_watchlist_twice_restores_membership() {
        let catalog = catalog();
        let profile = first_profile_id(&catalog);
        let content = some_content_id(&catalog);

        let before = catalog.is_in_watchlist(&profile, &content).await.unwrap();
        let after_first = catalog.toggle_watchlist(&profile, &content).await.unwrap();
        assert_ne!(before, after_first);
        let after_second = catalog.toggle_watchlist(&profile, &content).await.unwrap();
        assert_eq!(before, after_second);
    }

    #[tokio::test]
    async fn remove_missing_watchlist_entry_is_a_no_op() {
        let catalog = catalog();
        let profile = first_profile_id(&catalog);
        let before = catalog.watchlist(&profile).await.unwrap().len();

        catalog
            .remove_from_watchlist(&profile, "not-on-the-list")
            .await
            .unwrap();
        assert_eq!(catalog.watchlist(&profile).await.unwrap().len(), before);
    }

    #[tokio::test]
    async fn watchlist_rejects_unknown_content() {
        let catalog = catalog();
        let profile = first_profile_id(&catalog);
        let err = catalog
            .add_to_watchlist(&profile, "no-such-title")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn upsert_progress_creates_then_overwrites() {
        let catalog = catalog();
        let profile = first_profile_id(&catalog);
        let content = some_content_id(&catalog);

        let created = catalog
            .upsert_progress(&profile, &content, 30, None)
            .await
            .unwrap();
        assert_eq!(created.progress, 30);

        let updated = catalog
            .upsert_progress(&profile, &content, 80, None)
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.progress, 80);

        let entries = catalog.watch_history(&profile).await.unwrap();
        let matching = entries.iter().filter(|h| h.content_id == content).count();
        assert_eq!(matching, 1);
    }

    #[tokio::test]
    async fn upsert_progress_rejects_unknown_content() {
        let catalog = catalog();
        let profile = first_profile_id(&catalog);
        let err = catalog
            .upsert_progress(&profile, "no-such-title", 10, None)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn continue_watching_excludes_finished_and_unstarted() {
        let catalog = catalog();
        let profile = first_profile_id(&catalog);
        let ids: Vec<String> = catalog.read().contents[..3]
            .iter()
            .map(|c| c.id.clone())
            .collect();

        catalog.upsert_progress(&profile, &ids[0], 0, None).await.unwrap();
        catalog.upsert_progress(&profile, &ids[1], 55, None).await.unwrap();
        catalog.upsert_progress(&profile, &ids[2], 100, None).await.unwrap();

        let in_progress = catalog.continue_watching(&profile).await.unwrap();
        assert!(in_progress.iter().any(|h| h.content_id == ids[1]));
        assert!(!in_progress.iter().any(|h| h.content_id == ids[0]));
        assert!(!in_progress.iter().any(|h| h.content_id == ids[2]));
    }

    #[tokio::test]
    async fn deleting_last_profile_is_rejected() {
        let catalog = catalog();
        let profiles = catalog.profiles().await.unwrap();
        for profile in profiles.iter().skip(1) {
            catalog.delete_profile(&profile.id).await.unwrap();
        }
        let last = &profiles[0];
        let err = catalog.delete_profile(&last.id).await.unwrap_err();
        assert_eq!(err, StoreError::LastProfile);
        assert_eq!(catalog.profiles().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn kids_profile_gets_locked_defaults() {
        let catalog = catalog();
        let profile = catalog
            .create_profile(NewProfile {
                name: "Junior".to_string(),
                avatar_url: "avatar://kids".to_string(),
                avatar_color: "#f5c518".to_string(),
                is_kids_profile: true,
            })
            .await
            .unwrap();
        assert_eq!(profile.maturity_level, ContentRating::TvY);
        assert!(!profile.auto_play_previews);
    }

    #[tokio::test]
    async fn profile_name_is_validated() {
        let catalog = catalog();
        let err = catalog
            .create_profile(NewProfile {
                name: "   ".to_string(),
                avatar_url: String::new(),
                avatar_color: String::new(),
                is_kids_profile: false,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidProfileName(_)));

        let err = catalog
            .create_profile(NewProfile {
                name: "x".repeat(51),
                avatar_url: String::new(),
                avatar_color: String::new(),
                is_kids_profile: false,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidProfileName(_)));
    }

    #[tokio::test]
    async fn profile_count_is_capped() {
        let catalog = catalog();
        let existing = catalog.profiles().await.unwrap().len();
        for i in existing..MAX_PROFILES {
            catalog
                .create_profile(NewProfile {
                    name: format!("Profile {}", i),
                    avatar_url: String::new(),
                    avatar_color: String::new(),
                    is_kids_profile: false,
                })
                .await
                .unwrap();
        }
        let err = catalog
            .create_profile(NewProfile {
                name: "One too many".to_string(),
                avatar_url: String::new(),
                avatar_color: String::new(),
                is_kids_profile: false,
            })
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::ProfileLimit);
    }

    #[tokio::test]
    async fn recent_searches_dedupe_and_cap() {
        let catalog = catalog();
        catalog.record_search("dune").await.unwrap();
        catalog.record_search("alien").await.unwrap();
        catalog.record_search("Dune").await.unwrap();

        let recent = catalog.recent_searches().await.unwrap();
        assert_eq!(recent[0], "Dune");
        assert_eq!(recent.iter().filter(|q| q.eq_ignore_ascii_case("dune")).count(), 1);

        for i in 0..20 {
            catalog.record_search(&format!("query {}", i)).await.unwrap();
        }
        assert_eq!(catalog.recent_searches().await.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn seasons_come_back_ordered() {
        let catalog = catalog();
        let series_id = catalog
            .read()
            .seasons
            .keys()
            .next()
            .cloned()
            .expect("seed has at least one series");
        let seasons = catalog.seasons(&series_id).await.unwrap();
        assert!(!seasons.is_empty());
        for pair in seasons.windows(2) {
            assert!(pair[0].season_number <= pair[1].season_number);
        }
    }
}
