use catalog_models::{Language, MaturityLevel, UserProfile};
use catalog_store::{AccountRepository, StoreError, UserRepository, MAX_PROFILES};
use serde::Serialize;

use crate::session::Session;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProfileSelectView {
    pub profiles: Vec<UserProfile>,
    pub current_profile_id: String,
    pub can_add_profile: bool,
    pub max_profiles: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProfileEditView {
    pub profile: UserProfile,
    pub available_languages: Vec<Language>,
    pub maturity_levels: Vec<MaturityLevel>,
}

pub async fn profile_select_view<S: UserRepository + ?Sized>(
    store: &S,
    session: &Session,
) -> Result<ProfileSelectView, StoreError> {
    let profiles = store.profiles().await?;
    Ok(ProfileSelectView {
        can_add_profile: profiles.len() < MAX_PROFILES,
        profiles,
        current_profile_id: session.profile_id.clone(),
        max_profiles: MAX_PROFILES,
    })
}

pub async fn profile_edit_view<S>(
    store: &S,
    profile_id: &str,
) -> Result<ProfileEditView, StoreError>
where
    S: UserRepository + AccountRepository,
{
    let profile = store.profile_by_id(profile_id).await?;
    let available_languages = store.languages().await?;
    let maturity_levels = store.maturity_levels().await?;
    Ok(ProfileEditView {
        profile,
        available_languages,
        maturity_levels,
    })
}

/// Switch the session to the given profile, validating it exists first
pub async fn select_profile<S: UserRepository + ?Sized>(
    store: &S,
    profile_id: &str,
) -> Result<Session, StoreError> {
    let profile = store.profile_by_id(profile_id).await?;
    Ok(Session::new(profile.id))
}

/// Delete a profile and report the session to continue with. Deleting the
/// active profile falls back to the first remaining one.
pub async fn delete_profile<S: UserRepository + ?Sized>(
    store: &S,
    session: &Session,
    profile_id: &str,
) -> Result<Session, StoreError> {
    store.delete_profile(profile_id).await?;
    if session.profile_id != profile_id {
        return Ok(session.clone());
    }
    let remaining = store.profiles().await?;
    match remaining.first() {
        Some(fallback) => Ok(Session::new(fallback.id.clone())),
        // Unreachable while the store enforces the last-profile guard
        None => Err(StoreError::LastProfile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_store::MemoryCatalog;

    #[tokio::test]
    async fn select_view_reports_capacity() {
        let catalog = MemoryCatalog::seeded();
        let session = Session::new("profile-1");
        let view = profile_select_view(&catalog, &session).await.unwrap();
        assert_eq!(view.current_profile_id, "profile-1");
        assert_eq!(view.max_profiles, MAX_PROFILES);
        assert_eq!(view.can_add_profile, view.profiles.len() < MAX_PROFILES);
    }

    #[tokio::test]
    async fn selecting_unknown_profile_fails() {
        let catalog = MemoryCatalog::seeded();
        let err = select_profile(&catalog, "profile-404").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn deleting_active_profile_falls_back_to_first_remaining() {
        let catalog = MemoryCatalog::seeded();
        let session = Session::new("profile-1");
        let next = delete_profile(&catalog, &session, "profile-1").await.unwrap();

        let remaining = catalog.profiles().await.unwrap();
        assert_eq!(next.profile_id, remaining[0].id);
        assert_ne!(next.profile_id, "profile-1");
    }

    #[tokio::test]
    async fn deleting_another_profile_keeps_the_session() {
        let catalog = MemoryCatalog::seeded();
        let session = Session::new("profile-1");
        let next = delete_profile(&catalog, &session, "profile-2").await.unwrap();
        assert_eq!(next, session);
    }

    #[tokio::test]
    async fn edit_view_offers_languages_and_maturity_levels() {
        let catalog = MemoryCatalog::seeded();
        let view = profile_edit_view(&catalog, "profile-3").await.unwrap();
        assert!(view.profile.is_kids_profile);
        assert!(!view.available_languages.is_empty());
        assert!(!view.maturity_levels.is_empty());
    }
}
