use catalog_models::{Content, ContentType, Season, WatchHistory};
use catalog_store::{ContentRepository, StoreError, UserRepository};
use serde::Serialize;

use crate::session::Session;
use crate::similar::similar_contents;

pub const SIMILAR_LIMIT: usize = 8;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DetailView {
    pub content: Content,
    /// Present for series only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasons: Option<Vec<Season>>,
    pub similar: Vec<Content>,
    pub is_in_watchlist: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_progress: Option<WatchHistory>,
}

pub async fn detail_view<S>(
    store: &S,
    session: &Session,
    content_id: &str,
) -> Result<DetailView, StoreError>
where
    S: ContentRepository + UserRepository,
{
    let content = store.content_by_id(content_id).await?;
    let catalog = store.all_content().await?;

    let seasons = if content.content_type == ContentType::Series {
        Some(store.seasons(content_id).await?)
    } else {
        None
    };

    let is_in_watchlist = store
        .is_in_watchlist(&session.profile_id, content_id)
        .await?;
    let watch_progress = store
        .watch_progress(&session.profile_id, content_id)
        .await?;

    Ok(DetailView {
        similar: similar_contents(&catalog, &content, SIMILAR_LIMIT),
        content,
        seasons,
        is_in_watchlist,
        watch_progress,
    })
}
