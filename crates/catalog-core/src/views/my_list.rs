use catalog_models::{Content, WatchlistItem};
use catalog_store::{ContentRepository, StoreError, UserRepository};
use serde::Serialize;

use crate::session::Session;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MyListEntry {
    pub item: WatchlistItem,
    pub content: Content,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MyListView {
    pub items: Vec<MyListEntry>,
    pub total_count: usize,
}

pub async fn my_list_view<S>(store: &S, session: &Session) -> Result<MyListView, StoreError>
where
    S: ContentRepository + UserRepository,
{
    let catalog = store.all_content().await?;
    let items: Vec<MyListEntry> = store
        .watchlist(&session.profile_id)
        .await?
        .into_iter()
        .filter_map(|item| {
            catalog
                .iter()
                .find(|c| c.id == item.content_id)
                .cloned()
                .map(|content| MyListEntry { item, content })
        })
        .collect();

    Ok(MyListView {
        total_count: items.len(),
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_store::MemoryCatalog;

    #[tokio::test]
    async fn entries_are_enriched_and_newest_first() {
        let catalog = MemoryCatalog::seeded();
        let session = Session::new("profile-1");
        let view = my_list_view(&catalog, &session).await.unwrap();

        assert_eq!(view.total_count, view.items.len());
        assert!(view.total_count > 0);
        for entry in &view.items {
            assert_eq!(entry.item.content_id, entry.content.id);
            assert_eq!(entry.item.profile_id, "profile-1");
        }
        for pair in view.items.windows(2) {
            assert!(pair[0].item.added_at >= pair[1].item.added_at);
        }
    }

    #[tokio::test]
    async fn list_is_scoped_to_the_session_profile() {
        let catalog = MemoryCatalog::seeded();
        let mine = my_list_view(&catalog, &Session::new("profile-1")).await.unwrap();
        let theirs = my_list_view(&catalog, &Session::new("profile-2")).await.unwrap();
        assert_ne!(mine.items, theirs.items);
    }
}
