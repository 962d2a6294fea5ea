use catalog_models::Content;
use catalog_store::{ContentRepository, StoreError, UserRepository};
use serde::Serialize;

use crate::session::Session;
use crate::views::ResumeItem;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FeaturedContent {
    pub content: Content,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContentRow {
    pub title: String,
    pub slug: String,
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HomeView {
    pub featured: FeaturedContent,
    pub rows: Vec<ContentRow>,
    pub continue_watching: Vec<ResumeItem>,
}

pub async fn home_view<S>(store: &S, session: &Session) -> Result<HomeView, StoreError>
where
    S: ContentRepository + UserRepository,
{
    let contents = store.all_content().await?;
    let featured = store.featured().await?;

    let continue_watching = store
        .continue_watching(&session.profile_id)
        .await?
        .into_iter()
        .filter_map(|history| {
            contents
                .iter()
                .find(|c| c.id == history.content_id)
                .cloned()
                .map(|content| ResumeItem { content, history })
        })
        .collect();

    let mut top10: Vec<Content> = contents.iter().filter(|c| c.is_top10).cloned().collect();
    top10.sort_by_key(|c| c.top10_rank.unwrap_or(u32::MAX));

    let candidates = [
        row("Trending Now", "trending", contents.iter().filter(|c| c.is_trending)),
        row("New Releases", "new", contents.iter().filter(|c| c.is_new)),
        ContentRow {
            title: "Top 10 Today".to_string(),
            slug: "top-10".to_string(),
            contents: top10,
        },
        row("Originals", "originals", contents.iter().filter(|c| c.is_original)),
    ];
    let mut rows: Vec<ContentRow> = candidates
        .into_iter()
        .filter(|r| !r.contents.is_empty())
        .collect();

    // Curated rows first, then one row per genre that has titles
    for genre in store.genres().await? {
        let genre_row = row(
            &genre.name,
            &genre.slug,
            contents.iter().filter(|c| c.has_genre_slug(&genre.slug)),
        );
        if !genre_row.contents.is_empty() {
            rows.push(genre_row);
        }
    }

    Ok(HomeView {
        featured: FeaturedContent {
            headline: featured.short_description.clone(),
            cta_text: Some("Play".to_string()),
            content: featured,
        },
        rows,
        continue_watching,
    })
}

fn row<'a>(
    title: &str,
    slug: &str,
    contents: impl Iterator<Item = &'a Content>,
) -> ContentRow {
    ContentRow {
        title: title.to_string(),
        slug: slug.to_string(),
        contents: contents.cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_store::MemoryCatalog;

    #[tokio::test]
    async fn home_rows_are_populated_and_top10_is_ranked() {
        let catalog = MemoryCatalog::seeded();
        let session = Session::new("profile-1");
        let view = home_view(&catalog, &session).await.unwrap();

        assert!(!view.rows.is_empty());
        let top10 = view
            .rows
            .iter()
            .find(|r| r.slug == "top-10")
            .expect("seed has a top 10 row");
        let ranks: Vec<u32> = top10
            .contents
            .iter()
            .map(|c| c.top10_rank.unwrap())
            .collect();
        let mut sorted = ranks.clone();
        sorted.sort();
        assert_eq!(ranks, sorted);
    }

    #[tokio::test]
    async fn every_genre_with_titles_gets_its_own_row() {
        let catalog = MemoryCatalog::seeded();
        let session = Session::new("profile-1");
        let view = home_view(&catalog, &session).await.unwrap();

        let genres = catalog.genres().await.unwrap();
        for genre in &genres {
            let row = view
                .rows
                .iter()
                .find(|r| r.slug == genre.slug)
                .expect("seeded genre has a row");
            assert_eq!(row.title, genre.name);
            assert!(!row.contents.is_empty());
            assert!(row.contents.iter().all(|c| c.has_genre_slug(&genre.slug)));
        }

        // Genre rows follow the curated ones
        let first_genre_index = view
            .rows
            .iter()
            .position(|r| r.slug == genres[0].slug)
            .unwrap();
        assert!(view.rows[..first_genre_index]
            .iter()
            .all(|r| genres.iter().all(|g| g.slug != r.slug)));
    }

    #[tokio::test]
    async fn featured_headline_comes_from_the_short_description() {
        let catalog = MemoryCatalog::seeded();
        let session = Session::new("profile-1");
        let view = home_view(&catalog, &session).await.unwrap();

        assert_eq!(view.featured.headline, view.featured.content.short_description);
        assert!(view.featured.headline.is_some());
    }

    #[tokio::test]
    async fn continue_watching_holds_only_in_progress_titles() {
        let catalog = MemoryCatalog::seeded();
        let session = Session::new("profile-1");
        let view = home_view(&catalog, &session).await.unwrap();

        assert!(!view.continue_watching.is_empty());
        for item in &view.continue_watching {
            assert!(item.history.progress > 0 && item.history.progress < 100);
            assert_eq!(item.content.id, item.history.content_id);
        }
    }
}
