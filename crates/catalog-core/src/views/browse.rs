use catalog_models::{Content, Genre};
use catalog_store::{ContentRepository, StoreError};
use serde::Serialize;

use crate::page::Page;
use crate::query::{run_query, ContentFilter, SortKey};

pub const DEFAULT_PER_PAGE: usize = 24;

#[derive(Debug, Clone)]
pub struct BrowseParams {
    /// `None` or `"all"` browses the whole catalog
    pub genre_slug: Option<String>,
    pub sort_by: SortKey,
    pub page: u32,
    pub per_page: usize,
}

impl Default for BrowseParams {
    fn default() -> Self {
        Self {
            genre_slug: None,
            sort_by: SortKey::Popular,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BrowseView {
    pub genres: Vec<Genre>,
    pub results: Page<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_genre: Option<Genre>,
    pub sort_by: SortKey,
}

pub async fn browse_view<S: ContentRepository + ?Sized>(
    store: &S,
    params: &BrowseParams,
) -> Result<BrowseView, StoreError> {
    let genre_slug = params
        .genre_slug
        .as_deref()
        .filter(|slug| *slug != "all")
        .map(str::to_string);

    let contents = store.all_content().await?;
    let genres = store.genres().await?;
    let selected_genre = genre_slug
        .as_deref()
        .and_then(|slug| genres.iter().find(|g| g.slug == slug).cloned());

    let filter = ContentFilter {
        genre_slug,
        ..Default::default()
    };
    let results = run_query(&contents, &filter, params.sort_by, params.page, params.per_page);

    Ok(BrowseView {
        genres,
        results,
        selected_genre,
        sort_by: params.sort_by,
    })
}
