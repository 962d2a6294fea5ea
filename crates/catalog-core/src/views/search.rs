use catalog_models::Content;
use catalog_store::{ContentRepository, StoreError};
use serde::Serialize;

use crate::page::{paginate, Page};
use crate::query::{filter_contents, sort_contents, ContentFilter, SortKey};
use crate::views::browse::DEFAULT_PER_PAGE;

#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub filter: ContentFilter,
    /// `None` keeps catalog order; the original only sorts when asked to
    pub sort_by: Option<SortKey>,
    pub page: u32,
    pub per_page: usize,
}

impl SearchParams {
    pub fn for_query(query: impl Into<String>) -> Self {
        Self {
            filter: ContentFilter {
                query: Some(query.into()),
                ..Default::default()
            },
            sort_by: None,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchView {
    pub query: String,
    pub results: Page<Content>,
    /// Echo of the filters that produced the results
    pub filters: ContentFilter,
    pub recent_searches: Vec<String>,
}

pub async fn search_view<S: ContentRepository + ?Sized>(
    store: &S,
    params: &SearchParams,
) -> Result<SearchView, StoreError> {
    let contents = store.all_content().await?;

    let mut filtered = filter_contents(&contents, &params.filter);
    if let Some(sort_by) = params.sort_by {
        sort_contents(&mut filtered, sort_by);
    }
    let per_page = if params.per_page == 0 {
        DEFAULT_PER_PAGE
    } else {
        params.per_page
    };
    let results = paginate(filtered, params.page, per_page);

    let query = params.filter.query.clone().unwrap_or_default();
    if !query.trim().is_empty() {
        store.record_search(&query).await?;
    }
    let recent_searches = store.recent_searches().await?;

    Ok(SearchView {
        query,
        results,
        filters: params.filter.clone(),
        recent_searches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_models::ContentType;
    use catalog_store::MemoryCatalog;

    #[tokio::test]
    async fn unmatched_query_is_empty_not_an_error() {
        let catalog = MemoryCatalog::seeded();
        let view = search_view(&catalog, &SearchParams::for_query("zz-no-match"))
            .await
            .unwrap();
        assert_eq!(view.results.total_count, 0);
        assert!(view.results.items.is_empty());
    }

    #[tokio::test]
    async fn filters_apply_conjunctively() {
        let catalog = MemoryCatalog::seeded();
        let params = SearchParams {
            filter: ContentFilter {
                content_type: Some(ContentType::Series),
                genre_slug: Some("drama".to_string()),
                ..Default::default()
            },
            sort_by: None,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        };
        let view = search_view(&catalog, &params).await.unwrap();
        assert!(view.results.total_count > 0);
        for item in &view.results.items {
            assert_eq!(item.content_type, ContentType::Series);
            assert!(item.has_genre_slug("drama"));
        }
        assert_eq!(view.filters, params.filter);
    }

    #[tokio::test]
    async fn queries_land_in_recent_searches() {
        let catalog = MemoryCatalog::seeded();
        let view = search_view(&catalog, &SearchParams::for_query("orchard"))
            .await
            .unwrap();
        assert_eq!(view.recent_searches[0], "orchard");
    }

    #[tokio::test]
    async fn empty_query_is_not_recorded() {
        let catalog = MemoryCatalog::seeded();
        let before = catalog.recent_searches().await.unwrap();
        let params = SearchParams {
            filter: ContentFilter {
                year: Some(2024),
                ..Default::default()
            },
            ..Default::default()
        };
        let view = search_view(&catalog, &params).await.unwrap();
        assert!(view.results.total_count > 0);
        assert_eq!(catalog.recent_searches().await.unwrap(), before);
    }
}
