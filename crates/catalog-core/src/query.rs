use catalog_models::{Content, ContentType};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::page::{paginate, Page};

/// Conjunctive filter over the catalog; absent predicates are no-ops.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContentFilter {
    /// Case-insensitive substring over title, description, genre names, and
    /// cast names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
}

impl ContentFilter {
    pub fn is_empty(&self) -> bool {
        self.query.is_none()
            && self.content_type.is_none()
            && self.genre_slug.is_none()
            && self.genre_id.is_none()
            && self.year.is_none()
    }

    pub fn matches(&self, content: &Content) -> bool {
        if let Some(query) = &self.query {
            let needle = query.to_lowercase();
            let hit = content.title.to_lowercase().contains(&needle)
                || content.description.to_lowercase().contains(&needle)
                || content
                    .genres
                    .iter()
                    .any(|g| g.name.to_lowercase().contains(&needle))
                || content
                    .cast
                    .iter()
                    .any(|m| m.name.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
        if let Some(content_type) = self.content_type {
            if content.content_type != content_type {
                return false;
            }
        }
        if let Some(slug) = &self.genre_slug {
            if !content.has_genre_slug(slug) {
                return false;
            }
        }
        if let Some(genre_id) = &self.genre_id {
            if !content.has_genre_id(genre_id) {
                return false;
            }
        }
        if let Some(year) = self.year {
            if content.release_year != year {
                return false;
            }
        }
        true
    }
}

/// Sort orders offered by browse and search. Each is a total order; ties keep
/// the original collection order (the sort is stable).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortKey {
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "oldest")]
    Oldest,
    #[default]
    #[serde(rename = "popular")]
    Popular,
    #[serde(rename = "rating")]
    Rating,
    #[serde(rename = "a-z")]
    TitleAsc,
    #[serde(rename = "z-a")]
    TitleDesc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Popular => "popular",
            SortKey::Rating => "rating",
            SortKey::TitleAsc => "a-z",
            SortKey::TitleDesc => "z-a",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "popular" => Ok(SortKey::Popular),
            "rating" => Ok(SortKey::Rating),
            "a-z" => Ok(SortKey::TitleAsc),
            "z-a" => Ok(SortKey::TitleDesc),
            other => Err(format!(
                "unknown sort key '{}', expected one of newest, oldest, popular, rating, a-z, z-a",
                other
            )),
        }
    }
}

/// Keep only the items matching every supplied predicate
pub fn filter_contents(items: &[Content], filter: &ContentFilter) -> Vec<Content> {
    let filtered: Vec<Content> = items
        .iter()
        .filter(|c| filter.matches(c))
        .cloned()
        .collect();
    debug!(
        source_count = items.len(),
        result_count = filtered.len(),
        "filter_contents"
    );
    filtered
}

/// Stable in-place sort by the given key
pub fn sort_contents(items: &mut [Content], key: SortKey) {
    match key {
        SortKey::Newest => items.sort_by(|a, b| b.release_year.cmp(&a.release_year)),
        SortKey::Oldest => items.sort_by(|a, b| a.release_year.cmp(&b.release_year)),
        SortKey::Popular => items.sort_by(|a, b| b.total_ratings.cmp(&a.total_ratings)),
        SortKey::Rating => {
            items.sort_by(|a, b| b.average_rating.total_cmp(&a.average_rating))
        }
        SortKey::TitleAsc => {
            items.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
        SortKey::TitleDesc => {
            items.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()))
        }
    }
}

/// The whole read path in one call: filter, then sort, then slice a page
pub fn run_query(
    items: &[Content],
    filter: &ContentFilter,
    sort: SortKey,
    page: u32,
    per_page: usize,
) -> Page<Content> {
    let mut filtered = filter_contents(items, filter);
    sort_contents(&mut filtered, sort);
    paginate(filtered, page, per_page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_models::{CastMember, ContentRating, Genre};
    use chrono::Utc;

    fn genre(slug: &str) -> Genre {
        Genre {
            id: format!("g-{}", slug),
            name: slug.to_uppercase(),
            slug: slug.to_string(),
        }
    }

    fn title(
        id: &str,
        name: &str,
        content_type: ContentType,
        year: u32,
        genres: &[&str],
        total_ratings: u32,
        average_rating: f32,
    ) -> Content {
        Content {
            id: id.to_string(),
            title: name.to_string(),
            original_title: None,
            content_type,
            description: format!("About {}", name),
            short_description: None,
            release_year: year,
            rating: ContentRating::Pg13,
            duration_minutes: 100,
            poster_url: String::new(),
            backdrop_url: String::new(),
            trailer_url: None,
            genres: genres.iter().map(|s| genre(s)).collect(),
            cast: vec![CastMember {
                id: format!("{}-cast", id),
                name: format!("Lead of {}", name),
                character: "Lead".to_string(),
                photo_url: None,
            }],
            director: None,
            average_rating,
            total_ratings,
            match_percentage: None,
            is_new: false,
            is_trending: false,
            is_original: false,
            is_top10: false,
            top10_rank: None,
            added_at: Utc::now(),
        }
    }

    fn sample_catalog() -> Vec<Content> {
        vec![
            title("c-1", "Alpha Station", ContentType::Movie, 2024, &["sci-fi"], 500, 4.5),
            title("c-2", "Borrowed Time", ContentType::Series, 2021, &["drama", "crime"], 900, 4.8),
            title("c-3", "Canyon Run", ContentType::Movie, 2022, &["action"], 300, 3.2),
            title("c-4", "dust and echoes", ContentType::Documentary, 2024, &["drama"], 120, 4.1),
            title("c-5", "Ember Coast", ContentType::Series, 2019, &["drama", "romance"], 700, 3.9),
        ]
    }

    #[test]
    fn filter_never_grows() {
        let catalog = sample_catalog();
        let filters = [
            ContentFilter::default(),
            ContentFilter {
                query: Some("a".to_string()),
                ..Default::default()
            },
            ContentFilter {
                content_type: Some(ContentType::Series),
                genre_slug: Some("drama".to_string()),
                ..Default::default()
            },
        ];
        for filter in &filters {
            assert!(filter_contents(&catalog, filter).len() <= catalog.len());
        }
    }

    #[test]
    fn filtered_items_satisfy_all_predicates() {
        let catalog = sample_catalog();
        let filter = ContentFilter {
            content_type: Some(ContentType::Series),
            genre_slug: Some("drama".to_string()),
            ..Default::default()
        };
        let results = filter_contents(&catalog, &filter);
        assert!(!results.is_empty());
        for item in &results {
            assert_eq!(item.content_type, ContentType::Series);
            assert!(item.has_genre_slug("drama"));
            assert!(filter.matches(item));
        }
    }

    #[test]
    fn absent_predicates_are_no_ops() {
        let catalog = sample_catalog();
        let results = filter_contents(&catalog, &ContentFilter::default());
        assert_eq!(results, catalog);
    }

    #[test]
    fn query_matches_are_case_insensitive() {
        let catalog = sample_catalog();
        let filter = ContentFilter {
            query: Some("DUST".to_string()),
            ..Default::default()
        };
        let results = filter_contents(&catalog, &filter);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "c-4");
    }

    #[test]
    fn query_reaches_cast_and_genre_names() {
        let catalog = sample_catalog();

        let by_cast = ContentFilter {
            query: Some("lead of canyon".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_contents(&catalog, &by_cast).len(), 1);

        let by_genre = ContentFilter {
            query: Some("romance".to_string()),
            ..Default::default()
        };
        let results = filter_contents(&catalog, &by_genre);
        assert!(results.iter().any(|c| c.id == "c-5"));
    }

    #[test]
    fn year_filter_is_exact() {
        let catalog = sample_catalog();
        let filter = ContentFilter {
            year: Some(2024),
            ..Default::default()
        };
        let results = filter_contents(&catalog, &filter);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|c| c.release_year == 2024));
    }

    #[test]
    fn unmatched_query_returns_empty_page() {
        let catalog = sample_catalog();
        let filter = ContentFilter {
            query: Some("zz-no-match".to_string()),
            ..Default::default()
        };
        let page = run_query(&catalog, &filter, SortKey::Popular, 1, 20);
        assert_eq!(page.total_count, 0);
        assert!(page.items.is_empty());
        assert!(!page.has_next_page);
    }

    #[test]
    fn sort_orders_each_key() {
        let catalog = sample_catalog();

        let mut by_newest = catalog.clone();
        sort_contents(&mut by_newest, SortKey::Newest);
        for pair in by_newest.windows(2) {
            assert!(pair[0].release_year >= pair[1].release_year);
        }

        let mut by_popular = catalog.clone();
        sort_contents(&mut by_popular, SortKey::Popular);
        for pair in by_popular.windows(2) {
            assert!(pair[0].total_ratings >= pair[1].total_ratings);
        }

        let mut by_title = catalog.clone();
        sort_contents(&mut by_title, SortKey::TitleAsc);
        let titles: Vec<String> = by_title.iter().map(|c| c.title.to_lowercase()).collect();
        let mut expected = titles.clone();
        expected.sort();
        assert_eq!(titles, expected);

        let mut reversed = catalog;
        sort_contents(&mut reversed, SortKey::TitleDesc);
        let desc: Vec<String> = reversed.iter().map(|c| c.title.to_lowercase()).collect();
        let mut expected_desc = desc.clone();
        expected_desc.sort_by(|a, b| b.cmp(a));
        assert_eq!(desc, expected_desc);
    }

    #[test]
    fn sort_is_stable_and_idempotent() {
        // Two items share a release year; sorting twice must not swap them
        let mut catalog = vec![
            title("c-1", "First of 2024", ContentType::Movie, 2024, &["drama"], 10, 3.0),
            title("c-2", "Second of 2024", ContentType::Movie, 2024, &["drama"], 20, 3.5),
            title("c-3", "From 2020", ContentType::Movie, 2020, &["drama"], 30, 4.0),
        ];
        sort_contents(&mut catalog, SortKey::Newest);
        let once: Vec<String> = catalog.iter().map(|c| c.id.clone()).collect();
        assert_eq!(once, ["c-1", "c-2", "c-3"]);

        sort_contents(&mut catalog, SortKey::Newest);
        let twice: Vec<String> = catalog.iter().map(|c| c.id.clone()).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn sort_key_round_trips_through_str() {
        for key in [
            SortKey::Newest,
            SortKey::Oldest,
            SortKey::Popular,
            SortKey::Rating,
            SortKey::TitleAsc,
            SortKey::TitleDesc,
        ] {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
        assert!("upside-down".parse::<SortKey>().is_err());
    }

    #[test]
    fn sort_key_serializes_as_its_wire_name() {
        assert_eq!(serde_json::to_string(&SortKey::TitleAsc).unwrap(), "\"a-z\"");
        assert_eq!(
            serde_json::from_str::<SortKey>("\"newest\"").unwrap(),
            SortKey::Newest
        );
    }
}
