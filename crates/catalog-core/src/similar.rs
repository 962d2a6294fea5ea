use catalog_models::Content;
use tracing::debug;

/// Rank catalog titles by how many genre slugs they share with `source`,
/// descending, excluding the source itself. Ties keep catalog order.
pub fn similar_contents(catalog: &[Content], source: &Content, limit: usize) -> Vec<Content> {
    let source_slugs: Vec<&str> = source.genres.iter().map(|g| g.slug.as_str()).collect();

    let mut scored: Vec<(usize, &Content)> = catalog
        .iter()
        .filter(|c| c.id != source.id)
        .map(|c| {
            let shared = c
                .genres
                .iter()
                .filter(|g| source_slugs.contains(&g.slug.as_str()))
                .count();
            (shared, c)
        })
        .filter(|(shared, _)| *shared > 0)
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));

    let results: Vec<Content> = scored
        .into_iter()
        .take(limit)
        .map(|(_, c)| c.clone())
        .collect();
    debug!(
        source_id = %source.id,
        result_count = results.len(),
        "similar_contents"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_models::{ContentRating, ContentType, Genre};
    use chrono::Utc;

    fn title(id: &str, slugs: &[&str]) -> Content {
        Content {
            id: id.to_string(),
            title: id.to_string(),
            original_title: None,
            content_type: ContentType::Movie,
            description: String::new(),
            short_description: None,
            release_year: 2023,
            rating: ContentRating::Pg13,
            duration_minutes: 100,
            poster_url: String::new(),
            backdrop_url: String::new(),
            trailer_url: None,
            genres: slugs
                .iter()
                .map(|s| Genre {
                    id: format!("g-{}", s),
                    name: s.to_string(),
                    slug: s.to_string(),
                })
                .collect(),
            cast: Vec::new(),
            director: None,
            average_rating: 4.0,
            total_ratings: 100,
            match_percentage: None,
            is_new: false,
            is_trending: false,
            is_original: false,
            is_top10: false,
            top10_rank: None,
            added_at: Utc::now(),
        }
    }

    #[test]
    fn ranks_by_shared_genre_count() {
        let source = title("src", &["action", "sci-fi", "thriller"]);
        let catalog = vec![
            source.clone(),
            title("one-shared", &["action", "romance"]),
            title("two-shared", &["action", "thriller"]),
            title("none-shared", &["comedy"]),
            title("three-shared", &["action", "sci-fi", "thriller"]),
        ];

        let similar = similar_contents(&catalog, &source, 10);
        let ids: Vec<&str> = similar.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["three-shared", "two-shared", "one-shared"]);
    }

    #[test]
    fn excludes_source_and_respects_limit() {
        let source = title("src", &["drama"]);
        let catalog = vec![
            source.clone(),
            title("a", &["drama"]),
            title("b", &["drama"]),
            title("c", &["drama"]),
        ];

        let similar = similar_contents(&catalog, &source, 2);
        assert_eq!(similar.len(), 2);
        assert!(similar.iter().all(|c| c.id != "src"));
    }

    #[test]
    fn ties_keep_catalog_order() {
        let source = title("src", &["drama"]);
        let catalog = vec![
            title("first", &["drama"]),
            source.clone(),
            title("second", &["drama"]),
        ];

        let similar = similar_contents(&catalog, &source, 10);
        let ids: Vec<&str> = similar.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["first", "second"]);
    }
}
