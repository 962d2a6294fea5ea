use serde::Serialize;

/// One page of an ordered collection, with enough metadata to render
/// pagination controls without a second query.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub page: u32,
    pub per_page: usize,
    pub total_pages: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Slice an already filtered and sorted collection into a 1-based page.
///
/// A page below 1 is clamped to 1; a page past the end yields an empty item
/// list with the metadata intact rather than an error.
pub fn paginate<T>(items: Vec<T>, page: u32, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let total_count = items.len();
    let total_pages = total_count.div_ceil(per_page) as u32;

    let start = (page as usize - 1) * per_page;
    let page_items: Vec<T> = items.into_iter().skip(start).take(per_page).collect();

    Page {
        items: page_items,
        total_count,
        page,
        per_page,
        total_pages,
        has_next_page: page < total_pages,
        has_prev_page: page > 1 && total_count > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn forty_five_items_paginate_into_three_pages() {
        let items = collection(45);

        let first = paginate(items.clone(), 1, 20);
        assert_eq!(first.items.len(), 20);
        assert_eq!(first.total_count, 45);
        assert_eq!(first.total_pages, 3);
        assert!(first.has_next_page);
        assert!(!first.has_prev_page);

        let last = paginate(items, 3, 20);
        assert_eq!(last.items.len(), 5);
        assert!(!last.has_next_page);
        assert!(last.has_prev_page);
    }

    #[test]
    fn page_zero_clamps_to_first() {
        let items = collection(10);
        let page = paginate(items.clone(), 0, 4);
        assert_eq!(page.page, 1);
        assert_eq!(page.items, paginate(items, 1, 4).items);
    }

    #[test]
    fn page_past_end_is_empty() {
        let page = paginate(collection(45), 9, 20);
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 45);
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_next_page);
    }

    #[test]
    fn pages_concatenate_to_full_collection() {
        let items = collection(45);
        let per_page = 20;
        let total_pages = paginate(items.clone(), 1, per_page).total_pages;

        let mut rebuilt = Vec::new();
        for page in 1..=total_pages {
            rebuilt.extend(paginate(items.clone(), page, per_page).items);
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn empty_collection_has_zero_pages() {
        let page = paginate(Vec::<usize>::new(), 1, 20);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next_page);
        assert!(!page.has_prev_page);
    }
}
