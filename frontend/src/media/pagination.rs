/// Items shown per page on every media tab.
pub const PAGE_SIZE: usize = 6;

/// The visible part of a collection for one page.
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
}

/// Total number of pages needed for `len` items.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Slices out page `page` (1-indexed) of `items`.
///
/// Out of range pages are not corrected and yield an empty slice; callers
/// reset to page 1 whenever the underlying collection changes.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let total_pages = total_pages(items.len(), page_size);
    let start = page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(page_size))
        .filter(|start| *start < items.len() && page_size > 0);

    let items = match start {
        Some(start) => &items[start..start.saturating_add(page_size).min(items.len())],
        None => &items[..0],
    };
    Page { items, total_pages }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fourteen_articles_make_three_pages() {
        let articles: Vec<u32> = (1..=14).collect();

        let sizes: Vec<usize> = (1..=3)
            .map(|p| paginate(&articles, p, PAGE_SIZE).items.len())
            .collect();
        assert_eq!(sizes, vec![6, 6, 2]);

        let last = paginate(&articles, 3, PAGE_SIZE);
        assert_eq!(last.items, &[13, 14]);
        assert_eq!(last.total_pages, 3);

        assert!(paginate(&articles, 4, PAGE_SIZE).items.is_empty());
    }

    #[test]
    fn pages_concatenate_back_to_the_collection() {
        for len in 0..40usize {
            for page_size in 1..9usize {
                let items: Vec<usize> = (0..len).collect();
                let pages = total_pages(len, page_size);
                assert_eq!(pages, (len + page_size - 1) / page_size);

                let joined: Vec<usize> = (1..=pages)
                    .flat_map(|p| paginate(&items, p, page_size).items.to_vec())
                    .collect();
                assert_eq!(joined, items, "len={len} page_size={page_size}");
            }
        }
    }

    #[test]
    fn degenerate_requests_are_empty() {
        let items = [1, 2, 3];
        assert!(paginate(&items, 0, PAGE_SIZE).items.is_empty());
        assert!(paginate(&items, usize::MAX, PAGE_SIZE).items.is_empty());

        let none = paginate(&items, 1, 0);
        assert!(none.items.is_empty());
        assert_eq!(none.total_pages, 0);

        let empty: [u8; 0] = [];
        assert_eq!(paginate(&empty, 1, PAGE_SIZE).total_pages, 0);
    }
}
