//! Pagination engine: fixed-size windows over an ordered sequence.
//!
//! An empty sequence has **zero** pages. Callers render that as
//! "Page 1 of 0" with both navigation controls disabled.

use storefront_core::{DomainError, DomainResult};

/// One window of an ordered sequence plus its navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub visible: &'a [T],
    pub total_pages: usize,
    pub can_go_prev: bool,
    pub can_go_next: bool,
}

/// Number of pages needed for `len` items (`0` when `len == 0`).
///
/// A zero `page_size` is a caller contract violation, as in [`paginate`].
pub fn total_pages(len: usize, page_size: usize) -> DomainResult<usize> {
    if page_size == 0 {
        return Err(DomainError::invalid_argument("page size must be positive"));
    }
    Ok(len.div_ceil(page_size))
}

/// Slice page `page` (1-based) of `ordered`.
///
/// A page past the end yields an empty window rather than an error; keeping
/// `page` in range is the view controller's job. Zero `page_size` or zero
/// `page` is a caller contract violation.
pub fn paginate<T>(ordered: &[T], page_size: usize, page: usize) -> DomainResult<Page<'_, T>> {
    let total_pages = total_pages(ordered.len(), page_size)?;
    if page == 0 {
        return Err(DomainError::invalid_argument("page index starts at 1"));
    }

    let start = (page - 1).saturating_mul(page_size).min(ordered.len());
    let end = start.saturating_add(page_size).min(ordered.len());

    Ok(Page {
        visible: &ordered[start..end],
        total_pages,
        can_go_prev: page > 1,
        can_go_next: page < total_pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn twelve_items_by_ten() {
        let items: Vec<u32> = (0..12).collect();

        let first = paginate(&items, 10, 1).unwrap();
        assert_eq!(first.visible, &items[..10]);
        assert_eq!(first.total_pages, 2);
        assert!(!first.can_go_prev);
        assert!(first.can_go_next);

        let second = paginate(&items, 10, 2).unwrap();
        assert_eq!(second.visible, &[10, 11]);
        assert!(second.can_go_prev);
        assert!(!second.can_go_next);
    }

    #[test]
    fn empty_sequence_has_zero_pages() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 10, 1).unwrap();
        assert!(page.visible.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!page.can_go_prev);
        assert!(!page.can_go_next);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let items: Vec<u32> = (0..20).collect();
        assert_eq!(paginate(&items, 10, 1).unwrap().total_pages, 2);
        assert!(!paginate(&items, 10, 2).unwrap().can_go_next);
    }

    #[test]
    fn page_past_the_end_is_empty_not_out_of_range() {
        let items: Vec<u32> = (0..3).collect();
        let page = paginate(&items, 2, 9).unwrap();
        assert!(page.visible.is_empty());
        assert!(page.can_go_prev);
        assert!(!page.can_go_next);
    }

    #[test]
    fn zero_arguments_violate_the_contract() {
        let items = [1, 2, 3];
        assert!(matches!(paginate(&items, 0, 1), Err(DomainError::InvalidArgument(_))));
        assert!(matches!(paginate(&items, 1, 0), Err(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn page_count_rejects_zero_page_size() {
        assert_eq!(total_pages(12, 10), Ok(2));
        assert_eq!(total_pages(0, 10), Ok(0));
        assert!(matches!(total_pages(12, 0), Err(DomainError::InvalidArgument(_))));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: consecutive pages partition the sequence with no gap or overlap.
        #[test]
        fn pages_partition_the_sequence(len in 0usize..200, page_size in 1usize..25) {
            let items: Vec<usize> = (0..len).collect();
            let total = total_pages(len, page_size).unwrap();

            let mut stitched = Vec::new();
            for page in 1..=total {
                let window = paginate(&items, page_size, page).unwrap();
                prop_assert!(!window.visible.is_empty());
                prop_assert!(window.visible.len() <= page_size);
                stitched.extend_from_slice(window.visible);
            }
            prop_assert_eq!(stitched, items);
        }

        /// Property: navigation flags match `page > 1` and `page < total_pages`.
        #[test]
        fn navigation_flags_match_bounds(
            len in 0usize..200,
            page_size in 1usize..25,
            page in 1usize..30,
        ) {
            let items: Vec<usize> = (0..len).collect();
            let window = paginate(&items, page_size, page).unwrap();
            prop_assert_eq!(window.can_go_prev, page > 1);
            prop_assert_eq!(window.can_go_next, page < window.total_pages);
        }
    }
}
