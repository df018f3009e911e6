//! Page math for result listings
//!
//! Pure functions that turn a page number into slice bounds and work out which
//! page numbers a pager control should show around the current page.

use serde::Serialize;
use std::ops::{Range, RangeInclusive};

/// Total number of pages needed for `total_items`
pub fn page_count(total_items: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total_items.div_ceil(per_page)
}

/// Slice bounds `[start, end)` for a page.
///
/// Negative page numbers collapse to the first page. There is no upper clamp:
/// bounds past the end of a collection simply select fewer (or no) items.
pub fn page_bounds(page: i64, per_page: usize) -> Range<usize> {
    let page = usize::try_from(page.max(0)).unwrap_or(usize::MAX);
    let start = page.saturating_mul(per_page);
    start..start.saturating_add(per_page)
}

/// Inclusive run of page numbers a pager displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PagerWindow {
    pub first: usize,
    pub last: usize,
}

impl PagerWindow {
    pub fn pages(&self) -> RangeInclusive<usize> {
        self.first..=self.last
    }

    pub fn contains(&self, page: usize) -> bool {
        self.pages().contains(&page)
    }
}

/// Page numbers to display around `current`.
///
/// The window holds `min(max_window, page_count)` pages and contains the
/// current page whenever that page exists. It stays centered on the current
/// page and pins against the first and last page instead of running off
/// either end. With an even `max_window` the window shows one more page
/// before the current page than after it. Returns `None` when there is
/// nothing to show.
pub fn pager_window(page_count: usize, current: usize, max_window: usize) -> Option<PagerWindow> {
    if page_count == 0 || max_window == 0 {
        return None;
    }

    let latest_first = page_count.saturating_sub(max_window);
    let first = current.saturating_sub(max_window / 2).min(latest_first);
    let last = first.saturating_add(max_window - 1).min(page_count - 1);

    Some(PagerWindow { first, last })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(9, 5), 2);
        assert_eq!(page_count(10, 5), 2);
        assert_eq!(page_count(11, 5), 3);
        assert_eq!(page_count(0, 5), 0);
        assert_eq!(page_count(3, 0), 0);
    }

    #[test]
    fn test_page_bounds_basic() {
        assert_eq!(page_bounds(0, 5), 0..5);
        assert_eq!(page_bounds(1, 5), 5..10);
        assert_eq!(page_bounds(3, 10), 30..40);
    }

    #[test]
    fn test_page_bounds_negative_is_first_page() {
        assert_eq!(page_bounds(-1, 5), 0..5);
        assert_eq!(page_bounds(i64::MIN, 5), 0..5);
    }

    #[test]
    fn test_page_bounds_no_upper_clamp() {
        assert_eq!(page_bounds(100, 5), 500..505);
    }

    #[test]
    fn test_pager_window_start() {
        assert_eq!(pager_window(10, 0, 5), Some(PagerWindow { first: 0, last: 4 }));
        assert_eq!(pager_window(10, 2, 5), Some(PagerWindow { first: 0, last: 4 }));
    }

    #[test]
    fn test_pager_window_end() {
        assert_eq!(pager_window(10, 9, 5), Some(PagerWindow { first: 5, last: 9 }));
        assert_eq!(pager_window(10, 7, 5), Some(PagerWindow { first: 5, last: 9 }));
    }

    #[test]
    fn test_pager_window_centered() {
        assert_eq!(pager_window(10, 5, 5), Some(PagerWindow { first: 3, last: 7 }));
        assert_eq!(pager_window(10, 3, 5), Some(PagerWindow { first: 1, last: 5 }));
    }

    #[test]
    fn test_pager_window_fewer_pages_than_window() {
        assert_eq!(pager_window(3, 0, 5), Some(PagerWindow { first: 0, last: 2 }));
        assert_eq!(pager_window(3, 2, 5), Some(PagerWindow { first: 0, last: 2 }));
        assert_eq!(pager_window(1, 0, 5), Some(PagerWindow { first: 0, last: 0 }));
    }

    #[test]
    fn test_pager_window_slides_with_fixed_size() {
        for current in 0..20 {
            let window = pager_window(20, current, 5).unwrap();
            assert_eq!(window.pages().count(), 5, "window for page {current}");
            assert!(window.contains(current));
        }
    }

    #[test]
    fn test_pager_window_even_size() {
        assert_eq!(pager_window(10, 0, 4), Some(PagerWindow { first: 0, last: 3 }));
        assert_eq!(pager_window(10, 3, 4), Some(PagerWindow { first: 1, last: 4 }));
        assert_eq!(pager_window(10, 6, 4), Some(PagerWindow { first: 4, last: 7 }));
        assert_eq!(pager_window(10, 9, 4), Some(PagerWindow { first: 6, last: 9 }));
        for current in 0..10 {
            let window = pager_window(10, current, 4).unwrap();
            assert_eq!(window.pages().count(), 4, "window for page {current}");
            assert!(window.contains(current));
        }
    }

    #[test]
    fn test_pager_window_nothing_to_show() {
        assert_eq!(pager_window(0, 0, 5), None);
        assert_eq!(pager_window(10, 0, 0), None);
    }
}
