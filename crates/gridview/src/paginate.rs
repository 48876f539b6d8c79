//! Page arithmetic and page-number windows.
//!
//! Pages are 1-based. There is always at least one page, even for an empty
//! result set, so "page 1 of 1" is the floor.

use std::fmt;
use std::ops::Range;

/// Default number of pages shown on each side of the current page.
pub const DEFAULT_WINDOW_RADIUS: usize = 2;

/// Number of pages needed for `count` items: `max(1, ceil(count / page_size))`.
///
/// A `page_size` of zero is treated as one.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Clamps `page` into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Index range of `page` within a list of `count` items.
///
/// Pages past the end yield an empty range at `count`.
pub fn page_range(page: usize, page_size: usize, count: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(count);
    let end = start.saturating_add(page_size).min(count);
    start..end
}

/// Returns the items of `page` from `items`.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_range(page, page_size, items.len())]
}

/// One entry in a page-number control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    /// A clickable page number.
    Page(usize),
    /// A gap of one or more hidden pages.
    Ellipsis,
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageMarker::Page(n) => write!(f, "{}", n),
            PageMarker::Ellipsis => f.write_str("..."),
        }
    }
}

/// Computes the page numbers to display around `current`.
///
/// Page 1 and the last page are always present, plus every page within
/// `radius` of `current`. Wherever two neighbouring entries are more than one
/// apart, a single [`PageMarker::Ellipsis`] goes between them.
///
/// ```
/// use gridview::paginate::{page_window, PageMarker::{Ellipsis, Page}};
///
/// assert_eq!(
///     page_window(6, 20, 2),
///     vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Page(7), Page(8), Ellipsis, Page(20)]
/// );
/// ```
pub fn page_window(current: usize, total_pages: usize, radius: usize) -> Vec<PageMarker> {
    let total = total_pages.max(1);
    let current = clamp_page(current, total);
    let lo = current.saturating_sub(radius).max(1);
    let hi = current.saturating_add(radius).min(total);

    let mut pages = Vec::with_capacity(hi - lo + 3);
    pages.push(1);
    pages.extend(lo..=hi);
    pages.push(total);
    // sorted by construction, so dedup removes every overlap
    pages.dedup();

    let mut window = Vec::with_capacity(pages.len() + 2);
    let mut prev: Option<usize> = None;
    for page in pages {
        if prev.is_some_and(|p| page - p > 1) {
            window.push(PageMarker::Ellipsis);
        }
        window.push(PageMarker::Page(page));
        prev = Some(page);
    }
    window
}

/// Position of the current page within the result set, for
/// "showing 11–20 of 57" style captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page, 1-based.
    pub page: usize,
    pub total_pages: usize,
    /// 1-based index of the first item on the page, or 0 if the page is empty.
    pub first_item: usize,
    /// 1-based index of the last item on the page, or 0 if the page is empty.
    pub last_item: usize,
    pub total_count: usize,
}

impl PageInfo {
    pub fn new(page: usize, page_size: usize, total_count: usize) -> Self {
        let total_pages = total_pages(total_count, page_size);
        let page = clamp_page(page, total_pages);
        let range = page_range(page, page_size, total_count);
        let (first_item, last_item) = if range.is_empty() {
            (0, 0)
        } else {
            (range.start + 1, range.end)
        };
        PageInfo {
            page,
            total_pages,
            first_item,
            last_item,
            total_count,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::PageMarker::{Ellipsis, Page};
    use super::*;

    #[test]
    fn total_pages_has_floor_of_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 2), 3);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn clamping() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn ranges() {
        assert_eq!(page_range(1, 2, 5), 0..2);
        assert_eq!(page_range(3, 2, 5), 4..5);
        assert_eq!(page_range(4, 2, 5), 5..5);
        assert_eq!(page_range(0, 2, 5), 0..2);
        assert_eq!(page_range(usize::MAX, 2, 5), 5..5);
    }

    #[test]
    fn slices() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(page_slice(&items, 3, 2), &[5]);
        assert!(page_slice(&items, 9, 2).is_empty());
    }

    #[test]
    fn window_in_the_middle() {
        assert_eq!(
            page_window(6, 20, 2),
            vec![
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Page(8),
                Ellipsis,
                Page(20)
            ]
        );
    }

    #[test]
    fn window_near_the_start() {
        assert_eq!(
            page_window(1, 20, 2),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(20)]
        );
        assert_eq!(
            page_window(4, 20, 2),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn window_single_hidden_page_still_gets_ellipsis() {
        assert_eq!(
            page_window(5, 20, 2),
            vec![
                Page(1),
                Ellipsis,
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Ellipsis,
                Page(20)
            ]
        );
    }

    #[test]
    fn window_near_the_end() {
        assert_eq!(
            page_window(20, 20, 2),
            vec![Page(1), Ellipsis, Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn window_for_few_pages() {
        assert_eq!(page_window(1, 1, 2), vec![Page(1)]);
        assert_eq!(page_window(2, 3, 2), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_window(1, 0, 2), vec![Page(1)]);
    }

    #[test]
    fn window_clamps_current() {
        assert_eq!(page_window(99, 3, 1), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn marker_display() {
        let text: Vec<String> = page_window(6, 20, 1).iter().map(ToString::to_string).collect();
        assert_eq!(text, ["1", "...", "5", "6", "7", "...", "20"]);
    }

    #[test]
    fn page_info_bounds() {
        let info = PageInfo::new(2, 10, 57);
        assert_eq!((info.first_item, info.last_item), (11, 20));
        assert_eq!(info.total_pages, 6);
        assert!(info.has_previous());
        assert!(info.has_next());

        let last = PageInfo::new(6, 10, 57);
        assert_eq!((last.first_item, last.last_item), (51, 57));
        assert!(!last.has_next());

        let empty = PageInfo::new(1, 10, 0);
        assert_eq!((empty.first_item, empty.last_item), (0, 0));
        assert_eq!(empty.total_pages, 1);
        assert!(!empty.has_previous());
    }
}
