use std::ops::Range;

/// Page state of a client-side list.
///
/// Pages are 1-based. The page count never drops below 1, so an empty list
/// still has a single (empty) page to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    current_page: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// `max(1, ceil(total / page_size))`
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Index range of the current page within a list of `total` items
    pub fn page_range(&self, total: usize) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.page_range(items.len())]
    }

    /// Moves to `page`, clamped into `1..=total_pages(total)`
    pub fn set_page(&mut self, page: usize, total: usize) {
        self.current_page = page.clamp(1, self.total_pages(total));
    }

    /// Pulls the current page back inside the valid range after the list shrank.
    ///
    /// Returns true when the page had to move.
    pub fn clamp(&mut self, total: usize) -> bool {
        let last = self.total_pages(total);
        if self.current_page > last {
            self.current_page = last;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn set_page_size(&mut self, page_size: usize, total: usize) {
        self.page_size = page_size.max(1);
        self.clamp(total);
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.current_page < self.total_pages(total)
    }

    /// "Showing 11 to 20 of 25 results"
    pub fn range_label(&self, total: usize) -> String {
        let range = self.page_range(total);
        if range.is_empty() {
            return "No results".to_string();
        }
        format!("Showing {} to {} of {} results", range.start + 1, range.end, total)
    }

    /// Page buttons to render: at most `max_visible` numbers around the
    /// current page, with the first and last page behind a gap when hidden.
    pub fn page_items(&self, total: usize, max_visible: usize) -> Vec<PageItem> {
        let last = self.total_pages(total);
        let max_visible = max_visible.max(1);
        if last <= max_visible {
            return (1..=last).map(PageItem::Page).collect();
        }
        let start = self
            .current_page
            .saturating_sub(max_visible / 2)
            .max(1);
        let end = (start + max_visible - 1).min(last);

        let mut items = Vec::with_capacity(max_visible + 4);
        if start > 1 {
            items.push(PageItem::Page(1));
            items.push(PageItem::Gap);
        }
        items.extend((start..=end).map(PageItem::Page));
        if end < last {
            items.push(PageItem::Gap);
            items.push(PageItem::Page(last));
        }
        items
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Gap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let p = Paginator::new(10);
        assert_eq!(p.total_pages(0), 1);
        assert_eq!(p.total_pages(10), 1);
        assert_eq!(p.total_pages(11), 2);
        assert_eq!(p.total_pages(25), 3);
    }

    #[test]
    fn test_last_page_is_partial() {
        let items: Vec<usize> = (0..25).collect();
        let mut p = Paginator::new(10);
        p.set_page(3, items.len());
        assert_eq!(p.slice(&items), &[20, 21, 22, 23, 24]);
    }

    #[test]
    fn test_empty_list_slice() {
        let items: Vec<usize> = Vec::new();
        let p = Paginator::new(12);
        assert!(p.slice(&items).is_empty());
        assert_eq!(p.page_range(0), 0..0);
    }

    #[test]
    fn test_set_page_is_clamped() {
        let mut p = Paginator::new(10);
        p.set_page(9, 25);
        assert_eq!(p.current_page(), 3);
        p.set_page(0, 25);
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut p = Paginator::new(10);
        p.set_page(3, 25);
        assert!(p.clamp(12));
        assert_eq!(p.current_page(), 2);
        assert!(!p.clamp(12));
        assert!(p.clamp(0));
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn test_page_size_change_clamps() {
        let mut p = Paginator::new(10);
        p.set_page(3, 30);
        p.set_page_size(12, 30);
        assert_eq!(p.current_page(), 3);
        p.set_page_size(15, 30);
        assert_eq!(p.current_page(), 2);
    }

    #[test]
    fn test_range_label() {
        let mut p = Paginator::new(10);
        p.set_page(2, 25);
        assert_eq!(p.range_label(25), "Showing 11 to 20 of 25 results");
        assert_eq!(p.range_label(0), "No results");
    }

    #[test]
    fn test_page_items() {
        use PageItem::{Gap, Page};
        let mut p = Paginator::new(10);
        assert_eq!(p.page_items(30, 5), vec![Page(1), Page(2), Page(3)]);

        p.set_page(6, 100);
        assert_eq!(
            p.page_items(100, 5),
            vec![Page(1), Gap, Page(4), Page(5), Page(6), Page(7), Page(8), Gap, Page(10)]
        );

        p.set_page(10, 100);
        assert_eq!(
            p.page_items(100, 5),
            vec![Page(1), Gap, Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_zero_page_size_is_raised() {
        let p = Paginator::new(0);
        assert_eq!(p.page_size(), 1);
    }
}
