/// Default number of rows per page of the activity table.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// One slot of the page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Number(usize),
    Ellipsis,
}

/// Position of one page within a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub current: usize,
    pub per_page: usize,
    pub total_items: usize,
}

impl Page {
    /// Build a page, clamping `current` into `1..=total_pages`.
    pub fn new(total_items: usize, current: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let mut page = Self {
            current: 1,
            per_page,
            total_items,
        };
        page.current = current.clamp(1, page.total_pages());
        page
    }

    /// Always at least one, even for an empty result.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.per_page).max(1)
    }

    /// 1-based index of the first row on this page; 0 when empty.
    pub fn start_index(&self) -> usize {
        if self.total_items == 0 {
            return 0;
        }
        (self.current - 1) * self.per_page + 1
    }

    /// 1-based index of the last row on this page; 0 when empty.
    pub fn end_index(&self) -> usize {
        if self.total_items == 0 {
            return 0;
        }
        (self.current * self.per_page).min(self.total_items)
    }

    /// Slice bounds into the full result set.
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = self.start_index().saturating_sub(1);
        start..self.end_index()
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages()
    }

    /// First, last and neighbouring pages, with an ellipsis two steps away.
    pub fn window(&self) -> Vec<PageSlot> {
        let total = self.total_pages();
        let current = self.current;
        (1..=total)
            .filter_map(|page| {
                if page == 1 || page == total || page.abs_diff(current) <= 1 {
                    Some(PageSlot::Number(page))
                } else if page.abs_diff(current) == 2 {
                    Some(PageSlot::Ellipsis)
                } else {
                    None
                }
            })
            .collect()
    }
}
