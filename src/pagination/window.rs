//! The page window: which page numbers are visible at once.

/// The contiguous run of page numbers displayed for a given current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// The page the window was computed for.
    pub current_page: usize,
    /// Page numbers to display, ascending and contiguous.
    pub numeric: Vec<usize>,
}

impl PageWindow {
    /// First page number in the window, if any.
    pub fn start(&self) -> Option<usize> {
        self.numeric.first().copied()
    }

    /// Last page number in the window, if any.
    pub fn end(&self) -> Option<usize> {
        self.numeric.last().copied()
    }

    /// Reports whether `page` is part of the window.
    pub fn contains(&self, page: usize) -> bool {
        matches!((self.start(), self.end()), (Some(s), Some(e)) if (s..=e).contains(&page))
    }
}

/// Computes the window of at most `visible_pages` page numbers around
/// `current_page`.
///
/// The window stays centred on the current page and clamps to the first or
/// last `visible_pages` numbers near either boundary. With an even width the
/// extra slot goes after the current page.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pagination::pagination::compute_window;
///
/// assert_eq!(compute_window(1, 10, 5).numeric, vec![1, 2, 3, 4, 5]);
/// assert_eq!(compute_window(5, 10, 5).numeric, vec![3, 4, 5, 6, 7]);
/// assert_eq!(compute_window(10, 10, 5).numeric, vec![6, 7, 8, 9, 10]);
/// assert_eq!(compute_window(1, 3, 5).numeric, vec![1, 2, 3]);
/// ```
pub fn compute_window(current_page: usize, total_pages: usize, visible_pages: usize) -> PageWindow {
    let total = total_pages as i64;
    let visible = (visible_pages as i64).min(total);
    let current = current_page as i64;

    let half = visible / 2;
    let mut start = current - half + 1 - visible % 2;
    let mut end = current + half;

    if start <= 0 {
        start = 1;
        end = visible;
    }
    if end > total {
        start = total - visible + 1;
        end = total;
    }

    let numeric = if start < 1 || end < start {
        Vec::new()
    } else {
        (start..=end).map(|p| p as usize).collect()
    };

    PageWindow {
        current_page,
        numeric,
    }
}
