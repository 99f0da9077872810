//! Page navigation state machine and page-number window.
//!
//! # Responsibility
//! - Keep `current_page` inside `[1, total_pages]` across every transition.
//! - Produce the compact page-number sequence shown by pagination controls.
//!
//! # Invariants
//! - `total_pages = max(1, ceil(total_count / page_size))`.
//! - `1 <= current_page <= total_pages` after every constructor or transition.
//! - Moving past either end is a no-op, never an error.

use serde::{Deserialize, Serialize};

/// Pages shown on each side of the current page.
pub const DEFAULT_WINDOW_RADIUS: u32 = 2;

/// Navigation step for [`advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// One slot in the rendered page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Immutable pagination snapshot.
///
/// Deserialization rebuilds through [`PageState::new`] and
/// [`PageState::go_to`], so decoded values satisfy the same invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PageStateWire")]
pub struct PageState {
    current_page: u32,
    page_size: u32,
    total_count: u64,
}

#[derive(Deserialize)]
struct PageStateWire {
    current_page: u32,
    page_size: u32,
    total_count: u64,
}

impl From<PageStateWire> for PageState {
    fn from(wire: PageStateWire) -> Self {
        PageState::new(wire.page_size, wire.total_count).go_to(wire.current_page)
    }
}

impl PageState {
    /// Starts on page 1. A zero `page_size` is treated as 1.
    pub fn new(page_size: u32, total_count: u64) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_count,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn total_pages(&self) -> u32 {
        let pages = self.total_count.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX).max(1)
    }

    /// Jumps to page `n`, clamped into range.
    pub fn go_to(self, n: u32) -> Self {
        Self {
            current_page: n.clamp(1, self.total_pages()),
            ..self
        }
    }

    pub fn next(self) -> Self {
        advance(Direction::Next, self)
    }

    pub fn prev(self) -> Self {
        advance(Direction::Prev, self)
    }

    /// Re-enters the machine after a data refresh.
    ///
    /// Keeps the current page when it still exists, otherwise clamps to the
    /// new last page.
    pub fn refresh(self, total_count: u64) -> Self {
        Self {
            total_count,
            ..self
        }
        .go_to(self.current_page)
    }

    pub fn is_first(&self) -> bool {
        self.current_page == 1
    }

    pub fn is_last(&self) -> bool {
        self.current_page == self.total_pages()
    }

    /// Index of the first item on the current page.
    pub fn offset(&self) -> u64 {
        u64::from(self.current_page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Current page's slice of a fully resident item list.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = usize::try_from(self.offset())
            .unwrap_or(usize::MAX)
            .min(items.len());
        let end = start
            .saturating_add(self.page_size as usize)
            .min(items.len());
        &items[start..end]
    }

    /// Page window around the current page.
    pub fn window(&self, radius: u32) -> Vec<PageItem> {
        compute_page_window(self.current_page, self.total_pages(), radius)
    }
}

/// Moves one page in `direction`; a move past either end returns `state`
/// unchanged.
pub fn advance(direction: Direction, state: PageState) -> PageState {
    match direction {
        Direction::Prev if state.is_first() => state,
        Direction::Next if state.is_last() => state,
        Direction::Prev => state.go_to(state.current_page.saturating_sub(1)),
        Direction::Next => state.go_to(state.current_page.saturating_add(1)),
    }
}

/// Builds the visible page sequence.
///
/// Always includes page 1, page `total`, and every page within `radius` of
/// `current`. A single [`PageItem::Ellipsis`] marks each gap between
/// consecutive included pages.
pub fn compute_page_window(current: u32, total: u32, radius: u32) -> Vec<PageItem> {
    if total <= 1 {
        return vec![PageItem::Page(1)];
    }

    let current = current.clamp(1, total);
    let near_start = current.saturating_sub(radius).max(2);
    let near_end = current.saturating_add(radius).min(total - 1);

    let mut included = vec![1];
    included.extend(near_start..=near_end);
    included.push(total);

    let mut window = Vec::with_capacity(included.len() + 2);
    let mut previous: Option<u32> = None;
    for page in included {
        if let Some(prev) = previous {
            if page - prev > 1 {
                window.push(PageItem::Ellipsis);
            }
        }
        window.push(PageItem::Page(page));
        previous = Some(page);
    }
    window
}

#[cfg(test)]
mod tests {
    use super::{compute_page_window, PageItem, PageState};

    #[test]
    fn total_pages_rounds_up_and_never_drops_below_one() {
        assert_eq!(PageState::new(20, 0).total_pages(), 1);
        assert_eq!(PageState::new(20, 20).total_pages(), 1);
        assert_eq!(PageState::new(20, 21).total_pages(), 2);
    }

    #[test]
    fn window_without_gaps_has_no_ellipsis() {
        let window = compute_page_window(2, 4, 2);
        assert_eq!(
            window,
            vec![
                PageItem::Page(1),
                PageItem::Page(2),
                PageItem::Page(3),
                PageItem::Page(4),
            ]
        );
    }

    #[test]
    fn slice_clips_last_partial_page() {
        let items: Vec<u32> = (1..=7).collect();
        let state = PageState::new(3, 7).go_to(3);
        assert_eq!(state.slice(&items), &[7]);
    }
}
