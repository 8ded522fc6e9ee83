/// Completely visible item positions (0-based) reported by the scroll host.
/// Either end is `None` when no item is completely visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibleRange {
    pub first: Option<usize>,
    pub last: Option<usize>,
}

impl VisibleRange {
    pub fn new(first: usize, last: usize) -> Self {
        Self {
            first: Some(first),
            last: Some(last),
        }
    }

    pub fn ending_at(last: usize) -> Self {
        Self {
            first: None,
            last: Some(last),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

/// Data source behind the grid.
pub trait ItemSource {
    /// Number of real items, excluding page padding.
    fn true_item_count(&self) -> usize;
}

/// The scrollable container hosting the grid. It owns the actual scroll
/// position and clamps scroll requests to its content bounds.
pub trait ScrollHost {
    /// Starts a smooth scroll. Completion is reported later as a settle event.
    fn smooth_scroll_by(&mut self, dx: i32, dy: i32);

    fn visible_range(&self) -> VisibleRange;
}
