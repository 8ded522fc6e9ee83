//! Page controller.
//!
//! Tracks which page of the grid is showing and how many pages there are,
//! driven by data set changes, scroll settle events and layout configuration.
//! Page navigation is issued to a [`ScrollHost`] as a fire-and-forget smooth
//! scroll; the resulting position comes back later as a settle event.

use crate::config::PagerSettings;
use crate::error::PagerError;
use crate::layout::{GridSpan, LayoutKind, Orientation, PageConfig, PageIndexPolicy};
use crate::listener::{ListenerId, PageChange, PageListeners};
use crate::metrics::{CellExtent, ContainerMetrics, Insets, Size};
use crate::page_math::{self, PageSize};
use crate::result::PagerResult;
use crate::traits::{ItemSource, ScrollHost, VisibleRange};

/// Page position of the grid. `1 <= page_index <= page_count` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    item_count: usize,
    page_index: usize,
    page_count: usize,
}

impl PaginationState {
    /// True item count, padding excluded.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Current page, 1-based.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Total pages, at least 1.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn page_change(&self) -> PageChange {
        PageChange {
            page_index: self.page_index,
            page_count: self.page_count,
        }
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            item_count: 0,
            page_index: 1,
            page_count: 1,
        }
    }
}

#[derive(Debug)]
pub struct PaginationController {
    config: PageConfig,
    policy: PageIndexPolicy,
    grid_attached: bool,
    metrics: ContainerMetrics,
    visible: VisibleRange,
    state: PaginationState,
    listeners: PageListeners,
}

impl PaginationController {
    /// Creates a controller with no grid layout attached yet. Metrics stay
    /// unmeasured until [`attach_layout`](Self::attach_layout) or
    /// [`configure_layout`](Self::configure_layout) is called.
    pub fn new(config: PageConfig) -> Self {
        Self {
            config,
            policy: PageIndexPolicy::default(),
            grid_attached: false,
            metrics: ContainerMetrics::unmeasured(),
            visible: VisibleRange::empty(),
            state: PaginationState::default(),
            listeners: PageListeners::new(),
        }
    }

    pub fn from_settings(settings: &PagerSettings) -> PagerResult<Self> {
        let config = settings.page_config().map_err(reject)?;
        let mut controller = Self::new(config).with_index_policy(settings.index_policy);
        controller.grid_attached = true;
        Ok(controller)
    }

    pub fn with_index_policy(mut self, policy: PageIndexPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn set_index_policy(&mut self, policy: PageIndexPolicy) {
        let previous = self.state.page_change();
        self.policy = policy;
        self.reindex();
        self.commit(previous);
    }

    // Configuration

    /// Sets the page size without rows/columns; the span is unknown until the
    /// next grid configuration, so the container must be measured again.
    pub fn set_page_size(&mut self, page_size: usize) -> PagerResult<()> {
        let page_size = PageSize::new(page_size).map_err(reject)?;
        self.config.set_page_size(page_size);
        self.page_size_changed();
        Ok(())
    }

    /// Sets rows and columns; the page size becomes `rows * columns`.
    pub fn set_grid(&mut self, rows: usize, columns: usize) -> PagerResult<()> {
        let span = GridSpan::new(rows, columns).map_err(reject)?;
        self.config.set_span(span);
        self.page_size_changed();
        Ok(())
    }

    /// Attaches a grid of `rows` x `columns` scrolling along `orientation`.
    pub fn configure_layout(
        &mut self,
        rows: usize,
        columns: usize,
        orientation: Orientation,
    ) -> PagerResult<()> {
        let span = GridSpan::new(rows, columns).map_err(reject)?;
        self.config.set_span(span);
        self.config.set_orientation(orientation);
        self.grid_attached = true;
        self.page_size_changed();
        Ok(())
    }

    /// Attaches the host's layout. Only grids are accepted; the missing grid
    /// dimension is derived from the span count and the current page size.
    pub fn attach_layout(&mut self, layout: LayoutKind) -> PagerResult<()> {
        match layout {
            LayoutKind::Linear { orientation } => Err(reject(PagerError::NotAGrid(format!(
                "linear layout ({orientation:?})"
            )))),
            LayoutKind::Grid {
                span_count,
                orientation,
            } => {
                let span =
                    GridSpan::from_span_count(span_count, self.config.page_size(), orientation)
                        .map_err(reject)?;
                self.config.set_span(span);
                self.config.set_orientation(orientation);
                self.grid_attached = true;
                self.metrics = ContainerMetrics::unmeasured();
                tracing::debug!(
                    "Attached {:?} grid: {} rows x {} columns",
                    orientation,
                    span.rows(),
                    span.columns()
                );
                Ok(())
            }
        }
    }

    // Events

    /// Measurement pass: `size` is the container's measured size, `padding` its
    /// content padding.
    pub fn measure(&mut self, size: Size, padding: Insets) {
        if !self.grid_attached {
            tracing::debug!("No grid layout attached, skipping metrics");
            return;
        }
        let Some(span) = self.config.span() else {
            tracing::warn!(
                "Page size {} has no rows/columns yet, skipping metrics",
                self.config.page_size()
            );
            self.metrics = ContainerMetrics::unmeasured();
            return;
        };
        self.metrics = ContainerMetrics::measure(size, padding, span, self.config.orientation());
        tracing::debug!(
            "Available scroll distance: {} item width: {:?} height: {:?}",
            self.metrics.scroll_distance(),
            self.metrics.item_width(),
            self.metrics.item_height()
        );
    }

    /// The data source's true item count changed. The page index is left to
    /// the next settle event.
    pub fn data_set_changed(&mut self, true_count: usize) {
        if true_count == self.state.item_count {
            return;
        }
        let previous = self.state.page_change();
        self.state.item_count = true_count;
        self.recount();
        self.commit(previous);
    }

    /// Scrolling came to rest with `visible` completely on screen.
    pub fn scroll_settled(&mut self, visible: VisibleRange) {
        let previous = self.state.page_change();
        self.visible = visible;
        self.reindex();
        self.commit(previous);
    }

    /// Re-derives count and index from the data source and the host.
    pub fn relayout(&mut self, source: &dyn ItemSource, host: &dyn ScrollHost) {
        let previous = self.state.page_change();
        self.state.item_count = source.true_item_count();
        self.visible = host.visible_range();
        self.recount();
        self.reindex();
        self.commit(previous);
    }

    // Navigation

    /// Scrolls forward by one page. Returns whether a scroll was issued; the
    /// host clamps at its end, so check [`is_last_page`](Self::is_last_page)
    /// first if that matters.
    pub fn next_page(&self, host: &mut dyn ScrollHost) -> bool {
        self.scroll_by_page(host, true)
    }

    pub fn previous_page(&self, host: &mut dyn ScrollHost) -> bool {
        self.scroll_by_page(host, false)
    }

    fn scroll_by_page(&self, host: &mut dyn ScrollHost, forward: bool) -> bool {
        if !self.metrics.is_measured() {
            tracing::warn!("Page scroll requested before the container was measured, skipping");
            return false;
        }
        let distance = i32::try_from(self.metrics.scroll_distance()).unwrap_or(i32::MAX);
        if distance == 0 {
            tracing::warn!("Container has no room for a page, skipping scroll");
            return false;
        }
        let delta = if forward { distance } else { -distance };
        tracing::debug!("Scrolling by {} from page {}", delta, self.state.page_index);
        // only the scroll axis moves; the host ignores the other delta
        host.smooth_scroll_by(delta, delta);
        true
    }

    // Queries

    /// Snapshot of item count, page index and page count.
    pub fn state(&self) -> PaginationState {
        self.state
    }

    /// Current page, 1-based.
    pub fn page_index(&self) -> usize {
        self.state.page_index
    }

    /// Total pages; 1 for an empty data set.
    pub fn page_count(&self) -> usize {
        self.state.page_count
    }

    /// True item count, padding excluded.
    pub fn item_count(&self) -> usize {
        self.state.item_count
    }

    /// Item slots per page.
    pub fn page_size(&self) -> PageSize {
        self.config.page_size()
    }

    /// Current page shape and orientation.
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Which visible item decides the page on settle.
    pub fn index_policy(&self) -> PageIndexPolicy {
        self.policy
    }

    /// Geometry from the latest measurement pass.
    pub fn metrics(&self) -> &ContainerMetrics {
        &self.metrics
    }

    /// Whether the current page is page 1.
    pub fn is_first_page(&self) -> bool {
        self.state.page_index == 1
    }

    /// Whether the current page is the last one.
    pub fn is_last_page(&self) -> bool {
        self.state.page_index == self.state.page_count
    }

    /// Real items on the current page.
    pub fn visible_items_in_current_page(&self) -> usize {
        page_math::items_on_page(self.state.item_count, self.page_size(), self.is_last_page())
    }

    /// Slots the host grid must lay out, padding included.
    pub fn virtual_item_count(&self) -> usize {
        page_math::virtual_item_count(self.state.item_count, self.page_size())
    }

    /// Size a newly visible cell is forced to along the scroll axis.
    /// `None` until measured; the cell keeps its own size then.
    pub fn cell_extent(&self, margins: Insets) -> Option<CellExtent> {
        self.metrics.cell_extent(self.config.orientation(), margins)
    }

    // Listeners

    pub fn subscribe(&mut self, callback: impl FnMut(PageChange) + 'static) -> ListenerId {
        self.listeners.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Replaces all listeners with `callback`.
    pub fn set_on_page_change(&mut self, callback: impl FnMut(PageChange) + 'static) -> ListenerId {
        self.listeners.replace(callback)
    }

    fn page_size_changed(&mut self) {
        let previous = self.state.page_change();
        self.metrics = ContainerMetrics::unmeasured();
        self.recount();
        self.reindex();
        self.commit(previous);
    }

    fn recount(&mut self) {
        self.state.page_count = page_math::page_count(self.state.item_count, self.page_size());
        // a shrinking data set can strand the index until the host settles again
        self.state.page_index = self.state.page_index.min(self.state.page_count);
    }

    fn reindex(&mut self) {
        let position = match self.policy {
            PageIndexPolicy::LastVisible => self.visible.last.or(self.visible.first),
            PageIndexPolicy::FirstVisible => self.visible.first.or(self.visible.last),
        };
        let items_seen = position.map_or(0, |p| p.saturating_add(1));
        let index = page_math::page_index_from_position(items_seen, self.page_size());
        if index > self.state.page_count {
            tracing::warn!(
                "Visible position {:?} maps to page {} past the last page {}, using the last page",
                position,
                index,
                self.state.page_count
            );
        }
        self.state.page_index = index.min(self.state.page_count);
    }

    fn commit(&mut self, previous: PageChange) {
        let current = self.state.page_change();
        if current == previous {
            return;
        }
        tracing::debug!(
            "Page changed: {}/{} -> {}/{}",
            previous.page_index,
            previous.page_count,
            current.page_index,
            current.page_count
        );
        self.listeners.notify(current);
    }
}

impl Default for PaginationController {
    fn default() -> Self {
        Self::new(PageConfig::default())
    }
}

fn reject(err: PagerError) -> PagerError {
    tracing::warn!("Rejected pager configuration: {}", err);
    err
}
