//! A paged adapter and its controller kept in step.

use pager_core::{
    CellExtent, Insets, LayoutKind, ListenerId, Orientation, PageChange, PagerResult,
    PaginationController, ScrollHost, Size, VisibleRange,
};

use crate::adapter::PagedAdapter;

/// Owns a [`PaginationController`] and the [`PagedAdapter`] feeding it.
///
/// Page size changes are pushed to the adapter and data set changes to the
/// controller, so the two never disagree about page boundaries.
#[derive(Debug)]
pub struct PagedGrid<T> {
    controller: PaginationController,
    adapter: PagedAdapter<T>,
}

impl<T> PagedGrid<T> {
    /// Wraps `controller` with an empty adapter of the same page size.
    pub fn new(controller: PaginationController) -> Self {
        let adapter = PagedAdapter::new(controller.page_size());
        Self {
            controller,
            adapter,
        }
    }

    /// Page state, metrics and queries.
    pub fn controller(&self) -> &PaginationController {
        &self.controller
    }

    /// Slots, view types and binding for the host grid.
    pub fn adapter(&self) -> &PagedAdapter<T> {
        &self.adapter
    }

    /// Replaces the data set and recounts pages.
    pub fn update_data(&mut self, data: Vec<T>) {
        let count = self.adapter.update_data(data);
        self.controller.data_set_changed(count);
    }

    /// Attaches a rows x columns grid; see [`PaginationController::configure_layout`].
    pub fn configure_layout(
        &mut self,
        rows: usize,
        columns: usize,
        orientation: Orientation,
    ) -> PagerResult<()> {
        self.controller.configure_layout(rows, columns, orientation)?;
        self.adapter.attach(&self.controller);
        Ok(())
    }

    /// Attaches the host layout; only grids are accepted.
    pub fn attach_layout(&mut self, layout: LayoutKind) -> PagerResult<()> {
        self.controller.attach_layout(layout)?;
        self.adapter.attach(&self.controller);
        Ok(())
    }

    /// Sets the page size without rows/columns.
    pub fn set_page_size(&mut self, page_size: usize) -> PagerResult<()> {
        self.controller.set_page_size(page_size)?;
        self.adapter.attach(&self.controller);
        Ok(())
    }

    /// Sets rows and columns of a page.
    pub fn set_grid(&mut self, rows: usize, columns: usize) -> PagerResult<()> {
        self.controller.set_grid(rows, columns)?;
        self.adapter.attach(&self.controller);
        Ok(())
    }

    /// Measurement pass for the container.
    pub fn measure(&mut self, size: Size, padding: Insets) {
        self.controller.measure(size, padding);
    }

    /// Scrolling came to rest with `visible` completely on screen.
    pub fn scroll_settled(&mut self, visible: VisibleRange) {
        self.controller.scroll_settled(visible);
    }

    /// Re-derives page count and index from the data and `host`.
    pub fn relayout(&mut self, host: &dyn ScrollHost) {
        self.controller.relayout(&self.adapter, host);
    }

    /// Scrolls one page forward; false if metrics are stale.
    pub fn next_page(&self, host: &mut dyn ScrollHost) -> bool {
        self.controller.next_page(host)
    }

    /// Scrolls one page back; false if metrics are stale.
    pub fn previous_page(&self, host: &mut dyn ScrollHost) -> bool {
        self.controller.previous_page(host)
    }

    /// Real items on the current page.
    pub fn current_page_items(&self) -> &[T] {
        self.adapter.page_items(self.controller.page_index())
    }

    /// Forced cell size along the scroll axis, once measured.
    pub fn cell_extent(&self, margins: Insets) -> Option<CellExtent> {
        self.controller.cell_extent(margins)
    }

    /// Dispatches a click on `position`; padding is ignored.
    pub fn click(&mut self, position: usize) -> bool {
        self.adapter.click(position)
    }

    /// Sets the item click listener.
    pub fn set_on_item_click(&mut self, callback: impl FnMut(usize, &T) + 'static) {
        self.adapter.set_on_item_click(callback);
    }

    /// Adds a page change listener.
    pub fn subscribe(&mut self, callback: impl FnMut(PageChange) + 'static) -> ListenerId {
        self.controller.subscribe(callback)
    }

    /// Removes a page change listener.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.controller.unsubscribe(id)
    }

    /// Replaces all page change listeners with `callback`.
    pub fn set_on_page_change(&mut self, callback: impl FnMut(PageChange) + 'static) -> ListenerId {
        self.controller.set_on_page_change(callback)
    }
}

impl<T> Default for PagedGrid<T> {
    fn default() -> Self {
        Self::new(PaginationController::default())
    }
}
