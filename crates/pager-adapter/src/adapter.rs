//! Paged item adapter.
//!
//! Exposes a data set to the host grid padded up to whole pages, so the last
//! page always lays out complete rows and columns. Padding slots have no data
//! and ignore clicks.

use std::fmt;

use pager_core::page_math;
use pager_core::{ItemSource, PageSize, PaginationController};

/// What sits in a layout slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot<'a, T> {
    Item(&'a T),
    Padding,
}

impl<T> Slot<'_, T> {
    pub fn is_padding(&self) -> bool {
        matches!(self, Slot::Padding)
    }
}

/// Renders individual cells for the host.
pub trait CellBinder<T> {
    fn bind_item(&mut self, position: usize, item: &T);

    /// Padding cells render empty by default.
    fn bind_padding(&mut self, _position: usize) {}
}

type ItemClickCallback<T> = Box<dyn FnMut(usize, &T)>;

pub struct PagedAdapter<T> {
    page_size: PageSize,
    data: Vec<T>,
    on_item_click: Option<ItemClickCallback<T>>,
}

impl<T> PagedAdapter<T> {
    /// Empty adapter for pages of `page_size` slots.
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            data: Vec::new(),
            on_item_click: None,
        }
    }

    /// Picks up the controller's page size.
    pub fn attach(&mut self, controller: &PaginationController) {
        self.page_size = controller.page_size();
    }

    /// Slots per page.
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Replaces the data set and returns its true count. The caller must pass
    /// the count on to [`PaginationController::data_set_changed`].
    pub fn update_data(&mut self, data: Vec<T>) -> usize {
        self.data = data;
        tracing::debug!(
            "Data set changed: {} items, {} slots",
            self.data.len(),
            self.item_count()
        );
        self.data.len()
    }

    /// Number of real items, padding excluded.
    pub fn true_item_count(&self) -> usize {
        self.data.len()
    }

    /// Slots reported to the host grid, padding included.
    pub fn item_count(&self) -> usize {
        page_math::virtual_item_count(self.data.len(), self.page_size)
    }

    /// 1-based position of the slot within its page.
    pub fn item_view_type(&self, position: usize) -> usize {
        position % self.page_size.get() + 1
    }

    /// Item or padding at `position`; `None` past the last page.
    pub fn slot(&self, position: usize) -> Option<Slot<'_, T>> {
        if let Some(item) = self.data.get(position) {
            Some(Slot::Item(item))
        } else if position < self.item_count() {
            Some(Slot::Padding)
        } else {
            None
        }
    }

    /// Binds the slot at `position`; false when it is past the last page.
    pub fn bind(&self, position: usize, binder: &mut dyn CellBinder<T>) -> bool {
        match self.slot(position) {
            Some(Slot::Item(item)) => binder.bind_item(position, item),
            Some(Slot::Padding) => binder.bind_padding(position),
            None => return false,
        }
        true
    }

    /// Real items on the 1-based page `page_index`.
    pub fn page_items(&self, page_index: usize) -> &[T] {
        let size = self.page_size.get();
        let start = page_index.saturating_sub(1).saturating_mul(size).min(self.data.len());
        let end = start.saturating_add(size).min(self.data.len());
        &self.data[start..end]
    }

    /// Sets the listener called with real items on click.
    pub fn set_on_item_click(&mut self, callback: impl FnMut(usize, &T) + 'static) {
        self.on_item_click = Some(Box::new(callback));
    }

    /// Removes the item click listener.
    pub fn clear_on_item_click(&mut self) {
        self.on_item_click = None;
    }

    /// Dispatches a click on `position`. Returns whether a listener saw it.
    pub fn click(&mut self, position: usize) -> bool {
        let Some(item) = self.data.get(position) else {
            return false;
        };
        match self.on_item_click.as_mut() {
            Some(callback) => {
                callback(position, item);
                true
            }
            None => false,
        }
    }
}

impl<T> ItemSource for PagedAdapter<T> {
    fn true_item_count(&self) -> usize {
        self.data.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for PagedAdapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagedAdapter")
            .field("page_size", &self.page_size)
            .field("data", &self.data)
            .field("has_click_listener", &self.on_item_click.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingBinder {
        bound: Vec<String>,
    }

    impl CellBinder<&'static str> for RecordingBinder {
        fn bind_item(&mut self, position: usize, item: &&'static str) {
            self.bound.push(format!("{position}:{item}"));
        }

        fn bind_padding(&mut self, position: usize) {
            self.bound.push(format!("{position}:-"));
        }
    }

    fn adapter(page_size: usize, data: Vec<&'static str>) -> PagedAdapter<&'static str> {
        let mut adapter = PagedAdapter::new(PageSize::new(page_size).unwrap());
        adapter.update_data(data);
        adapter
    }

    #[test]
    fn test_counts_pad_to_whole_pages() {
        let partial = adapter(3, vec!["a", "b", "c", "d", "e", "f", "g"]);
        assert_eq!(partial.true_item_count(), 7);
        assert_eq!(partial.item_count(), 9);

        let full = adapter(3, vec!["a", "b", "c", "d", "e", "f"]);
        assert_eq!(full.item_count(), 6);

        let empty = adapter(3, vec![]);
        assert_eq!(empty.item_count(), 0);
    }

    #[test]
    fn test_view_type_is_slot_within_page() {
        let adapter = adapter(4, vec!["a"]);
        assert_eq!(adapter.item_view_type(0), 1);
        assert_eq!(adapter.item_view_type(3), 4);
        assert_eq!(adapter.item_view_type(4), 1);
        assert_eq!(adapter.item_view_type(6), 3);
    }

    #[test]
    fn test_slots() {
        let adapter = adapter(3, vec!["a", "b"]);
        assert_eq!(adapter.slot(1), Some(Slot::Item(&"b")));
        assert!(adapter.slot(2).unwrap().is_padding());
        assert_eq!(adapter.slot(3), None);
    }

    #[test]
    fn test_bind_items_and_padding() {
        let adapter = adapter(4, vec!["a", "b", "c", "d", "e"]);
        let mut binder = RecordingBinder::default();
        for position in 0..adapter.item_count() {
            assert!(adapter.bind(position, &mut binder));
        }
        assert!(!adapter.bind(8, &mut binder));
        assert_eq!(
            binder.bound,
            vec!["0:a", "1:b", "2:c", "3:d", "4:e", "5:-", "6:-", "7:-"]
        );
    }

    #[test]
    fn test_page_items() {
        let adapter = adapter(3, vec!["a", "b", "c", "d", "e", "f", "g"]);
        assert_eq!(adapter.page_items(1), &["a", "b", "c"]);
        assert_eq!(adapter.page_items(3), &["g"]);
        assert!(adapter.page_items(4).is_empty());
    }

    #[test]
    fn test_click_dispatches_real_items_only() {
        let mut adapter = adapter(3, vec!["a", "b"]);
        assert!(!adapter.click(0));

        let clicked = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&clicked);
        adapter.set_on_item_click(move |position, item| sink.borrow_mut().push((position, *item)));

        assert!(adapter.click(1));
        assert!(!adapter.click(2));
        assert!(!adapter.click(10));
        assert_eq!(*clicked.borrow(), vec![(1, "b")]);

        adapter.clear_on_item_click();
        assert!(!adapter.click(0));
    }

    #[test]
    fn test_attach_takes_controller_page_size() {
        let mut controller = PaginationController::default();
        controller.set_grid(2, 5).unwrap();
        let mut adapter: PagedAdapter<u32> = PagedAdapter::new(PageSize::new(1).unwrap());
        adapter.attach(&controller);
        assert_eq!(adapter.page_size().get(), 10);
    }
}
