//! Page change observers.

use std::fmt;

/// Current page and total pages, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageChange {
    pub page_index: usize,
    pub page_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type PageCallback = Box<dyn FnMut(PageChange)>;

/// Registered page change callbacks, called in subscription order.
#[derive(Default)]
pub struct PageListeners {
    next_id: u64,
    entries: Vec<(ListenerId, PageCallback)>,
}

impl PageListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(PageChange) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Drops every listener and installs `callback` as the only one.
    pub fn replace(&mut self, callback: impl FnMut(PageChange) + 'static) -> ListenerId {
        self.entries.clear();
        self.subscribe(callback)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn notify(&mut self, change: PageChange) {
        tracing::trace!(
            "Page change {}/{} to {} listener(s)",
            change.page_index,
            change.page_count,
            self.entries.len()
        );
        for (_, callback) in self.entries.iter_mut() {
            callback(change);
        }
    }
}

impl fmt::Debug for PageListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageListeners")
            .field("len", &self.entries.len())
            .finish()
    }
}
