//! Grid binding side of the pager: exposes a data set padded to whole pages
//! and keeps it in step with a [`pager_core::PaginationController`].

pub mod adapter;
pub mod grid;

pub use adapter::{CellBinder, PagedAdapter, Slot};
pub use grid::PagedGrid;
