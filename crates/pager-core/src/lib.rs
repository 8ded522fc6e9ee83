//! Pagination engine for grid scrollers.
//!
//! Groups a flat list of items into fixed-size pages of rows x columns,
//! tracks the visible page from scroll settle events and computes the scroll
//! distance of one page. Rendering and input stay with the host.

pub mod config;
pub mod controller;
pub mod error;
pub mod layout;
pub mod listener;
pub mod metrics;
pub mod page_math;
pub mod result;
pub mod traits;

pub use config::PagerSettings;
pub use controller::{PaginationController, PaginationState};
pub use error::PagerError;
pub use layout::{GridSpan, LayoutKind, Orientation, PageConfig, PageIndexPolicy};
pub use listener::{ListenerId, PageChange};
pub use metrics::{CellExtent, ContainerMetrics, Insets, Size};
pub use page_math::PageSize;
pub use result::PagerResult;
pub use traits::{ItemSource, ScrollHost, VisibleRange};
