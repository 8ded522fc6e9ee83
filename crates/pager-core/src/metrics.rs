//! Scroll metrics.
//!
//! Turns the container's measured size and the grid span into the per-item
//! size along the scroll axis and the scroll distance of exactly one page.
//! The distance is always a whole multiple of the item size so that paging
//! lands on item boundaries.

use crate::layout::{GridSpan, Orientation};

/// Measured size of the container, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Space around content: container padding or a cell's margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Insets {
    pub start: u32,
    pub end: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub fn uniform(inset: u32) -> Self {
        Self {
            start: inset,
            end: inset,
            top: inset,
            bottom: inset,
        }
    }

    /// Leading plus trailing inset along `orientation`.
    pub fn along(&self, orientation: Orientation) -> u32 {
        match orientation {
            Orientation::Horizontal => self.start.saturating_add(self.end),
            Orientation::Vertical => self.top.saturating_add(self.bottom),
        }
    }
}

/// Size a visible cell is forced to along the scroll axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellExtent {
    Width(u32),
    Height(u32),
}

/// Geometry derived from the latest measurement pass.
///
/// Item sizes stay `None` until the container has been measured with a grid
/// attached; only the size along the scroll axis is ever derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContainerMetrics {
    available_width: u32,
    available_height: u32,
    item_width: Option<u32>,
    item_height: Option<u32>,
    scroll_distance: u32,
}

impl ContainerMetrics {
    /// Metrics before any measurement pass; item sizes are `None`.
    pub fn unmeasured() -> Self {
        Self::default()
    }

    /// Derives metrics from the container size minus `padding`.
    pub fn measure(size: Size, padding: Insets, span: GridSpan, orientation: Orientation) -> Self {
        let available_width = size.width.saturating_sub(padding.along(Orientation::Horizontal));
        let available_height = size.height.saturating_sub(padding.along(Orientation::Vertical));

        let mut metrics = Self {
            available_width,
            available_height,
            ..Self::default()
        };

        let cells = u32::try_from(span.cells_along(orientation)).unwrap_or(u32::MAX);
        match orientation {
            Orientation::Horizontal => {
                metrics.item_width = Some(available_width / cells);
                metrics.scroll_distance = available_width - available_width % cells;
            }
            Orientation::Vertical => {
                metrics.item_height = Some(available_height / cells);
                metrics.scroll_distance = available_height - available_height % cells;
            }
        }
        metrics
    }

    /// Content width inside the padding.
    pub fn available_width(&self) -> u32 {
        self.available_width
    }

    /// Content height inside the padding.
    pub fn available_height(&self) -> u32 {
        self.available_height
    }

    /// Cell width; only set for horizontal grids.
    pub fn item_width(&self) -> Option<u32> {
        self.item_width
    }

    /// Cell height; only set for vertical grids.
    pub fn item_height(&self) -> Option<u32> {
        self.item_height
    }

    /// Pixels one page scroll moves, a multiple of the item size.
    pub fn scroll_distance(&self) -> u32 {
        self.scroll_distance
    }

    /// Cell size along `orientation`.
    pub fn item_size(&self, orientation: Orientation) -> Option<u32> {
        match orientation {
            Orientation::Horizontal => self.item_width,
            Orientation::Vertical => self.item_height,
        }
    }

    /// Whether a measurement pass produced an item size.
    pub fn is_measured(&self) -> bool {
        self.item_width.is_some() || self.item_height.is_some()
    }

    /// Extent a cell with `margins` gets so that exactly one page's worth of
    /// cells fills the available span. `None` while unmeasured.
    pub fn cell_extent(&self, orientation: Orientation, margins: Insets) -> Option<CellExtent> {
        let item = self.item_size(orientation)?;
        let extent = item.saturating_sub(margins.along(orientation));
        Some(match orientation {
            Orientation::Horizontal => CellExtent::Width(extent),
            Orientation::Vertical => CellExtent::Height(extent),
        })
    }
}
