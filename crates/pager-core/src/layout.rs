//! Grid shape configuration.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::PagerError;
use crate::page_math::PageSize;
use crate::result::PagerResult;

/// Axis the grid scrolls along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

impl Orientation {
    pub fn is_horizontal(self) -> bool {
        self == Orientation::Horizontal
    }

    pub fn is_vertical(self) -> bool {
        self == Orientation::Vertical
    }
}

/// Which completely visible item decides the current page once scrolling settles.
///
/// `LastVisible` flips to the next page as soon as one of its items is fully
/// on screen. `FirstVisible` stays on a page until its first item has left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageIndexPolicy {
    #[default]
    LastVisible,
    FirstVisible,
}

/// Layout the host lays items out with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// `span_count` is the number of rows when scrolling horizontally and the
    /// number of columns when scrolling vertically.
    Grid {
        span_count: usize,
        orientation: Orientation,
    },
    Linear {
        orientation: Orientation,
    },
}

const DEFAULT_ROWS: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(n) => n,
    None => unreachable!(),
};
const DEFAULT_COLUMNS: NonZeroUsize = match NonZeroUsize::new(2) {
    Some(n) => n,
    None => unreachable!(),
};

/// Rows and columns of one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSpan {
    rows: NonZeroUsize,
    columns: NonZeroUsize,
}

impl GridSpan {
    pub fn new(rows: usize, columns: usize) -> PagerResult<Self> {
        let invalid = PagerError::InvalidSpan { rows, columns };
        let (Some(r), Some(c)) = (NonZeroUsize::new(rows), NonZeroUsize::new(columns)) else {
            return Err(invalid);
        };
        // page size must stay representable
        if r.checked_mul(c).is_none() {
            return Err(invalid);
        }
        Ok(Self { rows: r, columns: c })
    }

    /// Derives the missing dimension from a grid's span count and an existing
    /// page size. The page size must split evenly into `span_count` lines.
    pub fn from_span_count(
        span_count: usize,
        page_size: PageSize,
        orientation: Orientation,
    ) -> PagerResult<Self> {
        let invalid = PagerError::InvalidSpanCount {
            span_count,
            page_size: page_size.get(),
        };
        if span_count == 0 || page_size.get() % span_count != 0 {
            return Err(invalid);
        }
        let other = page_size.get() / span_count;
        match orientation {
            Orientation::Horizontal => Self::new(span_count, other),
            Orientation::Vertical => Self::new(other, span_count),
        }
        .map_err(|_| invalid)
    }

    pub fn rows(&self) -> usize {
        self.rows.get()
    }

    pub fn columns(&self) -> usize {
        self.columns.get()
    }

    pub fn page_size(&self) -> PageSize {
        PageSize::from_nonzero(self.rows.saturating_mul(self.columns))
    }

    /// Number of cells sharing the scroll axis' extent: columns for a
    /// horizontal grid, rows for a vertical one.
    pub fn cells_along(&self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Horizontal => self.columns(),
            Orientation::Vertical => self.rows(),
        }
    }
}

/// Shape of a page.
///
/// The span is `None` after [`PageConfig::set_page_size`] until a grid span is
/// known again, so `page_size` always equals rows x columns when a span is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    span: Option<GridSpan>,
    page_size: PageSize,
    orientation: Orientation,
}

impl PageConfig {
    pub fn new(span: GridSpan, orientation: Orientation) -> Self {
        Self {
            span: Some(span),
            page_size: span.page_size(),
            orientation,
        }
    }

    pub fn span(&self) -> Option<GridSpan> {
        self.span
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_span(&mut self, span: GridSpan) {
        self.span = Some(span);
        self.page_size = span.page_size();
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        if self.span.map(|s| s.page_size()) != Some(page_size) {
            self.span = None;
        }
        self.page_size = page_size;
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }
}

impl Default for PageConfig {
    /// Three rows of two columns, scrolling vertically.
    fn default() -> Self {
        let span = GridSpan {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
        };
        Self::new(span, Orientation::Vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_rejects_zero() {
        assert!(matches!(
            GridSpan::new(0, 3),
            Err(PagerError::InvalidSpan { rows: 0, columns: 3 })
        ));
        assert!(GridSpan::new(2, 0).is_err());
        assert!(GridSpan::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn test_span_from_span_count_horizontal() {
        let ps = PageSize::new(6).unwrap();
        let span = GridSpan::from_span_count(2, ps, Orientation::Horizontal).unwrap();
        assert_eq!(span.rows(), 2);
        assert_eq!(span.columns(), 3);
        assert_eq!(span.cells_along(Orientation::Horizontal), 3);
    }

    #[test]
    fn test_span_from_span_count_vertical() {
        let ps = PageSize::new(6).unwrap();
        let span = GridSpan::from_span_count(2, ps, Orientation::Vertical).unwrap();
        assert_eq!(span.rows(), 3);
        assert_eq!(span.columns(), 2);
        assert_eq!(span.cells_along(Orientation::Vertical), 3);
    }

    #[test]
    fn test_span_from_span_count_invalid() {
        let ps = PageSize::new(6).unwrap();
        assert!(GridSpan::from_span_count(0, ps, Orientation::Vertical).is_err());
        assert!(GridSpan::from_span_count(4, ps, Orientation::Vertical).is_err());
        assert!(GridSpan::from_span_count(7, ps, Orientation::Horizontal).is_err());
    }

    #[test]
    fn test_default_config() {
        let config = PageConfig::default();
        assert_eq!(config.page_size().get(), 6);
        assert_eq!(config.span(), Some(GridSpan::new(3, 2).unwrap()));
        assert!(config.orientation().is_vertical());
    }

    #[test]
    fn test_page_size_alone_drops_span() {
        let mut config = PageConfig::default();
        config.set_page_size(PageSize::new(8).unwrap());
        assert_eq!(config.page_size().get(), 8);
        assert!(config.span().is_none());

        config.set_span(GridSpan::new(2, 4).unwrap());
        assert_eq!(config.page_size().get(), 8);
        assert!(config.span().is_some());
    }

    #[test]
    fn test_same_page_size_keeps_span() {
        let mut config = PageConfig::default();
        config.set_page_size(PageSize::new(6).unwrap());
        assert!(config.span().is_some());
    }
}
