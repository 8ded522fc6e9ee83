//! Page arithmetic.
//!
//! Pure functions converting item counts and positions into page numbers.
//! Pages are 1-indexed and there is always at least one page, so an empty
//! data set is reported as a single empty first page.

use std::fmt;
use std::num::NonZeroUsize;

use crate::error::PagerError;
use crate::result::PagerResult;

/// Number of item slots on one page (rows x columns).
///
/// Zero is unrepresentable, so none of the functions below can divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub fn new(size: usize) -> PagerResult<Self> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or(PagerError::InvalidPageSize(size))
    }

    pub(crate) fn from_nonzero(size: NonZeroUsize) -> Self {
        Self(size)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for PageSize {
    type Error = PagerError;

    fn try_from(size: usize) -> PagerResult<Self> {
        Self::new(size)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of pages needed to hold `item_count` items. Never less than 1.
pub fn page_count(item_count: usize, page_size: PageSize) -> usize {
    if item_count == 0 {
        return 1;
    }
    item_count.div_ceil(page_size.get())
}

/// Page holding the `items_seen`-th item (1-based), using the same ceiling
/// rule as [`page_count`].
pub fn page_index_from_position(items_seen: usize, page_size: PageSize) -> usize {
    page_count(items_seen, page_size)
}

/// `true_count` rounded up to a whole number of pages.
///
/// Only for allocating layout slots; the padding slots carry no data.
/// Saturates at `usize::MAX`.
pub fn virtual_item_count(true_count: usize, page_size: PageSize) -> usize {
    let remains = true_count % page_size.get();
    if remains > 0 {
        true_count.saturating_add(page_size.get() - remains)
    } else {
        true_count
    }
}

/// Items with real data on a page: the remainder on the last page, a full
/// page everywhere else, and 0 when there is no data at all.
pub fn items_on_page(true_count: usize, page_size: PageSize, is_last_page: bool) -> usize {
    if true_count == 0 {
        return 0;
    }
    if is_last_page {
        (true_count - 1) % page_size.get() + 1
    } else {
        page_size.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> PageSize {
        PageSize::new(n).unwrap()
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(matches!(
            PageSize::new(0),
            Err(PagerError::InvalidPageSize(0))
        ));
        assert!(PageSize::try_from(0usize).is_err());
        assert_eq!(PageSize::try_from(4usize).unwrap().get(), 4);
    }

    #[test]
    fn test_empty_data_is_one_page() {
        assert_eq!(page_count(0, size(5)), 1);
        assert_eq!(page_index_from_position(0, size(5)), 1);
        assert_eq!(items_on_page(0, size(5), true), 0);
    }

    #[test]
    fn test_partial_last_page() {
        let ps = size(3);
        assert_eq!(page_count(7, ps), 3);
        assert_eq!(items_on_page(7, ps, true), 1);
        assert_eq!(items_on_page(7, ps, false), 3);
        assert_eq!(virtual_item_count(7, ps), 9);
    }

    #[test]
    fn test_full_last_page() {
        let ps = size(3);
        assert_eq!(page_count(6, ps), 2);
        assert_eq!(items_on_page(6, ps, true), 3);
        assert_eq!(virtual_item_count(6, ps), 6);
    }

    #[test]
    fn test_virtual_count_saturates() {
        assert_eq!(virtual_item_count(usize::MAX, size(4)), usize::MAX);
        assert_eq!(virtual_item_count(usize::MAX - 1, size(2)), usize::MAX - 1);
    }

    #[test]
    fn test_page_index_uses_ceiling() {
        let ps = size(4);
        assert_eq!(page_index_from_position(1, ps), 1);
        assert_eq!(page_index_from_position(4, ps), 1);
        assert_eq!(page_index_from_position(5, ps), 2);
        assert_eq!(page_index_from_position(6, ps), 2);
        assert_eq!(page_index_from_position(9, ps), 3);
    }

    #[test]
    fn test_page_count_properties() {
        for page_size in 1..=7 {
            let ps = size(page_size);
            for count in 0..=50 {
                assert!(page_count(count, ps) >= 1);
                assert_eq!(virtual_item_count(count, ps) % page_size, 0);
                assert!(virtual_item_count(count, ps) >= count);
                if count > 0 {
                    assert_eq!(page_count(count + page_size, ps), page_count(count, ps) + 1);

                    let pages = page_count(count, ps);
                    let last = items_on_page(count, ps, true);
                    assert_eq!(last, count - (pages - 1) * page_size);
                    assert!((1..=page_size).contains(&last));
                }
            }
        }
    }
}
