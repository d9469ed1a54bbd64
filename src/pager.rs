use crate::error::PaginateError;
use serde::{Deserialize, Serialize};

/// Position of one page within a paginated collection. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub number: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl PageInfo {
    pub fn has_prev(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    pub fn prev(&self) -> Option<usize> {
        self.has_prev().then(|| self.number - 1)
    }

    pub fn next(&self) -> Option<usize> {
        self.has_next().then(|| self.number + 1)
    }

    pub fn is_last(&self) -> bool {
        self.number >= self.total_pages
    }
}

/// A page size validated once, reused across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Result<Self, PaginateError> {
        if page_size == 0 {
            return Err(PaginateError::invalid_argument(
                "page size must be greater than zero",
            ));
        }
        Ok(Self { page_size })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.page_size)
    }

    /// Describe page `number` of a collection holding `total_items` items.
    /// An out-of-range `number` is representable; it just has no next page.
    pub fn info(&self, total_items: usize, number: usize) -> PageInfo {
        PageInfo {
            number,
            page_size: self.page_size,
            total_items,
            total_pages: self.total_pages(total_items),
        }
    }

    /// Borrowed, copy-free page over an already-materialized slice. Same
    /// rules as [`get_page`](crate::paginate::get_page): an empty slice pages
    /// to an empty slice before the page number is validated, and a page past
    /// the end is empty.
    pub fn page<'a, T>(&self, items: &'a [T], number: usize) -> Result<&'a [T], PaginateError> {
        if items.is_empty() {
            return Ok(&[]);
        }
        if number == 0 {
            return Err(PaginateError::invalid_argument(
                "page number must be greater than zero",
            ));
        }
        let Some(skip) = (number - 1).checked_mul(self.page_size) else {
            return Ok(&[]);
        };
        if skip >= items.len() {
            return Ok(&[]);
        }
        let end = skip.saturating_add(self.page_size).min(items.len());
        Ok(&items[skip..end])
    }

    /// Every page of `items` in order, each with its position.
    pub fn pages<'a, T>(&self, items: &'a [T]) -> Vec<(&'a [T], PageInfo)> {
        let total_items = items.len();
        items
            .chunks(self.page_size)
            .enumerate()
            .map(|(i, chunk)| (chunk, self.info(total_items, i + 1)))
            .collect()
    }
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    20
}

/// Caller-supplied pagination parameters, e.g. decoded from a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl PageRequest {
    /// Floor the page to 1, cap the size at `max_page_size`, and hand back a
    /// ready [`Pager`] with the page number to fetch.
    pub fn normalize(self, max_page_size: usize) -> Result<(Pager, usize), PaginateError> {
        let page = self.page.max(1);
        let size = self.page_size.clamp(1, max_page_size.max(1));
        Ok((Pager::new(size)?, page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_page_size() {
        assert!(Pager::new(0).is_err());
    }

    #[test]
    fn twenty_three_items_size_ten() {
        let pager = Pager::new(10).unwrap();
        let items: Vec<u32> = (0..23).collect();
        let pages = pager.pages(&items);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].0.len(), 10);
        assert_eq!(pages[1].0.len(), 10);
        assert_eq!(pages[2].0.len(), 3);
        assert_eq!(pages[2].1.number, 3);
        assert_eq!(pages[2].1.total_pages, 3);
    }

    #[test]
    fn zero_items_zero_pages() {
        let pager = Pager::new(10).unwrap();
        let items: [u8; 0] = [];
        assert!(pager.pages(&items).is_empty());
        assert_eq!(pager.total_pages(0), 0);
    }

    #[test]
    fn borrowed_page_matches_chunks() {
        let pager = Pager::new(2).unwrap();
        let items = [1, 2, 3, 4, 5];
        assert_eq!(pager.page(&items, 1).unwrap(), &[1, 2]);
        assert_eq!(pager.page(&items, 3).unwrap(), &[5]);
        assert_eq!(pager.page(&items, 4).unwrap(), &[] as &[i32]);
    }

    #[test]
    fn borrowed_page_empty_slice_skips_validation() {
        let pager = Pager::new(3).unwrap();
        let items: [u8; 0] = [];
        assert_eq!(pager.page(&items, 0).unwrap(), &[] as &[u8]);
    }

    #[test]
    fn neighbors_at_edges() {
        let pager = Pager::new(10).unwrap();
        let first = pager.info(23, 1);
        assert_eq!(first.prev(), None);
        assert_eq!(first.next(), Some(2));

        let middle = pager.info(23, 2);
        assert_eq!(middle.prev(), Some(1));
        assert_eq!(middle.next(), Some(3));

        let last = pager.info(23, 3);
        assert_eq!(last.prev(), Some(2));
        assert_eq!(last.next(), None);
        assert!(last.is_last());
    }

    #[test]
    fn request_defaults_and_clamping() {
        let req = PageRequest::default();
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, 20);

        let wild = PageRequest {
            page: 0,
            page_size: 10_000,
        };
        let (pager, page) = wild.normalize(100).unwrap();
        assert_eq!(page, 1);
        assert_eq!(pager.page_size(), 100);

        let tiny = PageRequest {
            page: 2,
            page_size: 0,
        };
        let (pager, page) = tiny.normalize(100).unwrap();
        assert_eq!(page, 2);
        assert_eq!(pager.page_size(), 1);
    }
}
